//! Main application state and egui integration.

use std::path::PathBuf;

use anyhow::Context;
use eframe::egui;

use rustzones::export::{export_to_dir, ExportError};
use rustzones::storage::config::{self, AppConfig, AthleteDefaults, Theme};
use rustzones::ui::screens::{CalculatorAction, CalculatorScreen};

/// Main application state.
pub struct RustZonesApp {
    /// Application configuration
    config: AppConfig,
    /// UI theme
    theme: Theme,
    /// Calculator screen state
    calculator: CalculatorScreen,
}

impl RustZonesApp {
    /// Create the application, loading configuration and prefilling the form.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let theme = config.ui.theme;
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        let calculator = CalculatorScreen::new(config.defaults.to_input());

        Self {
            config,
            theme,
            calculator,
        }
    }

    /// Switch between dark and light themes.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.theme = self.theme;
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    /// Write the current zones to a workbook in the export directory.
    fn export_workbook(&self) -> Result<PathBuf, ExportError> {
        let calculation = self
            .calculator
            .calculation
            .as_ref()
            .ok_or(ExportError::NoData)?;

        let today = chrono::Utc::now().date_naive();
        export_to_dir(&self.config.export.export_dir(), calculation, today)
    }

    /// Store the current form values as defaults.
    fn remember_inputs(&mut self) -> anyhow::Result<()> {
        self.config.defaults = AthleteDefaults::from_input(&self.calculator.input);
        config::save_config(&self.config).context("No se pudo guardar la configuración")
    }

    fn handle_action(&mut self, action: CalculatorAction) {
        match action {
            CalculatorAction::None => {}
            CalculatorAction::Export => {
                let result = self.export_workbook();
                self.calculator.record_export(result);
            }
            CalculatorAction::RememberInputs => match self.remember_inputs() {
                Ok(()) => self.calculator.set_status("Valores guardados", true),
                Err(e) => {
                    tracing::error!("Saving defaults failed: {:#}", e);
                    self.calculator.set_status(format!("{:#}", e), false);
                }
            },
        }
    }
}

impl eframe::App for RustZonesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("RustZones");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.theme {
                        Theme::Dark => "Tema claro",
                        Theme::Light => "Tema oscuro",
                    };
                    if ui.button(theme_label).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        let error_color = self.theme.error_color();
        let success_color = self.theme.success_color();

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.calculator.show(ui, error_color, success_color))
            .inner;

        self.handle_action(action);
    }
}
