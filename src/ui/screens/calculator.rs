//! Calculator screen: threshold form, zone report and export controls.

use std::path::PathBuf;

use egui::{Color32, RichText, ScrollArea, Ui, Vec2};

use crate::export::ExportError;
use crate::report::{build_report, ZoneReport};
use crate::zones::{calculate, ZoneCalculation, ZoneInput};

use crate::ui::widgets::ZoneTable;

/// Action requested by the user this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorAction {
    None,
    /// Export the current zones to a workbook
    Export,
    /// Store the current inputs as defaults
    RememberInputs,
}

/// Calculator screen state.
pub struct CalculatorScreen {
    /// Form input buffers
    pub input: ZoneInput,
    /// Last successful calculation
    pub calculation: Option<ZoneCalculation>,
    /// Report rendered from the last calculation
    pub report: Option<ZoneReport>,
    /// Validation error message shown in place of the report
    pub error_message: Option<String>,
    /// Export or save status message
    pub status: Option<(String, bool)>,
}

impl Default for CalculatorScreen {
    fn default() -> Self {
        Self::new(ZoneInput::default())
    }
}

impl CalculatorScreen {
    /// Create a screen with prefilled inputs.
    pub fn new(input: ZoneInput) -> Self {
        Self {
            input,
            calculation: None,
            report: None,
            error_message: None,
            status: None,
        }
    }

    /// Run the calculation for the current inputs.
    ///
    /// On failure the previous report is cleared and only the error remains.
    pub fn submit(&mut self) {
        self.status = None;
        match calculate(&self.input) {
            Ok(calculation) => {
                self.report = Some(build_report(&calculation));
                self.calculation = Some(calculation);
                self.error_message = None;
            }
            Err(e) => {
                tracing::debug!("Calculation rejected: {}", e);
                self.calculation = None;
                self.report = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Whether the export button should be offered.
    pub fn can_export(&self) -> bool {
        self.calculation.is_some()
    }

    /// Set a status message (`ok` = success styling).
    pub fn set_status(&mut self, message: impl Into<String>, ok: bool) {
        self.status = Some((message.into(), ok));
    }

    /// Record the outcome of a workbook export in the status line.
    ///
    /// The calculation and report are left untouched either way.
    pub fn record_export(&mut self, result: Result<PathBuf, ExportError>) {
        match result {
            Ok(path) => {
                self.set_status(format!("Archivo guardado: {}", path.display()), true);
            }
            Err(e) => {
                tracing::error!("Excel export failed: {}", e);
                self.set_status(
                    format!("Ocurrió un error al generar el archivo Excel: {}", e),
                    false,
                );
            }
        }
    }

    /// Render the screen.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        error_color: Color32,
        success_color: Color32,
    ) -> CalculatorAction {
        let mut action = CalculatorAction::None;

        ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Calculadora de Zonas de Entrenamiento");
            ui.add_space(12.0);

            let mut submitted = false;
            egui::Grid::new("threshold_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    submitted |= Self::input_row(
                        ui,
                        "Threshold Pace (min/km)",
                        &mut self.input.threshold_pace,
                        "4:30",
                    );
                    submitted |= Self::input_row(
                        ui,
                        "Threshold HR (bpm)",
                        &mut self.input.threshold_hr,
                        "160",
                    );
                    submitted |=
                        Self::input_row(ui, "Max HR (bpm)", &mut self.input.max_hr, "190");
                });

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui
                    .add_sized(
                        Vec2::new(140.0, 32.0),
                        egui::Button::new(RichText::new("Calcular Zonas").size(14.0)),
                    )
                    .clicked()
                {
                    submitted = true;
                }

                if self.can_export()
                    && ui
                        .add_sized(
                            Vec2::new(140.0, 32.0),
                            egui::Button::new(RichText::new("Descargar Excel").size(14.0)),
                        )
                        .clicked()
                {
                    action = CalculatorAction::Export;
                }

                if ui.button("Recordar valores").clicked() {
                    action = CalculatorAction::RememberInputs;
                }
            });

            if submitted {
                self.submit();
            }

            if let Some((message, ok)) = &self.status {
                ui.add_space(8.0);
                let color = if *ok { success_color } else { error_color };
                ui.label(RichText::new(message).color(color));
            }

            ui.add_space(16.0);

            if let Some(error) = &self.error_message {
                ui.label(RichText::new(error).color(error_color).size(15.0));
            } else if let Some(report) = &self.report {
                ui.label(RichText::new(&report.title).size(22.0).strong());
                ui.add_space(12.0);
                ZoneTable::show(ui, &report.pace);
                ui.add_space(20.0);
                ZoneTable::show(ui, &report.heart_rate);
            }
        });

        action
    }

    /// A labeled single-line input. Returns true when Enter was pressed.
    fn input_row(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> bool {
        ui.label(label);
        let response = ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(120.0),
        );
        ui.end_row();
        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }
}
