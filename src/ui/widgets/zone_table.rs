//! Zone table widget.

use egui::{Grid, RichText, Ui};

use crate::report::ReportTable;
use crate::ui::theme::zone_colors::zone_color32;

/// Renders a report table as a striped grid with a colored zone column.
pub struct ZoneTable;

impl ZoneTable {
    pub fn show(ui: &mut Ui, table: &ReportTable) {
        ui.label(RichText::new(&table.title).size(18.0).strong());
        ui.add_space(6.0);

        Grid::new(("zone_table", table.title.as_str()))
            .striped(true)
            .num_columns(table.headers.len())
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for header in &table.headers {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for row in &table.rows {
                    ui.label(
                        RichText::new(&row.label)
                            .strong()
                            .color(zone_color32(row.zone)),
                    );
                    ui.label(&row.description);
                    ui.label(&row.percentage);
                    ui.label(RichText::new(&row.range).monospace());
                    ui.end_row();
                }
            });
    }
}
