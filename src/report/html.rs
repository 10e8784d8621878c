//! HTML rendering of the zone report.

use std::fmt::Write;

use html_escape::encode_text;

use super::formatter::{ReportTable, ZoneReport};

fn write_table(out: &mut String, table: &ReportTable) -> std::fmt::Result {
    writeln!(out, "<h3>{}</h3>", encode_text(&table.title))?;
    writeln!(out, "<table class=\"zones-table\">")?;
    writeln!(out, "  <thead>")?;
    writeln!(out, "    <tr>")?;
    for header in &table.headers {
        writeln!(out, "      <th>{}</th>", encode_text(header))?;
    }
    writeln!(out, "    </tr>")?;
    writeln!(out, "  </thead>")?;
    writeln!(out, "  <tbody>")?;
    for row in &table.rows {
        writeln!(out, "    <tr>")?;
        for cell in [&row.label, &row.description, &row.percentage, &row.range] {
            writeln!(out, "      <td>{}</td>", encode_text(cell))?;
        }
        writeln!(out, "    </tr>")?;
    }
    writeln!(out, "  </tbody>")?;
    writeln!(out, "</table>")
}

fn write_report(out: &mut String, report: &ZoneReport) -> std::fmt::Result {
    writeln!(out, "<h2>{}</h2>", encode_text(&report.title))?;
    write_table(out, &report.pace)?;
    write_table(out, &report.heart_rate)
}

/// Render the report as an HTML fragment.
pub fn render_html(report: &ZoneReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}
