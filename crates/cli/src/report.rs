use std::io::{self, Write};

use planimetry::Figure;
use serde::Serialize;

/// Printable summary of one figure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FigureReport {
    pub kind: &'static str,
    pub label: &'static str,
    pub perimeter: f64,
    pub area: f64,
    pub description: String,
}

impl FigureReport {
    pub fn of(figure: &dyn Figure) -> Self {
        let kind = figure.kind();
        Self {
            kind: kind.name(),
            label: kind.label(),
            perimeter: figure.perimeter(),
            area: figure.area(),
            description: figure.to_string(),
        }
    }
}

/// Plain-text block per figure: type, perimeter, area, then the description.
pub fn write_text<W: Write>(mut out: W, reports: &[FigureReport]) -> io::Result<()> {
    for r in reports {
        writeln!(out)?;
        writeln!(out, "Figure type:")?;
        writeln!(out, "{}", r.label)?;
        writeln!(out, "Figure perimeter:")?;
        writeln!(out, "{}", r.perimeter)?;
        writeln!(out, "Figure area:")?;
        writeln!(out, "{}", r.area)?;
        writeln!(out, "{}", r.description)?;
    }
    Ok(())
}
