//! Text and JSON renderings of a reconstructed grid.
//!
//! Text layout, one line each:
//!   `Row {r}: x,y - x,y - …`, then `Column {c}: …`, then `Alpha={a} degrees`.

use gridsnap::{Point, Reconstruction};
use serde::Serialize;

/// Separator between points on a row or column line.
pub const DASH: &str = " - ";

/// JSON document for one reconstruction.
#[derive(Debug, Serialize)]
pub struct Report {
    pub dimension: usize,
    pub path: &'static str,
    pub rows: Vec<Vec<[f64; 2]>>,
    pub columns: Vec<Vec<[f64; 2]>>,
    pub alpha_degrees: f64,
}

impl Report {
    pub fn new(rec: &Reconstruction) -> Self {
        let pair = |p: &Point| [p.x, p.y];
        Self {
            dimension: rec.grid.dimension(),
            path: rec.path.as_str(),
            rows: rec
                .grid
                .rows()
                .map(|row| row.iter().map(pair).collect())
                .collect(),
            columns: rec
                .grid
                .columns()
                .iter()
                .map(|col| col.iter().map(pair).collect())
                .collect(),
            alpha_degrees: rec.alpha_degrees,
        }
    }
}

pub fn format_point(p: &Point) -> String {
    format!("{},{}", p.x, p.y)
}

fn join(points: &[Point]) -> String {
    points
        .iter()
        .map(format_point)
        .collect::<Vec<_>>()
        .join(DASH)
}

/// Plain-text report with a trailing newline.
pub fn text(rec: &Reconstruction) -> String {
    let mut out = String::new();
    for (r, row) in rec.grid.rows().enumerate() {
        out.push_str(&format!("Row {r}: {}\n", join(row)));
    }
    for (c, col) in rec.grid.columns().iter().enumerate() {
        out.push_str(&format!("Column {c}: {}\n", join(col)));
    }
    out.push_str(&format!("Alpha={} degrees\n", rec.alpha_degrees));
    out
}

pub fn json(rec: &Reconstruction) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(rec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsnap::{reconstruct, GridCfg};
    use serde_json::Value;

    fn unit_square() -> Reconstruction {
        reconstruct(["0,0", "0,1", "1,0", "1,1"], &GridCfg::default()).unwrap()
    }

    #[test]
    fn text_matches_line_contract() {
        let out = text(&unit_square());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Row 0: 0,1 - 1,1",
                "Row 1: 0,0 - 1,0",
                "Column 0: 0,1 - 0,0",
                "Column 1: 1,1 - 1,0",
                "Alpha=0 degrees",
            ]
        );
    }

    #[test]
    fn text_keeps_fractional_values() {
        let rec = reconstruct(["0,0", "2,1", "-1,2", "1,3.5"], &GridCfg::default());
        // Not a lattice: the fourth corner is off, but reconstruction still runs.
        let out = text(&rec.unwrap());
        assert!(out.starts_with("Row 0: -1,2 - 1,3.5\n"), "{out}");
        assert!(out.ends_with("Alpha=26.6 degrees\n"), "{out}");
    }

    #[test]
    fn json_has_rows_columns_and_path() {
        let doc: Value = serde_json::from_str(&json(&unit_square()).unwrap()).unwrap();
        assert_eq!(doc["dimension"], 2);
        assert_eq!(doc["path"], "axis_aligned");
        assert_eq!(doc["rows"][0][1][0], 1.0);
        assert_eq!(doc["columns"][1][1][1], 0.0);
        assert_eq!(doc["alpha_degrees"], 0.0);
    }
}
