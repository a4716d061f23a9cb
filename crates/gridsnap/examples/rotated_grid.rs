//! Reconstruct a few rotated sample grids and print rows plus recovered angle.
//!
//! Usage:
//!   cargo run -p gridsnap --example rotated_grid
//!   cargo run -p gridsnap --example rotated_grid -- 5 33.5

use gridsnap::synth::{draw_grid, to_lines, ReplayToken, SampleCfg};
use gridsnap::{reconstruct, GridCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let angle: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(30.0);
    let cfg = SampleCfg {
        n,
        angle_deg: angle,
        ..SampleCfg::default()
    };
    for index in 0..3 {
        let pts = draw_grid(&cfg, ReplayToken { seed: 2025, index });
        match reconstruct(to_lines(&pts), &GridCfg::default()) {
            Ok(rec) => {
                println!(
                    "sample {index}: n={} path={} alpha={}",
                    rec.grid.dimension(),
                    rec.path.as_str(),
                    rec.alpha_degrees
                );
                for (r, row) in rec.grid.rows().enumerate() {
                    let cells: Vec<String> =
                        row.iter().map(|p| format!("({:.3},{:.3})", p.x, p.y)).collect();
                    println!("  row {r}: {}", cells.join(" "));
                }
            }
            Err(err) => eprintln!("sample {index}: {err}"),
        }
    }
}
