use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridsnap::synth::{draw_grid, to_lines, ReplayToken, SampleCfg};
use gridsnap::{reconstruct, GridCfg, Point};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod render;

#[derive(Parser)]
#[command(name = "gridsnap")]
#[command(about = "Recover rows, columns and rotation of an N×N point grid")]
struct Cmd {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Reconstruct the grid stored in a text file (one `x,y` entry per line)
    Solve {
        input: PathBuf,
        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
        #[arg(long, default_value_t = ',')]
        separator: char,
        /// Decimal places kept in the reported angle
        #[arg(long, default_value_t = 1)]
        decimals: i32,
    },
    /// Write a synthetic grid as `x,y` lines
    Sample {
        #[arg(long, default_value_t = 4)]
        n: usize,
        #[arg(long, default_value_t = 1.0)]
        spacing: f64,
        /// Rotation in degrees (counter-clockwise)
        #[arg(long, default_value_t = 30.0, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        shear: f64,
        /// Jitter amplitude as a fraction of the spacing
        #[arg(long, default_value_t = 0.0)]
        jitter: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Keep lattice order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            json,
            separator,
            decimals,
        } => {
            let cfg = GridCfg {
                separator,
                angle_decimals: decimals,
            };
            print!("{}", solve(&input, json, &cfg)?);
            Ok(())
        }
        Action::Sample {
            n,
            spacing,
            angle,
            shear,
            jitter,
            seed,
            index,
            no_shuffle,
            out,
        } => {
            let cfg = SampleCfg {
                n,
                spacing,
                angle_deg: angle,
                shear,
                origin: Point::zeros(),
                jitter,
                shuffle: !no_shuffle,
            };
            sample(&cfg, ReplayToken { seed, index }, out.as_deref())
        }
    }
}

/// Non-blank lines of `path`, in order.
fn load_entries(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_owned)
        .collect())
}

fn solve(input: &Path, json: bool, cfg: &GridCfg) -> Result<String> {
    tracing::info!(input = %input.display(), json, "solve");
    let entries = load_entries(input)?;
    let rec = reconstruct(&entries, cfg)
        .with_context(|| format!("processing {}", input.display()))?;
    tracing::info!(
        dimension = rec.grid.dimension(),
        path = rec.path.as_str(),
        alpha = rec.alpha_degrees,
        "grid reconstructed"
    );
    if json {
        let mut doc = render::json(&rec)?;
        doc.push('\n');
        Ok(doc)
    } else {
        Ok(render::text(&rec))
    }
}

fn sample(cfg: &SampleCfg, tok: ReplayToken, out: Option<&Path>) -> Result<()> {
    tracing::info!(n = cfg.n, angle = cfg.angle_deg, seed = tok.seed, "sample");
    let mut body = to_lines(&draw_grid(cfg, tok)).join("\n");
    body.push('\n');
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        }
        None => print!("{body}"),
    }
    Ok(())
}
