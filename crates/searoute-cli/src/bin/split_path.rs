//! Print seam-safe render segments for a waypoint list.

use anyhow::bail;
use clap::Parser;
use searoute_cli::report;
use searoute_core::{split_path, Coordinate, DEFAULT_SEAM_OVERSHOOT_DEG};

/// Split a waypoint path at the antimeridian
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Degrees past ±180 for split points
    #[arg(long, default_value_t = DEFAULT_SEAM_OVERSHOOT_DEG)]
    overshoot: f64,

    /// Print segments as JSON
    #[arg(long)]
    json: bool,

    /// Waypoints as LON,LAT (at least two; pass options first)
    #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
    waypoints: Vec<Coordinate>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if !args.overshoot.is_finite() || args.overshoot < 0.0 {
        bail!("--overshoot must be a non-negative number");
    }

    let segments = split_path(&args.waypoints, args.overshoot);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        print!("{}", report::format_segments(&segments));
    }
    Ok(())
}
