//! Resolve a position to the closest catalog port.

use clap::Parser;
use searoute_cli::report;
use searoute_core::{distance_km, Coordinate, ExclusionSet, PortDirectory};

/// Find the nearest port to a position
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Position as LON,LAT
    #[arg(allow_hyphen_values = true)]
    position: Coordinate,

    /// Port name to skip (repeatable)
    #[arg(long)]
    exclude: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let directory = PortDirectory::builtin();
    let excluded: ExclusionSet = args.exclude.into_iter().collect();
    let port = directory.nearest_port(args.position, &excluded)?;

    println!(
        "{}",
        report::format_port(port, distance_km(args.position, port.coordinates))
    );
    Ok(())
}
