//! Compute candidate routes between two positions or ports.

use clap::Parser;
use searoute_cli::{plan, report, Endpoint};
use searoute_core::{Coordinate, PortDirectory, RouteEngine};

/// Compute maritime routes (curated or synthesized)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Origin position as LON,LAT
    #[arg(long, allow_hyphen_values = true)]
    from: Option<Coordinate>,

    /// Destination position as LON,LAT
    #[arg(long, allow_hyphen_values = true)]
    to: Option<Coordinate>,

    /// Origin port name or UN/LOCODE
    #[arg(long)]
    from_port: Option<String>,

    /// Destination port name or UN/LOCODE
    #[arg(long)]
    to_port: Option<String>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let origin = Endpoint::from_args(args.from, args.from_port, "from")?;
    let destination = Endpoint::from_args(args.to, args.to_port, "to")?;

    let directory = PortDirectory::builtin();
    let engine = RouteEngine::new(&directory);
    let plan = plan(&engine, &origin, &destination)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", report::format_plan(&plan));
    }
    Ok(())
}
