//! Computes plans for every ordered port pair in the catalog and reports any
//! plan that breaks the route invariants.

use std::time::Instant;

use anyhow::Result;
use searoute_core::PlanMode;
use searoute_server::config::Config;
use searoute_server::state::AppState;
use searoute_server::sweep::check_plan;

fn main() -> Result<()> {
    let config = Config::from_env();
    let state = AppState::new(config)?;
    let engine = state.engine()?;
    let ports: Vec<_> = state.directory().iter().collect();

    let started = Instant::now();
    let mut plans = 0usize;
    let mut curated = 0usize;
    let mut failures = Vec::new();

    for origin in &ports {
        for destination in &ports {
            if origin.name == destination.name {
                continue;
            }
            match engine.plan_between(origin, destination) {
                Ok(plan) => {
                    plans += 1;
                    if plan.mode == PlanMode::Curated {
                        curated += 1;
                    }
                    failures.extend(check_plan(&plan));
                }
                Err(err) => failures.push(format!(
                    "{} -> {}: {}",
                    origin.name, destination.name, err
                )),
            }
        }
    }

    let elapsed = started.elapsed();
    println!(
        "Computed {} plans ({} curated) over {} ports in {:.1?}",
        plans,
        curated,
        ports.len(),
        elapsed
    );
    if failures.is_empty() {
        println!("Invariant check: PASS");
    } else {
        println!("Invariant check: FAIL ({})", failures.len());
        for failure in &failures {
            println!(" - {}", failure);
        }
    }
    Ok(())
}
