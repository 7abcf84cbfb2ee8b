//! Plain-text rendering of plans, ports and segments.

use searoute_core::{Port, RoutePlan, Segment};

pub fn format_port(port: &Port, distance_km: f64) -> String {
    format!(
        "{} ({}), {} [{}] at {:.4}, {:.4} ({:.1} km away)",
        port.name,
        port.code,
        port.country,
        port.region,
        port.coordinates.lon,
        port.coordinates.lat,
        distance_km
    )
}

/// One header line, then one row per route with its waypoint names.
pub fn format_plan(plan: &RoutePlan) -> String {
    let mode = match plan.mode {
        searoute_core::PlanMode::Curated => "curated",
        searoute_core::PlanMode::Synthesized => "synthesized",
    };
    let mut out = format!(
        "{} ({}) -> {} ({}) [{}]\n",
        plan.origin.name, plan.origin.code, plan.destination.name, plan.destination.code, mode
    );
    out.push_str(&format!(
        "{:<28} {:<7} {:>11} {:>7}\n",
        "route", "risk", "distance_km", "eta_h"
    ));
    for route in &plan.routes {
        out.push_str(&format!(
            "{:<28} {:<7} {:>11} {:>7}\n",
            route.name,
            route.risk_level.to_string(),
            route.distance_km,
            route.estimated_hours
        ));
        out.push_str(&format!("  via: {}\n", route.waypoint_names.join(" > ")));
    }
    out
}

pub fn format_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            format!(
                "{:>3}: ({:.4}, {:.4}) -> ({:.4}, {:.4})\n",
                i + 1,
                segment.from.lon,
                segment.from.lat,
                segment.to.lon,
                segment.to.lat
            )
        })
        .collect()
}
