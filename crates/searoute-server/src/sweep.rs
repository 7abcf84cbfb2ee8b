//! Invariant checks applied to computed plans by the `route_sweep` tool.

use std::collections::HashSet;

use searoute_core::{path_length_km, PlanMode, RoutePlan};

/// Every broken invariant in `plan`, one line each. Empty means the plan is sound.
pub fn check_plan(plan: &RoutePlan) -> Vec<String> {
    let label = format!("{} -> {}", plan.origin.name, plan.destination.name);
    let mut problems = Vec::new();

    let expected = match plan.mode {
        PlanMode::Curated => 4,
        PlanMode::Synthesized => 3,
    };
    if plan.routes.len() != expected {
        problems.push(format!("{label}: {} routes", plan.routes.len()));
    }

    let mut used = HashSet::new();
    for route in &plan.routes {
        if route.waypoints.len() != route.waypoint_names.len() {
            problems.push(format!("{label}/{}: names do not match waypoints", route.id));
        }
        let measured = path_length_km(&route.waypoints).round() as u32;
        if measured != route.distance_km {
            problems.push(format!(
                "{label}/{}: distance {} vs measured {}",
                route.id, route.distance_km, measured
            ));
        }
        if plan.mode == PlanMode::Synthesized {
            let last = route.waypoint_names.len().saturating_sub(1);
            let inner = route.waypoint_names.get(1..last).unwrap_or(&[]);
            for name in inner {
                if !used.insert(name.clone()) {
                    problems.push(format!("{label}/{}: {} reused", route.id, name));
                }
            }
        }
    }
    problems
}
