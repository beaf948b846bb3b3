//! campus — end-to-end walk through the navigation engine on the Legon
//! campus dataset.
//!
//! ```text
//! cargo run -p campus -- "Main Gate" "Faculty of Arts" fastest
//! ```
//!
//! Arguments are optional: origin name, destination name, and `fastest` or
//! `shortest`.  Set `CAMPUS_NAV_CONFIG` to a JSON `NavConfig` file to
//! override the defaults, and `RUST_LOG` for engine tracing.

mod network;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_alloc::{TransportationProblem, VamSolver};
use nav_core::{Location, LocationCategory, NavConfig};
use nav_plan::{NavigationService, RoutePreference, RouteSorter, SortAlgorithm, SortCriterion};
use nav_spatial::CampusGraph;

use network::build_campus;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_FROM: &str = "Main Gate";
const DEFAULT_TO:   &str = "Faculty of Arts";
const CONFIG_ENV:   &str = "CAMPUS_NAV_CONFIG";

/// Transport hubs and their shuttle seats per hour.
const HUBS: [(&str, f64); 3] = [
    ("shuttle_station", 120.0),
    ("taxi_rank",        60.0),
    ("car_park_a",       70.0),
];

/// Faculties and the students arriving per hour.
const FACULTIES: [(&str, f64); 4] = [
    ("arts_faculty",        80.0),
    ("science_faculty",     60.0),
    ("engineering_faculty", 50.0),
    ("business_school",     60.0),
];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campus=info")))
        .init();

    let mut args = std::env::args().skip(1);
    let from = args.next().unwrap_or_else(|| DEFAULT_FROM.to_owned());
    let to = args.next().unwrap_or_else(|| DEFAULT_TO.to_owned());
    let preference: RoutePreference = match args.next() {
        Some(p) => p.parse()?,
        None => RoutePreference::default(),
    };

    println!("=== campus — navigation engine demo ===");

    // 1. Graph and service.
    let graph = build_campus().context("loading embedded campus dataset")?;
    println!("Campus graph: {} locations, {} directed edges", graph.location_count(), graph.edge_count());

    let config = load_config()?;
    let service = NavigationService::with_config(&graph, config)?;
    println!();

    // 2. Best routes for the chosen preference.
    let metric = preference.metric();
    let t0 = Instant::now();
    let routes = service.find_routes_by_name(&from, &to, metric, service.config().default_max_routes)?;
    info!(%from, %to, %metric, found = routes.len(), elapsed_us = t0.elapsed().as_micros() as u64, "routes found");

    println!("Routes {from} -> {to} ({metric}):");
    if routes.is_empty() {
        println!("  (unreachable)");
    }
    for (i, route) in routes.iter().enumerate() {
        println!("  {}. {route}", i + 1);
        println!("     via {}", names(route.waypoints(), " > "));
    }
    println!();

    // 3. Routes through a bank.
    let via_bank = service.routes_via_landmark_by_name(&from, &to, LocationCategory::Bank, 3)?;
    println!("Routes passing a {}:", LocationCategory::Bank.display_name());
    for route in &via_bank {
        println!("  {route}");
    }
    println!();

    // 4. Every criterion under every algorithm.
    let mut pool = routes.clone();
    pool.extend(via_bank);
    println!("{:<16} {:<6} {}", "Criterion", "Algo", "Order");
    println!("{}", "-".repeat(60));
    for criterion in SortCriterion::ALL {
        for algorithm in SortAlgorithm::ALL {
            let order = RouteSorter::new(criterion, algorithm).sort_refs(&pool);
            let labels: Vec<&str> = order.iter().map(|r| r.label()).collect();
            println!("{:<16} {:<6} {}", format!("{criterion:?}"), format!("{algorithm:?}"), labels.join(", "));
        }
    }
    println!();

    // 5. Analysis of the best route.
    if let Some(best) = routes.first() {
        println!("{}", service.analyze(best));
        println!();
    }

    // 6. Keyword search.
    for keyword in ["hall", "bank"] {
        let hits = service.search_locations(keyword);
        println!("Search {keyword:?}: {}", names(hits, ", "));
    }
    println!();

    // 7. Shuttle allocation, hubs -> faculties, cost in metres.
    allocate_shuttles(&graph, service.config())?;

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config() -> Result<NavConfig> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(NavConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: NavConfig = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    info!(%path, ?config, "loaded config");
    Ok(config)
}

fn names<'a>(locations: impl IntoIterator<Item = &'a Arc<Location>>, sep: &str) -> String {
    locations.into_iter().map(|l| l.name.as_str()).collect::<Vec<_>>().join(sep)
}

fn lookup(graph: &CampusGraph, keys: &[(&str, f64)]) -> Result<(Vec<Arc<Location>>, Vec<f64>)> {
    keys.iter()
        .map(|&(key, qty)| -> Result<(Arc<Location>, f64)> {
            let loc = graph.location_by_key(key).with_context(|| format!("missing location {key}"))?;
            Ok((loc.clone(), qty))
        })
        .collect::<Result<Vec<_>>>()
        .map(|pairs| pairs.into_iter().unzip())
}

fn allocate_shuttles(graph: &CampusGraph, config: &NavConfig) -> Result<()> {
    let (sources, supply) = lookup(graph, &HUBS)?;
    let (destinations, demand) = lookup(graph, &FACULTIES)?;

    let problem = TransportationProblem::from_locations(sources, destinations, supply, demand)?;
    let plan = VamSolver::with_budget(config.budget).solve(&problem)?;

    println!(
        "Shuttle allocation ({} hubs -> {} faculties, balanced: {}):",
        problem.rows(),
        problem.cols(),
        problem.is_balanced()
    );
    for allocation in plan.allocations() {
        println!("  {allocation}");
    }
    println!("  Total cost: {:.1} seat-metres", plan.total_cost());
    Ok(())
}
