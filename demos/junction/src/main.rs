//! junction — runs the full derivation on a synthetic four-leg junction.
//!
//! Usage: `junction [config.json]`.  Without a config file the engine
//! defaults are used.  Set `RUST_LOG=debug` for per-entity progress.

mod network;

use std::time::Instant;

use anyhow::Result;

use rn_core::{EngineConfig, Point2, RoadId};
use rn_graph::SegmentLocator;
use rn_pipeline::{LogObserver, MemorySource, Pipeline};

use network::{build_store, signal_records};

fn load_config() -> Result<EngineConfig> {
    match std::env::args().nth(1) {
        Some(path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    println!("=== junction — rust_rn network engine ===");
    println!();

    // 1. Snapshot.
    let mut source = MemorySource::new(build_store()?, signal_records()?);

    // 2. Run.
    let t0 = Instant::now();
    let output = Pipeline::new(config.clone()).run(&mut source, &mut LogObserver)?;
    let elapsed = t0.elapsed();
    println!("Pipeline complete in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!();

    // 3. Roads.
    println!("{:<12} {:>10}  {}", "Road", "Length", "Chain");
    println!("{}", "-".repeat(48));
    for road in output.roads().iter() {
        let chain: Vec<String> = road.chain.iter().map(|s| s.get().to_string()).collect();
        println!("{:<12} {:>10.1}  {}", road.key.to_string(), road.length, chain.join(" → "));
    }
    println!();

    // 4. Signal heads.
    println!(
        "{:<6} {:<14} {:<8} {:<6} {:<8} {:<6} {:>8}",
        "Head", "Label", "Signal", "Seq", "Segment", "Lane", "Pos"
    );
    println!("{}", "-".repeat(62));
    for p in output.signals().placements() {
        println!(
            "{:<6} {:<14} {:<8} {:<6} {:<8} {:<6} {:>8.1}",
            p.head.get(),
            p.label,
            p.signal.get(),
            p.sequence,
            p.segment.get(),
            p.lane,
            p.position,
        );
    }
    for plan in output.signals().phase_plans() {
        println!(
            "controller {} ({}): cycle {} s, {} signal groups",
            plan.controller_number,
            plan.phase_type,
            plan.cycle_secs,
            plan.timings.len(),
        );
    }
    println!();

    // 5. Zones.
    for zone in output.zones().zones() {
        println!("zone {} on {}: {}", zone.name, zone.segment, zone.wkt());
        for section in &zone.sections {
            println!("  section {} → {}", section.name, section.end);
        }
    }
    println!();

    // 6. Spawn points.
    let locator = SegmentLocator::new(output.store());
    if let Some(hit) = locator.snap(output.store(), Point2::new(-120.0, -3.0), config.snap_radius_m) {
        println!("(-120, -3) snaps to {} lane {} at {:.1} m", hit.segment, hit.lane, hit.position);
    }
    let spawn = output.roads().locate(output.store(), RoadId(2), 40.0, -5.0)?;
    println!("road 2 s=40 t=-5 → {} lane {} at {:.1} m", spawn.segment, spawn.lane, spawn.position);
    println!();

    // 7. Zones as JSON for downstream tooling.
    println!("{}", serde_json::to_string_pretty(output.zones().zones())?);

    Ok(())
}
