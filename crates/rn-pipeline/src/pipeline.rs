//! The strict-order runner.
//!
//! ```text
//! validate config ─► fetch ─► reconstruct ─► resolve_signals ─► build_zones
//! ```
//!
//! Each stage reads only what earlier stages produced and nothing is mutated
//! after its stage ends.  A fatal error in any stage aborts the run and
//! drops everything built so far; the caller retries from a fresh snapshot.

use log::debug;

use rn_core::{Diagnostic, EngineConfig};
use rn_graph::LinkGraphStore;
use rn_road::{reconstruct, RoadMap};
use rn_signal::{resolve_signals, SignalPlan};
use rn_zone::{build_zones, ZoneSet};

use crate::{PipelineObserver, PipelineResult, SnapshotSource, Stage};

/// Everything one run derived from one snapshot.
pub struct PipelineOutput {
    store: LinkGraphStore,
    roads: RoadMap,
    signals: SignalPlan,
    zones: ZoneSet,
}

impl PipelineOutput {
    pub fn store(&self) -> &LinkGraphStore {
        &self.store
    }

    pub fn roads(&self) -> &RoadMap {
        &self.roads
    }

    pub fn signals(&self) -> &SignalPlan {
        &self.signals
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    /// Every non-fatal diagnostic, in stage order.
    pub fn diagnostics(&self) -> impl Iterator<Item = (Stage, &Diagnostic)> + '_ {
        let roads = self.roads.diagnostics().iter().map(|d| (Stage::Roads, d));
        let signals = self.signals.diagnostics().iter().map(|d| (Stage::Signals, d));
        let zones = self.zones.diagnostics().iter().map(|d| (Stage::Zones, d));
        roads.chain(signals).chain(zones)
    }
}

/// Runs the four stages against a [`SnapshotSource`].
///
/// # Example
///
/// ```rust,ignore
/// let source = MemorySource::new(store, records);
/// let output = Pipeline::new(EngineConfig::default())
///     .run(&mut source, &mut LogObserver)?;
/// for zone in output.zones().zones() {
///     println!("{}: {}", zone.name, zone.wkt());
/// }
/// ```
pub struct Pipeline {
    config: EngineConfig,
}

impl Pipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fetch one snapshot and derive roads, signal placements and zones.
    pub fn run<S, O>(&self, source: &mut S, observer: &mut O) -> PipelineResult<PipelineOutput>
    where
        S: SnapshotSource + ?Sized,
        O: PipelineObserver + ?Sized,
    {
        self.config.validate()?;

        observer.on_stage_start(Stage::Fetch);
        let snapshot = source.fetch()?;
        observer.on_stage_end(Stage::Fetch, snapshot.store.len());
        let store = snapshot.store;

        observer.on_stage_start(Stage::Roads);
        let roads = reconstruct(&store)?;
        observer.on_stage_end(Stage::Roads, roads.len());
        report(observer, Stage::Roads, roads.diagnostics());

        observer.on_stage_start(Stage::Signals);
        let signals = resolve_signals(&store, &roads, &snapshot.records, &self.config)?;
        observer.on_stage_end(Stage::Signals, signals.placements().len());
        report(observer, Stage::Signals, signals.diagnostics());

        observer.on_stage_start(Stage::Zones);
        let zones = build_zones(&store, signals.placements(), &self.config)?;
        observer.on_stage_end(Stage::Zones, zones.zones().len());
        report(observer, Stage::Zones, zones.diagnostics());

        let output = PipelineOutput { store, roads, signals, zones };
        debug!("pipeline produced {} zones", output.zones.zones().len());
        observer.on_finish(&output);
        Ok(output)
    }
}

fn report<O: PipelineObserver + ?Sized>(observer: &mut O, stage: Stage, diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        observer.on_diagnostic(stage, diag);
    }
}
