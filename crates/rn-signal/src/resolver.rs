//! Signal placement resolution for a whole snapshot.
//!
//! For every junction (in order of first appearance), every controller, and
//! every signal the controller governs:
//!
//! 1. resolve one [`Candidate`] per descriptor of the signal;
//! 2. run the [vote](crate::vote) over the candidates;
//! 3. place the signal `stop_line_setback_m` before the end of the chosen
//!    segment, one signal head per lane, with fresh sequential head numbers;
//! 4. file the heads under `(phase type, sequence, junction)`.
//!
//! Signals that cannot be placed are skipped and reported.

use std::collections::BTreeMap;

use log::{debug, warn};

use rn_core::{Diagnostic, EngineConfig, JunctionId, SegmentId, SignalHeadId, SignalId};
use rn_graph::LinkGraphStore;
use rn_road::{RoadError, RoadMap};

use crate::{
    decide, head_label, normalize_sequences, resolve_placement, tally_voters, Candidate,
    ControllerDescriptor, PhasePlan, PhaseType, SignalRecords, SignalResult,
};

/// One signal head on one lane.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalPlacement {
    pub head: SignalHeadId,
    /// Shared by every head of the same phase at the junction, e.g.
    /// `"3_SCType2_1"`.
    pub label: String,
    pub signal: SignalId,
    pub junction: JunctionId,
    pub sequence: u32,
    pub segment: SegmentId,
    /// 1-based, lane 1 rightmost.
    pub lane: usize,
    pub position: f64,
}

/// `(sequence, junction)` → signal heads, for one phase type.
pub type PhaseGroups = BTreeMap<(u32, JunctionId), Vec<SignalHeadId>>;

/// Output of the signal stage.
#[derive(Clone, Debug, Default)]
pub struct SignalPlan {
    placements: Vec<SignalPlacement>,
    groups: BTreeMap<PhaseType, PhaseGroups>,
    phase_plans: Vec<PhasePlan>,
    controllers: Vec<ControllerDescriptor>,
    diagnostics: Vec<Diagnostic>,
}

impl SignalPlan {
    /// Placements in head-number order.
    pub fn placements(&self) -> &[SignalPlacement] {
        &self.placements
    }

    /// Head groups per phase type.
    pub fn groups(&self) -> &BTreeMap<PhaseType, PhaseGroups> {
        &self.groups
    }

    /// One fixed-time program per phase type in use, ascending.
    pub fn phase_plans(&self) -> &[PhasePlan] {
        &self.phase_plans
    }

    /// Controllers with their normalised sequences.
    pub fn controllers(&self) -> &[ControllerDescriptor] {
        &self.controllers
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn report(&mut self, diag: Diagnostic) {
        warn!("{diag}");
        self.diagnostics.push(diag);
    }
}

/// Resolve every signal in `records`.
///
/// Fails on a junction with more than four controllers or on a store lookup
/// error; unknown roads, unknown signals and unmappable signals are skipped
/// and reported.
pub fn resolve_signals(
    store: &LinkGraphStore,
    roads: &RoadMap,
    records: &SignalRecords,
    config: &EngineConfig,
) -> SignalResult<SignalPlan> {
    let mut plan = SignalPlan { controllers: normalize_sequences(records.controllers()), ..Default::default() };

    // ── Group controllers by junction, first appearance first ─────────────
    let mut junctions: Vec<(JunctionId, Vec<ControllerDescriptor>)> = Vec::new();
    for c in &plan.controllers {
        match junctions.iter_mut().find(|(j, _)| *j == c.junction) {
            Some((_, list)) => list.push(*c),
            None => junctions.push((c.junction, vec![*c])),
        }
    }

    let mut next_head = 1u32;

    for (junction, controllers) in &junctions {
        let phase_type = PhaseType::from_count(*junction, controllers.len())?;
        debug!("{junction}: {} controllers, {phase_type}", controllers.len());

        for ctrl in controllers {
            let signals = records.signals_of(ctrl.controller);
            if signals.is_empty() {
                plan.report(Diagnostic::ControllerWithoutSignals { controller: ctrl.controller });
                continue;
            }

            for &signal in signals {
                let Some(chosen) = resolve_signal(store, roads, records, signal, ctrl, &mut plan)? else {
                    continue;
                };
                let seg = store.get(chosen)?;
                let position = stop_line_position(seg.length, config);
                let label = head_label(*junction, phase_type, ctrl.sequence_normalized);

                let heads = plan
                    .groups
                    .entry(phase_type)
                    .or_default()
                    .entry((ctrl.sequence_normalized, *junction))
                    .or_default();
                for lane in 1..=seg.lane_count() {
                    let head = SignalHeadId(next_head);
                    next_head += 1;
                    heads.push(head);
                    plan.placements.push(SignalPlacement {
                        head,
                        label: label.clone(),
                        signal,
                        junction: *junction,
                        sequence: ctrl.sequence_normalized,
                        segment: seg.id,
                        lane,
                        position,
                    });
                }
            }
        }
    }

    plan.phase_plans = plan.groups.keys().map(|&t| PhasePlan::new(t, config)).collect();
    debug!("{} signal heads placed", plan.placements.len());
    Ok(plan)
}

/// Signals sit `stop_line_setback_m` before the segment end, or at the end
/// of segments shorter than that.
pub(crate) fn stop_line_position(length: f64, config: &EngineConfig) -> f64 {
    if length < config.stop_line_setback_m {
        length
    } else {
        length - config.stop_line_setback_m
    }
}

/// Candidates plus vote for one signal.  `Ok(None)` means skipped.
fn resolve_signal(
    store: &LinkGraphStore,
    roads: &RoadMap,
    records: &SignalRecords,
    signal: SignalId,
    ctrl: &ControllerDescriptor,
    plan: &mut SignalPlan,
) -> SignalResult<Option<SegmentId>> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut seen_any = false;

    for descriptor in records.descriptors_of(signal) {
        seen_any = true;
        match resolve_placement(roads, store, descriptor) {
            Ok(c) => candidates.push(c),
            Err(RoadError::UnknownRoad(key)) => {
                plan.report(Diagnostic::UnknownRoad { signal, key });
            }
            Err(RoadError::Graph(e)) => return Err(e.into()),
        }
    }

    if !seen_any {
        plan.report(Diagnostic::UnknownSignal { controller: ctrl.controller, signal });
        return Ok(None);
    }

    let tally = tally_voters(store, &candidates);
    match decide(&tally, &candidates) {
        Some(vote) => {
            debug!("{signal} → {} ({:?})", vote.segment, vote.tier);
            Ok(Some(vote.segment))
        }
        None => {
            plan.report(Diagnostic::UnmappedSignal { signal });
            Ok(None)
        }
    }
}
