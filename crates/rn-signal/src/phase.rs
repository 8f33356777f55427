//! Phase types and fixed-time signal programs.
//!
//! The number of controllers at a junction selects its phase type, and every
//! phase type maps to one fixed-time controller shared by all junctions of
//! that type.
//!
//! # Timing
//!
//! For `n > 1` phases the cycle is `n * min_phase_secs`, split into `n` equal
//! slots.  Phase `i` (1-based) owns slot `i`:
//!
//! ```text
//!  start = (i-1)·slot
//!  ├─ red ─┤──────── green ────────┤─ amber ─┤
//!  start   start+red_tail          start+slot-amber   start+slot
//! ```
//!
//! A single phase approximates flashing amber: the cycle is
//! `flashing_cycle_secs`, red and green are held for `red_tail_secs` each
//! and amber covers the rest.

use rn_core::{EngineConfig, JunctionId};

use crate::{SignalError, SignalResult};

/// 1 to 4 phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseType {
    One,
    Two,
    Three,
    Four,
}

impl PhaseType {
    /// Classify a junction by its controller count.
    pub fn from_count(junction: JunctionId, count: usize) -> SignalResult<Self> {
        match count {
            1 => Ok(PhaseType::One),
            2 => Ok(PhaseType::Two),
            3 => Ok(PhaseType::Three),
            4 => Ok(PhaseType::Four),
            _ => Err(SignalError::UnsupportedPhaseCount { junction, count }),
        }
    }

    #[inline]
    pub fn phase_count(self) -> u32 {
        match self {
            PhaseType::One => 1,
            PhaseType::Two => 2,
            PhaseType::Three => 3,
            PhaseType::Four => 4,
        }
    }

    /// Number of the engine-side controller for this phase type.
    #[inline]
    pub fn controller_number(self) -> u32 {
        self.phase_count() * 10
    }
}

impl std::fmt::Display for PhaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SCType{}", self.phase_count())
    }
}

/// Name given to the signal heads of one phase at one junction.
pub fn head_label(junction: JunctionId, phase_type: PhaseType, sequence: u32) -> String {
    format!("{}_{}_{}", junction.get(), phase_type, sequence)
}

/// Timing of one signal group, in seconds from cycle start.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseTiming {
    pub sequence: u32,
    pub start_offset: f64,
    pub end_red: f64,
    pub end_green: f64,
    pub amber: f64,
}

/// Fixed-time program of one controller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhasePlan {
    pub phase_type: PhaseType,
    pub controller_number: u32,
    pub cycle_secs: f64,
    /// `true` for the single-phase flashing-amber approximation.
    pub flashing_amber: bool,
    pub timings: Vec<PhaseTiming>,
}

impl PhasePlan {
    pub fn new(phase_type: PhaseType, config: &EngineConfig) -> Self {
        let n = phase_type.phase_count();
        let red = config.red_tail_secs;

        if n == 1 {
            let cycle = config.flashing_cycle_secs;
            return Self {
                phase_type,
                controller_number: phase_type.controller_number(),
                cycle_secs: cycle,
                flashing_amber: true,
                timings: vec![PhaseTiming {
                    sequence:     1,
                    start_offset: 0.0,
                    end_red:      red,
                    end_green:    2.0 * red,
                    amber:        cycle - 2.0 * red,
                }],
            };
        }

        let cycle = f64::from(n) * config.min_phase_secs;
        let slot = cycle / f64::from(n);
        let amber = config.amber_secs;
        let timings = (1..=n)
            .map(|i| {
                let start = f64::from(i - 1) * slot;
                PhaseTiming {
                    sequence:     i,
                    start_offset: start,
                    end_red:      start + red,
                    end_green:    start + slot - amber,
                    amber,
                }
            })
            .collect();

        Self {
            phase_type,
            controller_number: phase_type.controller_number(),
            cycle_secs: cycle,
            flashing_amber: false,
            timings,
        }
    }
}
