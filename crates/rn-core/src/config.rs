//! Engine configuration.
//!
//! Every tunable constant of the placement, timing and zone stages lives in
//! [`EngineConfig`].  Applications typically load it from a JSON/TOML file
//! (enable the `serde` feature) and pass it to the pipeline runner.

use crate::{CoreError, CoreResult};

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Scale applied to the left-side offset of zone polygons.  Keeps
    /// neighbouring zones from touching, which the consuming engine rejects.
    pub left_margin: f64,

    /// Decimal places kept when comparing the raw slopes of two polyline
    /// runs for collinearity.
    pub slope_precision: u32,

    /// Signals are placed this far before the end of the chosen segment, or
    /// at its end if the segment is shorter.
    pub stop_line_setback_m: f64,

    /// Per-phase share of the cycle for junctions with more than one phase:
    /// `cycle = phase_count * min_phase_secs`.
    pub min_phase_secs: f64,

    /// Cycle length of the single-phase flashing-amber approximation.
    pub flashing_cycle_secs: f64,

    /// Fixed amber duration.
    pub amber_secs: f64,

    /// Red held at the start of every phase slot.
    pub red_tail_secs: f64,

    /// Search radius when snapping a world position onto a segment polyline.
    pub snap_radius_m: f64,

    /// Heading changes within this many degrees of 0 count as straight.
    pub straight_tolerance_deg: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            left_margin:            0.99,
            slope_precision:        5,
            stop_line_setback_m:    3.0,
            min_phase_secs:         40.0,
            flashing_cycle_secs:    9_999.0,
            amber_secs:             3.0,
            red_tail_secs:          1.0,
            snap_radius_m:          3.0,
            straight_tolerance_deg: 30.0,
        }
    }
}

impl EngineConfig {
    /// Reject values that would produce degenerate geometry or timings.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.left_margin > 0.0 && self.left_margin <= 1.0) {
            return Err(CoreError::Config(format!(
                "left_margin must be in (0, 1], got {}",
                self.left_margin
            )));
        }
        if self.stop_line_setback_m < 0.0 {
            return Err(CoreError::Config("stop_line_setback_m must not be negative".into()));
        }
        if self.amber_secs <= 0.0 || self.red_tail_secs <= 0.0 {
            return Err(CoreError::Config("amber_secs and red_tail_secs must be positive".into()));
        }
        // A phase slot must leave room for amber, otherwise green goes negative.
        if self.min_phase_secs <= self.amber_secs {
            return Err(CoreError::Config(format!(
                "min_phase_secs ({}) must exceed amber_secs ({})",
                self.min_phase_secs, self.amber_secs
            )));
        }
        if self.flashing_cycle_secs <= 2.0 * self.red_tail_secs {
            return Err(CoreError::Config(format!(
                "flashing_cycle_secs ({}) leaves no time for amber",
                self.flashing_cycle_secs
            )));
        }
        if self.snap_radius_m <= 0.0 {
            return Err(CoreError::Config("snap_radius_m must be positive".into()));
        }
        if !(0.0..180.0).contains(&self.straight_tolerance_deg) {
            return Err(CoreError::Config("straight_tolerance_deg must be in [0, 180)".into()));
        }
        Ok(())
    }

    /// Round a slope to `slope_precision` decimals.  Infinite slopes
    /// (vertical runs) pass through unchanged.
    pub fn round_slope(&self, slope: f64) -> f64 {
        if !slope.is_finite() {
            return slope;
        }
        let scale = 10f64.powi(self.slope_precision as i32);
        (slope * scale).round() / scale
    }
}
