//! Pipeline observer trait for progress reporting.

use log::{info, warn};

use rn_core::Diagnostic;

use crate::PipelineOutput;

/// Pipeline stages, in execution order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Fetch,
    Roads,
    Signals,
    Zones,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Roads => "roads",
            Stage::Signals => "signals",
            Stage::Zones => "zones",
        };
        f.write_str(name)
    }
}

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run] around each
/// stage.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: diagnostic counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Counter { skipped: usize }
///
/// impl PipelineObserver for Counter {
///     fn on_diagnostic(&mut self, _stage: Stage, _diag: &Diagnostic) {
///         self.skipped += 1;
///     }
/// }
/// ```
pub trait PipelineObserver {
    /// Called before a stage starts.
    fn on_stage_start(&mut self, _stage: Stage) {}

    /// Called after a stage completed.  `produced` is the number of
    /// entities it built: segments, roads, placements or zones.
    fn on_stage_end(&mut self, _stage: Stage, _produced: usize) {}

    /// Called once per non-fatal diagnostic, after its stage ended.
    fn on_diagnostic(&mut self, _stage: Stage, _diag: &Diagnostic) {}

    /// Called once after the last stage, with the complete output.
    fn on_finish(&mut self, _output: &PipelineOutput) {}
}

/// A [`PipelineObserver`] that does nothing.
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// A [`PipelineObserver`] that reports through the `log` facade.
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_stage_end(&mut self, stage: Stage, produced: usize) {
        info!("{stage}: {produced} built");
    }

    fn on_diagnostic(&mut self, stage: Stage, diag: &Diagnostic) {
        warn!("{stage}: {diag}");
    }

    fn on_finish(&mut self, output: &PipelineOutput) {
        info!(
            "pipeline done: {} roads, {} signal heads, {} zones, {} diagnostics",
            output.roads().len(),
            output.signals().placements().len(),
            output.zones().zones().len(),
            output.diagnostics().count(),
        );
    }
}
