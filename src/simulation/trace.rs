//! Trace events and sinks.

use serde::{Deserialize, Serialize};

use crate::buffer::{FaultStats, PolicyKind};
use crate::common::PageId;

/// One simulation step.
///
/// `frames` is the frame table after the step has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Position of the reference in the sequence.
    pub step: usize,

    /// The referenced page.
    pub page: PageId,

    /// Slot contents after this step, `None` for empty slots.
    pub frames: Vec<Option<PageId>>,

    /// Whether the reference faulted.
    pub fault: bool,

    /// The page displaced by this step, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evicted: Option<PageId>,
}

/// Receives trace events as the driver produces them.
///
/// Renderers that want to stream (rather than wait for a finished
/// [`SimulationResult`]) implement this directly.
pub trait TraceSink {
    /// Called once per reference, in sequence order.
    fn record(&mut self, event: TraceEvent);
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, event: TraceEvent) {
        (**self).record(event);
    }
}

/// The full outcome of running one policy over one sequence.
///
/// # Invariants
/// - `steps` has one entry per reference, in order.
/// - `total_faults` equals the number of steps with `fault == true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Policy that produced this trace.
    pub policy: PolicyKind,

    /// Number of frames simulated.
    pub capacity: usize,

    /// Per-reference trace.
    pub steps: Vec<TraceEvent>,

    /// Number of faulting references.
    pub total_faults: usize,
}

impl SimulationResult {
    /// Hit/fault/eviction counts for this run.
    pub fn stats(&self) -> FaultStats {
        FaultStats::from_events(&self.steps)
    }

    /// The referenced pages, in order.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.steps.iter().map(|event| event.page)
    }
}
