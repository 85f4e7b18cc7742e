//! The simulation driver.
//!
//! ```text
//! run_simulation(policy, sequence, capacity)
//!        │
//!        ▼
//!   FrameTable::new(capacity) ── InvalidCapacity ──▶ Err
//!        │
//!        ▼  for each reference
//!   Replacer::access ──▶ TraceEvent ──▶ TraceSink
//!        │
//!        ▼
//!   total faults
//! ```

use crate::buffer::{Access, FaultStats, FrameTable, PolicyKind};
use crate::common::{PageId, Result};
use crate::simulation::{SimulationResult, TraceEvent, TraceSink};

/// Run `policy` over `references` with `capacity` frames, streaming every
/// step into `sink`.
///
/// Returns the number of faults.
///
/// # Errors
/// Returns [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) if
/// `capacity` is zero. Nothing is sent to `sink` in that case.
pub fn run_simulation_into<S>(
    policy: PolicyKind,
    references: &[PageId],
    capacity: usize,
    mut sink: S,
) -> Result<usize>
where
    S: TraceSink,
{
    let mut table = FrameTable::new(capacity)?;
    let mut replacer = policy.replacer(references);
    let mut stats = FaultStats::new();
    let mut faults = 0usize;

    log::debug!(
        "{}: simulating {} references with {} frames",
        policy,
        references.len(),
        capacity
    );

    for (step, &page) in references.iter().enumerate() {
        let access = replacer.access(&mut table, step, page);
        stats.record(&access);
        if access.is_fault() {
            faults += 1;
        }

        let evicted = match access {
            Access::Fault { evicted, .. } => evicted,
            Access::Hit => None,
        };
        sink.record(TraceEvent {
            step,
            page,
            frames: table.snapshot(),
            fault: access.is_fault(),
            evicted,
        });
    }

    log::debug!("{}: {}", policy, stats);
    Ok(faults)
}

/// Run `policy` over `references` with `capacity` frames and collect the trace.
///
/// # Example
/// ```
/// use pagesim::{run_simulation, PolicyKind, ReferenceSequence};
///
/// let refs = ReferenceSequence::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let result = run_simulation(PolicyKind::Fifo, &refs, 3).unwrap();
///
/// assert_eq!(result.total_faults, 9);
/// assert_eq!(result.steps.len(), refs.len());
/// ```
pub fn run_simulation(
    policy: PolicyKind,
    references: &[PageId],
    capacity: usize,
) -> Result<SimulationResult> {
    let mut steps = Vec::with_capacity(references.len());
    let total_faults = run_simulation_into(policy, references, capacity, &mut steps)?;

    Ok(SimulationResult {
        policy,
        capacity,
        steps,
        total_faults,
    })
}

/// Run every policy in [`PolicyKind::ALL`] over the same input.
pub fn compare_policies(references: &[PageId], capacity: usize) -> Result<Vec<SimulationResult>> {
    PolicyKind::ALL
        .iter()
        .map(|&policy| run_simulation(policy, references, capacity))
        .collect()
}
