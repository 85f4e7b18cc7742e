//! Optimal (Belady) replacement policy.
//!
//! The optimal policy is not online: it needs the whole reference sequence
//! up front so it can look ahead at every eviction. It is the lower bound
//! the other policies are measured against.

use crate::buffer::replacer::{Access, PolicyKind, Replacer};
use crate::buffer::FrameTable;
use crate::common::{FrameId, PageId};

/// Evicts the resident page whose next reference is farthest away.
///
/// Pages that are never referenced again count as infinitely far. Ties go
/// to the lowest slot index, which keeps runs deterministic.
#[derive(Debug)]
pub struct OptimalReplacer<'a> {
    /// The full sequence being simulated.
    references: &'a [PageId],

    /// Next untouched slot while the table is filling.
    fill: usize,
}

impl<'a> OptimalReplacer<'a> {
    /// Create an optimal replacer for a run over `references`.
    pub fn new(references: &'a [PageId]) -> Self {
        Self {
            references,
            fill: 0,
        }
    }

    /// Position of the first reference to `page` strictly after `step`.
    ///
    /// Returns `usize::MAX` when `page` is never referenced again.
    pub fn next_use(&self, page: PageId, step: usize) -> usize {
        self.references
            .iter()
            .enumerate()
            .skip(step + 1)
            .find(|&(_, &p)| p == page)
            .map_or(usize::MAX, |(i, _)| i)
    }

    /// Pick the slot to evict at `step`.
    ///
    /// Scans slots in physical order and keeps the first one with the
    /// largest next-use distance.
    pub fn victim(&self, table: &FrameTable, step: usize) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut farthest = None;

        for (frame_id, resident) in table.iter() {
            let next = resident.map_or(usize::MAX, |page| self.next_use(page, step));
            if farthest.map_or(true, |f| next > f) {
                farthest = Some(next);
                victim = frame_id;
            }
        }
        victim
    }
}

impl Replacer for OptimalReplacer<'_> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn access(&mut self, table: &mut FrameTable, step: usize, page: PageId) -> Access {
        debug_assert_eq!(self.references.get(step), Some(&page));

        if table.contains(page) {
            return Access::Hit;
        }

        let frame_id = if self.fill < table.capacity() {
            let frame_id = FrameId::new(self.fill);
            self.fill += 1;
            frame_id
        } else {
            self.victim(table, step)
        };

        let evicted = table.assign(frame_id, page);
        if let Some(victim) = evicted {
            log::trace!("OPT evicts {} from {} for {}", victim, frame_id, page);
        }
        Access::Fault { frame_id, evicted }
    }
}
