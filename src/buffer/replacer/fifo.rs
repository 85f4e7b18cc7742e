//! FIFO (First-In-First-Out) replacement policy.

use crate::buffer::replacer::{Access, PolicyKind, Replacer};
use crate::buffer::FrameTable;
use crate::common::{FrameId, PageId};

/// Evicts pages in the order their slots were filled.
///
/// A single write pointer walks the slots round-robin. Because every fault
/// writes at the pointer and advances it, the slot under the pointer always
/// holds the oldest resident page. Hits never move the pointer, so access
/// pattern after insertion has no effect on the victim.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Next slot to write.
    next: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// The slot the next fault will be written to.
    pub fn next_victim(&self) -> FrameId {
        FrameId::new(self.next)
    }
}

impl Replacer for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn access(&mut self, table: &mut FrameTable, _step: usize, page: PageId) -> Access {
        if table.contains(page) {
            return Access::Hit;
        }

        let frame_id = FrameId::new(self.next);
        let evicted = table.assign(frame_id, page);
        self.next = (self.next + 1) % table.capacity();

        if let Some(victim) = evicted {
            log::trace!("FIFO evicts {} from {} for {}", victim, frame_id, page);
        }
        Access::Fault { frame_id, evicted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(replacer: &mut FifoReplacer, table: &mut FrameTable, pages: &[u32]) -> Vec<Access> {
        pages
            .iter()
            .enumerate()
            .map(|(step, &p)| replacer.access(table, step, PageId::new(p)))
            .collect()
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new();
        let mut table = FrameTable::new(3).unwrap();

        // Fill 0, 1, 2 then evict in fill order
        let accesses = feed(&mut replacer, &mut table, &[0, 1, 2, 3, 4]);

        assert_eq!(
            accesses[3],
            Access::Fault {
                frame_id: FrameId::new(0),
                evicted: Some(PageId::new(0))
            }
        );
        assert_eq!(
            accesses[4],
            Access::Fault {
                frame_id: FrameId::new(1),
                evicted: Some(PageId::new(1))
            }
        );
        assert_eq!(
            table.snapshot(),
            vec![Some(PageId::new(3)), Some(PageId::new(4)), Some(PageId::new(2))]
        );
    }

    #[test]
    fn test_fifo_hit_leaves_table_alone() {
        let mut replacer = FifoReplacer::new();
        let mut table = FrameTable::new(2).unwrap();

        feed(&mut replacer, &mut table, &[1, 2]);
        let before = table.snapshot();

        let access = replacer.access(&mut table, 2, PageId::new(1));

        assert_eq!(access, Access::Hit);
        assert_eq!(table.snapshot(), before);
        assert_eq!(replacer.next_victim(), FrameId::new(0));
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new();
        let mut table = FrameTable::new(2).unwrap();

        // Re-referencing 0 does NOT protect it
        feed(&mut replacer, &mut table, &[0, 1, 0]);
        let access = replacer.access(&mut table, 3, PageId::new(2));

        assert_eq!(
            access,
            Access::Fault {
                frame_id: FrameId::new(0),
                evicted: Some(PageId::new(0))
            }
        );
    }

    #[test]
    fn test_fifo_pointer_wraps() {
        let mut replacer = FifoReplacer::new();
        let mut table = FrameTable::new(2).unwrap();

        feed(&mut replacer, &mut table, &[1, 2, 3, 4]);

        assert_eq!(replacer.next_victim(), FrameId::new(0));
        assert_eq!(table.snapshot(), vec![Some(PageId::new(3)), Some(PageId::new(4))]);
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut replacer = FifoReplacer::new();
        let mut table = FrameTable::new(1).unwrap();

        let accesses = feed(&mut replacer, &mut table, &[4, 4, 5, 4]);
        let faults: Vec<bool> = accesses.iter().map(Access::is_fault).collect();

        assert_eq!(faults, vec![true, false, true, true]);
    }
}
