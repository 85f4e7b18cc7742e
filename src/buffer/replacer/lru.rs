//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use crate::buffer::replacer::{Access, PolicyKind, Replacer};
use crate::buffer::FrameTable;
use crate::common::{FrameId, PageId};

/// Evicts the page whose last reference is oldest.
///
/// The recency queue holds every resident page exactly once, ordered from
/// least to most recently used, together with the slot it lives in. Until the
/// table has been filled once, faults go to the next untouched slot and no
/// page is evicted.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Front = least recently used.
    recency: VecDeque<(PageId, FrameId)>,

    /// Next untouched slot while the table is filling.
    fill: usize,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            recency: VecDeque::new(),
            fill: 0,
        }
    }

    /// Resident pages from least to most recently used.
    pub fn recency(&self) -> impl Iterator<Item = PageId> + '_ {
        self.recency.iter().map(|&(page, _)| page)
    }

    /// Move `page` to the most-recent end.
    fn touch(&mut self, page: PageId) {
        if let Some(pos) = self.recency.iter().position(|&(p, _)| p == page) {
            if let Some(entry) = self.recency.remove(pos) {
                self.recency.push_back(entry);
            }
        }
    }

    /// Drop the least recently used page once every slot is taken.
    ///
    /// Returns the slot it occupied, or `None` while the table is still filling.
    fn evict(&mut self, capacity: usize, incoming: PageId) -> Option<FrameId> {
        if self.recency.len() < capacity {
            return None;
        }
        let (victim, frame_id) = self.recency.pop_front()?;
        log::trace!("LRU evicts {} from {} for {}", victim, frame_id, incoming);
        Some(frame_id)
    }
}

impl Replacer for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn access(&mut self, table: &mut FrameTable, _step: usize, page: PageId) -> Access {
        if table.contains(page) {
            self.touch(page);
            return Access::Hit;
        }

        let frame_id = match self.evict(table.capacity(), page) {
            Some(frame_id) => frame_id,
            None => {
                let frame_id = FrameId::new(self.fill);
                self.fill += 1;
                frame_id
            }
        };

        let evicted = table.assign(frame_id, page);
        self.recency.push_back((page, frame_id));
        Access::Fault { frame_id, evicted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(replacer: &mut LruReplacer, table: &mut FrameTable, pages: &[u32]) -> Vec<Access> {
        pages
            .iter()
            .enumerate()
            .map(|(step, &p)| replacer.access(table, step, PageId::new(p)))
            .collect()
    }

    fn recency(replacer: &LruReplacer) -> Vec<u32> {
        replacer.recency().map(|p| p.0).collect()
    }

    #[test]
    fn test_lru_basic() {
        let mut replacer = LruReplacer::new();
        let mut table = FrameTable::new(3).unwrap();

        feed(&mut replacer, &mut table, &[1, 2, 3]);
        assert_eq!(recency(&replacer), vec![1, 2, 3]);

        // 1 is least recent, so 4 replaces it in slot 0
        let access = replacer.access(&mut table, 3, PageId::new(4));
        assert_eq!(
            access,
            Access::Fault {
                frame_id: FrameId::new(0),
                evicted: Some(PageId::new(1))
            }
        );
        assert_eq!(recency(&replacer), vec![2, 3, 4]);
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut replacer = LruReplacer::new();
        let mut table = FrameTable::new(3).unwrap();

        feed(&mut replacer, &mut table, &[1, 2, 3, 1]);
        assert_eq!(recency(&replacer), vec![2, 3, 1]);

        // 2 is now least recent
        let access = replacer.access(&mut table, 4, PageId::new(4));
        assert_eq!(
            access,
            Access::Fault {
                frame_id: FrameId::new(1),
                evicted: Some(PageId::new(2))
            }
        );
        assert_eq!(
            table.snapshot(),
            vec![Some(PageId::new(1)), Some(PageId::new(4)), Some(PageId::new(3))]
        );
    }

    #[test]
    fn test_lru_no_duplicates_in_recency() {
        let mut replacer = LruReplacer::new();
        let mut table = FrameTable::new(2).unwrap();

        feed(&mut replacer, &mut table, &[5, 5, 5, 6, 5, 6, 6]);
        assert_eq!(recency(&replacer), vec![5, 6]);
    }

    #[test]
    fn test_lru_no_eviction_while_filling() {
        let mut replacer = LruReplacer::new();
        let mut table = FrameTable::new(4).unwrap();

        let accesses = feed(&mut replacer, &mut table, &[9, 9, 8, 9, 7]);
        for access in accesses {
            if let Access::Fault { evicted, .. } = access {
                assert_eq!(evicted, None);
            }
        }
        assert_eq!(table.resident_count(), 3);
    }

    #[test]
    fn test_lru_textbook_sequence() {
        let mut replacer = LruReplacer::new();
        let mut table = FrameTable::new(3).unwrap();

        let accesses = feed(
            &mut replacer,
            &mut table,
            &[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5],
        );
        let faults = accesses.iter().filter(|a| a.is_fault()).count();
        assert_eq!(faults, 10);
    }
}
