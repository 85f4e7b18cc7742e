//! FrameTable - the fixed set of slots a policy fills and evicts from.
//!
//! A [`FrameTable`] maps each slot ([`FrameId`]) to the page resident in it,
//! or to nothing while the slot has never been filled. Slot order is purely
//! physical; policies keep their own recency or insertion bookkeeping.

use crate::common::{Error, FrameId, PageId, Result};

/// A fixed-capacity table of frames.
///
/// # Invariants
/// - The number of slots never changes after construction.
/// - Policies assign each page to at most one slot, so at most `capacity`
///   distinct pages are resident at any time.
///
/// # Example
/// ```
/// use pagesim::{FrameId, FrameTable, PageId};
///
/// let mut table = FrameTable::new(3).unwrap();
/// table.assign(FrameId::new(1), PageId::new(7));
///
/// assert!(table.contains(PageId::new(7)));
/// assert_eq!(table.index_of(PageId::new(7)), Some(FrameId::new(1)));
/// assert_eq!(table.snapshot(), vec![None, Some(PageId::new(7)), None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<Option<PageId>>,
}

impl FrameTable {
    /// Create a table with `capacity` empty slots.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: vec![None; capacity],
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Check if `page` is resident in any slot. Linear scan.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&Some(page))
    }

    /// Find the first slot holding `page`.
    pub fn index_of(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    /// The page resident in `frame_id`, if any.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots[frame_id.0]
    }

    /// Number of occupied slots.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Iterate over slots in physical order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, Option<PageId>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (FrameId::new(i), *slot))
    }

    /// Copy of the current slot contents, in physical order.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Put `page` into `frame_id`, overwriting whatever was there.
    ///
    /// Returns the page previously resident in that slot.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range. Policies only ever hand out
    /// slot indices below `capacity`.
    #[inline]
    pub fn assign(&mut self, frame_id: FrameId, page: PageId) -> Option<PageId> {
        self.slots[frame_id.0].replace(page)
    }
}
