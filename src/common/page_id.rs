//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A referenced page (or cache line) identifier.
///
/// Reference values are non-negative by construction; negative input is
/// rejected when a [`ReferenceSequence`](crate::workload::ReferenceSequence)
/// is built.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(7);
/// assert_eq!(page_id.0, 7);
/// assert_eq!(page_id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
