//! Frame management and replacement policies.
//!
//! A simulation keeps a fixed table of frames, each holding at most one
//! page. When a referenced page is missing and every frame is taken, a
//! replacement policy chooses which page to evict.
//!
//! # Components
//! - [`FrameTable`] - The fixed set of slots
//! - [`FaultStats`] - Hit/fault/eviction counters
//! - [`replacer`] - Replacement policy implementations

mod frame_table;
pub mod replacer;
mod stats;

pub use frame_table::FrameTable;
pub use replacer::{Access, FifoReplacer, LruReplacer, OptimalReplacer, PolicyKind, Replacer};
pub use stats::FaultStats;
