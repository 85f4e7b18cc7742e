//! Replacement policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts in fill order
//! - [`LruReplacer`] - evicts the least recently referenced page
//! - [`OptimalReplacer`] - Belady's policy, evicts the page used farthest in the future
//!
//! Every replacer drives a [`FrameTable`] one reference at a time through the
//! [`Replacer`] trait, so the simulation driver treats them uniformly.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::FrameTable;
use crate::common::{Error, FrameId, PageId};

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// Outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page was loaded into `frame_id`, replacing `evicted` if the slot
    /// was occupied.
    Fault {
        frame_id: FrameId,
        evicted: Option<PageId>,
    },
}

impl Access {
    /// Check if this reference faulted.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }
}

/// A page replacement policy.
///
/// A replacer owns its recency state and mutates the frame table it is
/// handed. References must be fed in sequence order, with `step` counting
/// from zero.
pub trait Replacer {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Process the reference to `page` at position `step`.
    ///
    /// On a hit the table is left alone. On a fault the replacer picks a
    /// slot and assigns `page` to it before returning.
    fn access(&mut self, table: &mut FrameTable, step: usize, page: PageId) -> Access;
}

/// The closed set of policies the simulator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "LRU")]
    Lru,
    #[serde(rename = "OPT")]
    Optimal,
}

impl PolicyKind {
    /// All policies, in the order they are reported.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "OPT",
        }
    }

    /// Build a fresh replacer for one run over `references`.
    ///
    /// Only the optimal policy looks at `references`; FIFO and LRU process
    /// strictly causally.
    pub fn replacer<'a>(&self, references: &'a [PageId]) -> Box<dyn Replacer + 'a> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new()),
            PolicyKind::Lru => Box::new(LruReplacer::new()),
            PolicyKind::Optimal => Box::new(OptimalReplacer::new(references)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(PolicyKind::Fifo),
            "LRU" => Ok(PolicyKind::Lru),
            "OPT" | "OPTIMAL" | "BELADY" => Ok(PolicyKind::Optimal),
            _ => Err(Error::Parse(format!("unknown policy '{}'", s))),
        }
    }
}
