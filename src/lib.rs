//! pagesim - A page replacement simulator comparing FIFO, LRU and Optimal policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Workload (workload/)                        │   │
//! │  │     ReferenceSequence + validation + random generator    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (simulation/)                    │   │
//! │  │     run_simulation → TraceSink → SimulationResult        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Frames + Policies (buffer/)                        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Replacement Policies: FIFO | LRU | OPT        │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │              FrameTable + FaultStats                     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Renderers (simulation::render)                     │   │
//! │  │              text table | JSON | summary                 │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`buffer`] - Frame table and replacement policies
//! - [`simulation`] - The driver, trace events and renderers
//! - [`workload`] - Reference sequences
//!
//! # Quick Start
//! ```
//! use pagesim::{compare_policies, ReferenceSequence};
//!
//! let refs: ReferenceSequence = "7 0 1 2 0 3 0 4 2 3 0 3 2".parse().unwrap();
//! let results = compare_policies(&refs, 4).unwrap();
//!
//! let optimal = results.last().unwrap();
//! assert_eq!(optimal.total_faults, 6);
//! assert!(results.iter().all(|r| r.total_faults >= optimal.total_faults));
//! ```

pub mod buffer;
pub mod common;
pub mod simulation;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimulationConfig, DEFAULT_VALUE_RANGE};
pub use common::{Error, FrameId, PageId, Result};

pub use buffer::{FaultStats, FrameTable, PolicyKind, Replacer};
pub use simulation::{
    compare_policies, run_simulation, run_simulation_into, SimulationResult, TraceEvent, TraceSink,
};
pub use workload::{generate_references, ReferenceSequence};
