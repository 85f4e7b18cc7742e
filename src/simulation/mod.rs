//! Running policies over reference sequences.
//!
//! # Components
//! - [`run_simulation`] / [`run_simulation_into`] - The driver
//! - [`TraceEvent`] / [`TraceSink`] - Per-step trace and where it goes
//! - [`SimulationResult`] - Everything a renderer needs
//! - [`render`] - Text and JSON renderers

mod driver;
pub mod render;
mod trace;

pub use driver::{compare_policies, run_simulation, run_simulation_into};
pub use trace::{SimulationResult, TraceEvent, TraceSink};
