//! Reference sequences: validation, parsing and random generation.
//!
//! This is the input side of the simulator. Policies only ever see a
//! validated [`ReferenceSequence`], so negative values never reach them.

mod generator;
mod sequence;

pub use generator::{generate_references, generate_seeded};
pub use sequence::ReferenceSequence;
