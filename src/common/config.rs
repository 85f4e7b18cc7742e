//! Configuration defaults for pagesim.

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Reference values are drawn from `0..DEFAULT_VALUE_RANGE` unless told otherwise.
pub const DEFAULT_VALUE_RANGE: u32 = 10;

/// Default length of a generated reference sequence.
pub const DEFAULT_LENGTH: usize = 20;

/// Default number of frames in the frame table.
pub const DEFAULT_FRAMES: usize = 3;

/// Inputs for one simulation request.
///
/// The same configuration (and so the same reference sequence, when a seed
/// is given) can be replayed against every policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of references to generate.
    pub length: usize,
    /// Number of slots in the frame table.
    pub frames: usize,
    /// Upper bound (exclusive) of generated reference values.
    #[serde(default = "default_value_range")]
    pub value_range: u32,
    /// Seed for the reference generator. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_value_range() -> u32 {
    DEFAULT_VALUE_RANGE
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            frames: DEFAULT_FRAMES,
            value_range: DEFAULT_VALUE_RANGE,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Check the frame count. Applies whether references are generated or given.
    pub fn validate_capacity(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(Error::InvalidCapacity(self.frames));
        }
        Ok(())
    }

    /// Check the configuration before any reference is generated.
    pub fn validate(&self) -> Result<()> {
        self.validate_capacity()?;
        if self.value_range == 0 {
            return Err(Error::InvalidValueRange(self.value_range));
        }
        Ok(())
    }
}
