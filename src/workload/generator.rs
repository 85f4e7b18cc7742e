//! Random reference generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{Error, PageId, Result};
use crate::workload::ReferenceSequence;

/// Draw `n` references uniformly from `0..value_range`.
///
/// # Errors
/// Returns [`Error::InvalidValueRange`] if `value_range` is zero.
pub fn generate_references<R: Rng>(
    n: usize,
    value_range: u32,
    rng: &mut R,
) -> Result<ReferenceSequence> {
    if value_range == 0 {
        return Err(Error::InvalidValueRange(value_range));
    }
    let pages: Vec<PageId> = (0..n)
        .map(|_| PageId::new(rng.gen_range(0..value_range)))
        .collect();
    log::debug!("generated {} references in 0..{}", n, value_range);
    Ok(ReferenceSequence::from(pages))
}

/// Generate references from a fixed seed, or from OS entropy if `seed` is `None`.
pub fn generate_seeded(n: usize, value_range: u32, seed: Option<u64>) -> Result<ReferenceSequence> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_references(n, value_range, &mut rng)
}
