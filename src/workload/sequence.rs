//! Validated reference sequence.

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageId, Result};

/// An ordered, immutable sequence of page references.
///
/// Dereferences to `[PageId]`, which is what the policies consume.
///
/// # Example
/// ```
/// use pagesim::ReferenceSequence;
///
/// let refs: ReferenceSequence = "1, 2 3,1".parse().unwrap();
/// assert_eq!(refs.len(), 4);
/// assert_eq!(refs.distinct_count(), 3);
/// assert_eq!(refs.to_string(), "[1, 2, 3, 1]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceSequence(Vec<PageId>);

impl ReferenceSequence {
    /// Build a sequence from signed input, rejecting negative values.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSequence`] naming the first negative value,
    /// or one too large for a [`PageId`].
    pub fn try_from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                u32::try_from(value)
                    .map(PageId::new)
                    .map_err(|_| Error::InvalidSequence { index, value })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// The references as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.0
    }

    /// Number of distinct pages referenced.
    pub fn distinct_count(&self) -> usize {
        self.0.iter().collect::<HashSet<_>>().len()
    }
}

impl From<Vec<PageId>> for ReferenceSequence {
    fn from(pages: Vec<PageId>) -> Self {
        Self(pages)
    }
}

impl From<Vec<u32>> for ReferenceSequence {
    fn from(values: Vec<u32>) -> Self {
        Self(values.into_iter().map(PageId::new).collect())
    }
}

impl Deref for ReferenceSequence {
    type Target = [PageId];

    fn deref(&self) -> &[PageId] {
        &self.0
    }
}

impl FromStr for ReferenceSequence {
    type Err = Error;

    /// Parse a comma and/or whitespace separated list of integers.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| Error::Parse(format!("'{}' is not an integer", token)))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_from_values(values)
    }
}

impl fmt::Display for ReferenceSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, page) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "]")
    }
}
