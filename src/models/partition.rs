//! Two-tier display buckets.

use serde::Serialize;

/// Records split into a promoted tier and the rest.
///
/// Both buckets keep the relative order of the input they were split from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition<T> {
    /// Records in the promoted tier.
    pub featured: Vec<T>,
    /// All remaining records.
    pub regular: Vec<T>,
}

impl<T> Partition<T> {
    /// Creates an empty partition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            featured: Vec::new(),
            regular: Vec::new(),
        }
    }

    /// Total number of records across both buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    /// Returns true if both buckets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self::new()
    }
}
