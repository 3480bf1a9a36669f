//! Cash inventory model.
//!
//! This module defines the [`Inventory`] type: a mapping from denomination
//! value to the number of physical bills available in the till.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A count of physical bills per denomination value.
///
/// Counts are non-negative by construction (`u32`). The allocator never
/// mutates a caller-supplied inventory; it clones a working copy and
/// returns the depleted copy as the final state, so a failed or repeated
/// calculation cannot corrupt the original counts.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::Inventory;
///
/// let inventory = Inventory::from_counts([(100, 2), (50, 1)]);
/// assert_eq!(inventory.count(100), 2);
/// assert_eq!(inventory.count(20), 0);
/// assert_eq!(inventory.total_value(), 250);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: BTreeMap<u64, u32>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory from (denomination, count) pairs.
    ///
    /// Later pairs with the same denomination overwrite earlier ones.
    pub fn from_counts(pairs: impl IntoIterator<Item = (u64, u32)>) -> Self {
        Self {
            counts: pairs.into_iter().collect(),
        }
    }

    /// Returns the count available for a denomination, zero if absent.
    pub fn count(&self, denomination: u64) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Sets the count for a denomination.
    pub fn set_count(&mut self, denomination: u64, count: u32) {
        self.counts.insert(denomination, count);
    }

    /// Removes `take` bills of the given denomination.
    ///
    /// Returns `false` without mutating if fewer than `take` bills remain.
    /// The allocator treats that as an internal invariant failure, since
    /// its take is always capped at the available count.
    pub fn remove(&mut self, denomination: u64, take: u32) -> bool {
        let entry = self.counts.entry(denomination).or_insert(0);
        match entry.checked_sub(take) {
            Some(remaining) => {
                *entry = remaining;
                true
            }
            None => false,
        }
    }

    /// Returns the total cash value held: sum of denomination times count.
    pub fn total_value(&self) -> u64 {
        self.counts
            .iter()
            .map(|(denomination, count)| denomination * u64::from(*count))
            .sum()
    }

    /// Iterates over (denomination, count) pairs in ascending
    /// denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }
}
