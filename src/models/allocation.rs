//! Denomination allocation result models.
//!
//! This module contains the [`Allocation`] and [`AllocationOutcome`] types
//! produced by the greedy denomination allocator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Inventory;

/// The bills assigned to a single worker.
///
/// For every worker, the conservation invariant holds:
/// the sum of `denomination * count` over `bills` plus `remainder`
/// equals the worker's rounded target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Denomination value to the number of bills of that value assigned.
    /// Denominations with a zero take are omitted.
    pub bills: BTreeMap<u64, u32>,
    /// The portion of the rounded target that could not be covered
    /// because the inventory ran out. Zero when fully paid.
    pub remainder: u64,
}

impl Allocation {
    /// Returns the total cash value of the assigned bills.
    pub fn paid_value(&self) -> u64 {
        self.bills
            .iter()
            .map(|(denomination, count)| denomination * u64::from(*count))
            .sum()
    }
}

/// The complete output of an allocation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Per-worker allocations, in the same order as the share results
    /// that were passed in (registration order, not processing order).
    pub allocations: Vec<Allocation>,
    /// The leftover inventory after every worker was processed.
    pub final_inventory: Inventory,
}
