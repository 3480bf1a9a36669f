//! Distribution result models.
//!
//! This module contains the [`DistributionResult`] type and its associated
//! structures that capture all outputs from a full tip pool calculation:
//! the session record, the hourly rate, per-worker payouts, and the
//! leftover till inventory.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Allocation, Inventory, PoolSession, ShareResult};

/// A single worker's complete payout line.
///
/// Combines the share calculation with the bill allocation for that
/// worker. This is the row an export collaborator serializes (name,
/// hours, exact share, rounded amount, per-denomination counts,
/// remainder) and the card a UI renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerPayout {
    /// The worker's name.
    pub name: String,
    /// The hours the worker worked.
    pub hours: Decimal,
    /// The exact fractional share (hours * rate).
    pub exact: Decimal,
    /// The share rounded to whole currency units.
    pub rounded_target: i64,
    /// Denomination value to the number of bills assigned.
    pub bills: BTreeMap<u64, u32>,
    /// Amount of the rounded target the till could not cover.
    pub remainder: u64,
}

impl WorkerPayout {
    /// Joins a share result with its allocation into one payout line.
    pub fn from_parts(share: ShareResult, allocation: Allocation) -> Self {
        Self {
            name: share.name,
            hours: share.hours,
            exact: share.exact,
            rounded_target: share.rounded_target,
            bills: allocation.bills,
            remainder: allocation.remainder,
        }
    }
}

/// The complete result of one tip pool distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// The input snapshot this result was computed from.
    pub session: PoolSession,
    /// The hourly tip rate (pool / total hours).
    pub rate: Decimal,
    /// Sum of rounded targets minus the pool total.
    pub rounding_drift: Decimal,
    /// Per-worker payout lines, in registration order.
    pub payouts: Vec<WorkerPayout>,
    /// The till inventory left over after allocation.
    pub final_inventory: Inventory,
}
