//! Share calculation result models.
//!
//! This module contains the [`ShareResult`] and [`RateResult`] types that
//! capture the output of the proportional rate calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single worker's computed share of the tip pool.
///
/// The exact share is the worker's hours multiplied by the hourly rate;
/// the rounded target is that share rounded half away from zero to the
/// nearest whole currency unit, which is what the allocator attempts to
/// pay out in physical bills.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::ShareResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let share = ShareResult {
///     name: "alice".to_string(),
///     hours: Decimal::from_str("5.0").unwrap(),
///     exact: Decimal::from_str("150.00").unwrap(),
///     rounded_target: 150,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareResult {
    /// The worker's name.
    pub name: String,
    /// The hours the worker worked.
    pub hours: Decimal,
    /// The exact fractional share (hours * rate).
    pub exact: Decimal,
    /// The share rounded half away from zero to whole currency units.
    pub rounded_target: i64,
}

/// The complete output of a rate calculation.
///
/// Results are in the same order the workers were supplied. The rounding
/// drift is the signed difference between the total of all rounded
/// targets and the original pool, so callers can reconcile how far the
/// cash handed out diverges from the cash collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateResult {
    /// The hourly tip rate (pool / total hours).
    pub rate: Decimal,
    /// Per-worker shares, in registration order.
    pub results: Vec<ShareResult>,
    /// Sum of rounded targets minus the pool total.
    pub rounding_drift: Decimal,
}
