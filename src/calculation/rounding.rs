//! Payout rounding policy.
//!
//! The engine pays whole currency units only, and the rounding policy is
//! pinned here: half rounds away from zero. The choice matters because it
//! is the one place total disbursed cash can diverge from the pool total,
//! so it is fixed in a single function and covered by dedicated tests.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds an exact share to the nearest whole currency unit, with halves
/// rounding away from zero (2.5 -> 3, -2.5 -> -3).
///
/// # Errors
///
/// Returns `CalculationError` if the rounded value does not fit in an
/// `i64` payout target.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::round_half_away_from_zero;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let exact = Decimal::from_str("112.50").unwrap();
/// assert_eq!(round_half_away_from_zero(exact).unwrap(), 113);
/// ```
pub fn round_half_away_from_zero(value: Decimal) -> EngineResult<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("rounded share {} does not fit a 64-bit payout target", value),
        })
}
