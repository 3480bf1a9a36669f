//! Proportional rate calculation.
//!
//! This module computes the hourly tip rate and each worker's share of
//! the pool. It is a pure function of its inputs: identical inputs always
//! produce identical results in the same order.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{RateResult, ShareResult, Worker};

use super::rounding::round_half_away_from_zero;

/// Computes the hourly tip rate and each worker's share of the pool.
///
/// The rate is `total_pool / total_hours`. Each worker's exact share is
/// `hours * rate`, and their rounded target is the exact share rounded
/// half away from zero to whole currency units. Results are returned in
/// the same order the workers were supplied.
///
/// The returned [`RateResult`] also reports the rounding drift: the sum
/// of all rounded targets minus the pool total. Whole-unit rounding means
/// disbursed cash can differ from the pool by up to half a unit per
/// worker; the drift is reported rather than reconciled so the caller can
/// decide what to do with it.
///
/// # Errors
///
/// - `EmptyWorkerList` if `workers` is empty.
/// - `NonPositiveHours` if the hours sum to zero or less.
/// - `CalculationError` if a rounded share overflows the payout range.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::compute_rate;
/// use tip_pool_engine::models::Worker;
/// use rust_decimal::Decimal;
///
/// let workers = vec![
///     Worker::new("alice", Decimal::from(5)),
///     Worker::new("bob", Decimal::from(5)),
/// ];
/// let result = compute_rate(Decimal::from(300), &workers).unwrap();
/// assert_eq!(result.rate, Decimal::from(30));
/// assert_eq!(result.results[0].rounded_target, 150);
/// ```
pub fn compute_rate(total_pool: Decimal, workers: &[Worker]) -> EngineResult<RateResult> {
    if workers.is_empty() {
        return Err(EngineError::EmptyWorkerList);
    }

    let total_hours: Decimal = workers.iter().map(|w| w.hours).sum();
    if total_hours <= Decimal::ZERO {
        return Err(EngineError::NonPositiveHours { total_hours });
    }

    let rate = total_pool / total_hours;

    let mut results = Vec::with_capacity(workers.len());
    let mut rounded_total = Decimal::ZERO;
    for worker in workers {
        let exact = worker.hours * rate;
        let rounded_target = round_half_away_from_zero(exact)?;
        rounded_total += Decimal::from(rounded_target);
        results.push(ShareResult {
            name: worker.name.clone(),
            hours: worker.hours,
            exact,
            rounded_target,
        });
    }

    Ok(RateResult {
        rate,
        results,
        rounding_drift: rounded_total - total_pool,
    })
}
