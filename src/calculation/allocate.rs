//! Greedy denomination allocation.
//!
//! This module converts rounded payout targets into physical bills drawn
//! from a shared, depleting till inventory. Workers with larger targets
//! are served first so that scarce large bills go where they are most
//! useful; ties are broken by registration order. Any portion of a target
//! the till cannot cover is reported as a remainder rather than papered
//! over.

use crate::config::DenominationSet;
use crate::error::{EngineError, EngineResult};
use crate::models::{Allocation, AllocationOutcome, Inventory, ShareResult};

/// Allocates bills from the inventory to cover each worker's rounded
/// target.
///
/// The caller-supplied inventory is never mutated: a working copy is
/// cloned, depleted across the whole pass, and returned as the final
/// state. Processing order is descending rounded target with ties kept
/// in registration order (stable sort), but the returned allocations are
/// in the same order as `results`.
///
/// For each worker, denominations are visited largest first and
/// `take = min(need / d, remaining[d])` bills are drawn. Whatever is
/// left after the smallest denomination is the worker's remainder.
///
/// # Errors
///
/// - `NegativeTarget` if any rounded target is negative. The whole pass
///   is rejected before any allocation happens; no partial result is
///   returned.
/// - `InternalInvariant` if an inventory count would go negative. The
///   min guard makes this unreachable; if it ever fires it is a defect
///   in the engine, not bad input.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::allocate;
/// use tip_pool_engine::config::DenominationSet;
/// use tip_pool_engine::models::{Inventory, ShareResult};
/// use rust_decimal::Decimal;
///
/// let results = vec![ShareResult {
///     name: "alice".to_string(),
///     hours: Decimal::from(5),
///     exact: Decimal::from(150),
///     rounded_target: 150,
/// }];
/// let inventory = Inventory::from_counts([(100, 1), (50, 1)]);
///
/// let outcome = allocate(&results, &inventory, &DenominationSet::default()).unwrap();
/// assert_eq!(outcome.allocations[0].remainder, 0);
/// assert_eq!(outcome.final_inventory.total_value(), 0);
/// ```
pub fn allocate(
    results: &[ShareResult],
    inventory: &Inventory,
    denominations: &DenominationSet,
) -> EngineResult<AllocationOutcome> {
    // Reject the whole pass up front so a bad target never produces a
    // partial allocation.
    for share in results {
        if share.rounded_target < 0 {
            return Err(EngineError::NegativeTarget {
                worker: share.name.clone(),
                target: share.rounded_target,
            });
        }
    }

    let mut remaining = inventory.clone();

    // Largest targets first; sort_by_key is stable, so equal targets keep
    // their registration order.
    let mut order: Vec<usize> = (0..results.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(results[i].rounded_target));

    let mut allocations = vec![Allocation::default(); results.len()];

    for index in order {
        let mut need = results[index].rounded_target as u64;
        let allocation = &mut allocations[index];

        for denomination in denominations.iter() {
            let available = remaining.count(denomination);
            let take = (need / denomination).min(u64::from(available)) as u32;
            if take > 0 {
                if !remaining.remove(denomination, take) {
                    return Err(EngineError::InternalInvariant {
                        message: format!(
                            "inventory count for denomination {} would go negative",
                            denomination
                        ),
                    });
                }
                allocation.bills.insert(denomination, take);
                need -= u64::from(take) * denomination;
            }
        }

        allocation.remainder = need;
    }

    Ok(AllocationOutcome {
        allocations,
        final_inventory: remaining,
    })
}
