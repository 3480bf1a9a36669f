//! Calculation logic for the Tip Pool Engine.
//!
//! This module contains the two-stage pipeline: proportional rate
//! computation with whole-unit rounding, followed by greedy denomination
//! allocation against a shared depleting inventory.

mod allocate;
mod rate;
mod rounding;

pub use allocate::allocate;
pub use rate::compute_rate;
pub use rounding::round_half_away_from_zero;
