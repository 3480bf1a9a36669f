//! Core data models for the Tip Pool Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation;
mod distribution;
mod inventory;
mod session;
mod share;
mod worker;

pub use allocation::{Allocation, AllocationOutcome};
pub use distribution::{DistributionResult, WorkerPayout};
pub use inventory::Inventory;
pub use session::PoolSession;
pub use share::{RateResult, ShareResult};
pub use worker::Worker;
