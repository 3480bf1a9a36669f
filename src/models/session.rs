//! Pool session model.
//!
//! This module defines the [`PoolSession`] record: a point-in-time snapshot
//! of a calculation's inputs, suitable for a history store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Inventory, Worker};

/// A snapshot of one tip pool calculation's inputs.
///
/// The engine itself holds no persistent state; the caller owns the
/// session. A persistence collaborator can store this record verbatim to
/// offer history retrieval later, and replaying it through the engine
/// reproduces the original result exactly.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::{Inventory, PoolSession, Worker};
/// use rust_decimal::Decimal;
///
/// let session = PoolSession::new(
///     Decimal::from(300),
///     vec![Worker::new("alice", Decimal::from(5))],
///     Inventory::from_counts([(100, 3)]),
/// );
/// assert_eq!(session.workers.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSession {
    /// Unique identifier for this session.
    pub id: Uuid,
    /// When the session was captured.
    pub created_at: DateTime<Utc>,
    /// The total pooled tip amount.
    pub total_pool: Decimal,
    /// The registered workers, in registration order.
    pub workers: Vec<Worker>,
    /// The till inventory snapshot supplied for allocation.
    pub inventory: Inventory,
}

impl PoolSession {
    /// Captures a new session with a fresh id and the current timestamp.
    pub fn new(total_pool: Decimal, workers: Vec<Worker>, inventory: Inventory) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            total_pool,
            workers,
            inventory,
        }
    }
}
