//! Worker model.
//!
//! This module defines the Worker struct representing a single tip pool
//! participant and their hours worked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a worker participating in a tip pool.
///
/// Workers are registered with a name and the hours they worked during
/// the pooling period. A worker is immutable during a calculation pass;
/// registration and removal happen at the boundary, before a pass starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// The worker's name. Must be non-empty.
    pub name: String,
    /// Hours worked during the pooling period. Must be positive.
    pub hours: Decimal,
}

impl Worker {
    /// Creates a new worker.
    ///
    /// # Examples
    ///
    /// ```
    /// use tip_pool_engine::models::Worker;
    /// use rust_decimal::Decimal;
    ///
    /// let worker = Worker::new("alice", Decimal::from(5));
    /// assert_eq!(worker.name, "alice");
    /// ```
    pub fn new(name: impl Into<String>, hours: Decimal) -> Self {
        Self {
            name: name.into(),
            hours,
        }
    }

    /// Validates the worker record.
    ///
    /// Returns `InvalidWorker` if the name is empty (after trimming) or
    /// the hours are not strictly positive. This mirrors the checks the
    /// original registration form applied before accepting an entry.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidWorker {
                name: self.name.clone(),
                message: "name must not be empty".to_string(),
            });
        }
        if self.hours <= Decimal::ZERO {
            return Err(EngineError::InvalidWorker {
                name: self.name.clone(),
                message: format!("hours must be positive, got {}", self.hours),
            });
        }
        Ok(())
    }
}
