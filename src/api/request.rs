//! Request types for the Tip Pool Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Inventory, Worker};

/// Request body for the `/calculate` endpoint.
///
/// Contains everything needed to split one tip pool: the pooled amount,
/// the workers with their hours, and the till inventory snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionRequest {
    /// The total pooled tip amount.
    ///
    /// Deserialized permissively: a bare number, a numeric string, null,
    /// or an absent field are all accepted, and anything unparseable is
    /// treated as zero. This deliberately mirrors the legacy front-end's
    /// `parseFloat(...) || 0` behavior rather than rejecting the request.
    #[serde(default, deserialize_with = "permissive_pool")]
    pub total_pool: Decimal,
    /// The workers in the pool, in registration order.
    pub workers: Vec<WorkerRequest>,
    /// Bill counts per denomination value available in the till.
    #[serde(default)]
    pub inventory: BTreeMap<u64, u32>,
}

/// Worker information in a distribution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    /// The worker's name.
    pub name: String,
    /// Hours worked during the pooling period.
    pub hours: Decimal,
}

impl From<WorkerRequest> for Worker {
    fn from(req: WorkerRequest) -> Self {
        Worker {
            name: req.name,
            hours: req.hours,
        }
    }
}

impl DistributionRequest {
    /// Builds the inventory snapshot from the requested counts.
    pub fn inventory(&self) -> Inventory {
        Inventory::from_counts(self.inventory.iter().map(|(d, c)| (*d, *c)))
    }
}

fn permissive_pool<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(parse_pool(raw))
}

fn parse_pool(raw: Option<serde_json::Value>) -> Decimal {
    match raw {
        Some(serde_json::Value::Number(n)) => {
            Decimal::from_str(&n.to_string()).unwrap_or(Decimal::ZERO)
        }
        Some(serde_json::Value::String(s)) => {
            Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}
