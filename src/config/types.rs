//! Configuration types for the Tip Pool Engine.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The default denomination set: standard US-style bill values.
pub const DEFAULT_DENOMINATIONS: [u64; 6] = [100, 50, 20, 10, 5, 1];

/// An ordered set of cash denomination values.
///
/// The values are validated to be non-empty, strictly descending, and
/// all positive. Descending order is what makes the greedy allocation
/// policy well-defined, so it is enforced at construction rather than
/// sorted silently.
///
/// # Example
///
/// ```
/// use tip_pool_engine::config::DenominationSet;
///
/// let set = DenominationSet::new(vec![100, 50, 20, 10, 5, 1]).unwrap();
/// assert_eq!(set.values(), &[100, 50, 20, 10, 5, 1]);
/// assert!(set.contains(20));
/// assert!(!set.contains(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DenominationSet {
    values: Vec<u64>,
}

impl DenominationSet {
    /// Creates a denomination set, validating the ordering constraints.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDenominations` if the list is empty, contains a
    /// zero value, or is not strictly descending.
    pub fn new(values: Vec<u64>) -> EngineResult<Self> {
        if values.is_empty() {
            return Err(EngineError::InvalidDenominations {
                message: "denomination list must not be empty".to_string(),
            });
        }
        if values.contains(&0) {
            return Err(EngineError::InvalidDenominations {
                message: "denomination values must be positive".to_string(),
            });
        }
        if !values.windows(2).all(|pair| pair[0] > pair[1]) {
            return Err(EngineError::InvalidDenominations {
                message: "denomination values must be strictly descending".to_string(),
            });
        }
        Ok(Self { values })
    }

    /// Returns the denomination values, largest first.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Returns true if the value is a member of this set.
    pub fn contains(&self, value: u64) -> bool {
        self.values.contains(&value)
    }

    /// Iterates over the denomination values, largest first.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().copied()
    }
}

impl Default for DenominationSet {
    fn default() -> Self {
        Self {
            values: DEFAULT_DENOMINATIONS.to_vec(),
        }
    }
}

impl<'de> Deserialize<'de> for DenominationSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<u64>::deserialize(deserializer)?;
        Self::new(values).map_err(serde::de::Error::custom)
    }
}

/// The full engine configuration as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The denomination set used for allocation.
    pub denominations: DenominationSet,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            denominations: DenominationSet::default(),
        }
    }
}
