//! Configuration for the Tip Pool Engine.
//!
//! This module provides the denomination set configuration and the YAML
//! loader that reads it from disk.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DENOMINATIONS, DenominationSet, EngineConfig};
