//! HTTP API module for the Tip Pool Engine.
//!
//! This module provides the REST API endpoint for splitting a tip pool
//! and allocating cash denominations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DistributionRequest, WorkerRequest};
pub use response::ApiError;
pub use state::AppState;
