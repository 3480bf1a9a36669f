//! Tip Pool Engine
//!
//! This crate splits a pooled sum of collected gratuities among workers
//! in proportion to hours worked, then converts each worker's share into
//! a physically deliverable payout from a fixed inventory of cash
//! denominations.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
