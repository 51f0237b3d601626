//! Core data models for the cinema pricing engine.
//!
//! This module contains the domain models used throughout the engine.

mod day;
mod order;
mod price_breakdown;

pub use day::Day;
pub use order::{OrderRequest, Quantity, QuantityInput};
pub use price_breakdown::{AuditStep, PriceBreakdown, Quote};
