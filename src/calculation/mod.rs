//! Calculation logic for the cinema pricing engine.
//!
//! This module contains order validation, base price, weekend surcharge and
//! bulk discount calculation, and the [`PricingEngine`] that chains them.

mod base_price;
mod discount;
mod engine;
mod validation;
mod weekend_surcharge;

pub use base_price::{SubtotalResult, calculate_subtotal};
pub use discount::{DiscountResult, calculate_discount, compute_discount};
pub use engine::PricingEngine;
pub use validation::{OrderValidationResult, ValidatedOrder, is_valid_order, validate_order};
pub use weekend_surcharge::{WeekendSurchargeResult, calculate_weekend_surcharge, is_weekend};
