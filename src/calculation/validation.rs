//! Order validation.
//!
//! This module is the single gate between raw order input and the pricing
//! pipeline. An order passes when its ticket type is an exact key of the
//! price list, its quantity is a positive whole number, and its day is one
//! of the seven recognised day names (compared case-insensitively).

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::error::ValidationError;
use crate::models::{AuditStep, Day, Quantity, QuantityInput};

/// An order that passed validation, with its unit price resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    /// The ticket type key, exactly as configured.
    pub ticket_type: String,
    /// Price of one ticket of this type.
    pub unit_price: Decimal,
    /// Number of tickets.
    pub quantity: Quantity,
    /// The booking day.
    pub day: Day,
}

/// The result of validating an order, including the audit step.
#[derive(Debug, Clone)]
pub struct OrderValidationResult {
    /// The validated order.
    pub order: ValidatedOrder,
    /// The audit step recording the validation.
    pub audit_step: AuditStep,
}

/// Validates raw order input against the configuration.
///
/// # Returns
///
/// The validated order and an audit step, or [`ValidationError`] if any of
/// the three inputs is unacceptable. The error does not say which.
///
/// # Examples
///
/// ```
/// use cinema_pricing::calculation::validate_order;
/// use cinema_pricing::config::PricingConfig;
/// use cinema_pricing::models::{Day, QuantityInput};
///
/// let config = PricingConfig::default();
///
/// let result = validate_order(&config, "anak", &QuantityInput::from(2), "MINGGU", 1).unwrap();
/// assert_eq!(result.order.day, Day::Minggu);
/// assert_eq!(result.order.quantity.get(), 2);
///
/// assert!(validate_order(&config, "Anak", &QuantityInput::from(2), "minggu", 1).is_err());
/// ```
pub fn validate_order(
    config: &PricingConfig,
    ticket_type: &str,
    quantity: &QuantityInput,
    day: &str,
    step_number: u32,
) -> Result<OrderValidationResult, ValidationError> {
    let unit_price = config.unit_price(ticket_type).ok_or(ValidationError)?;
    let quantity = quantity.to_quantity().ok_or(ValidationError)?;
    let day: Day = day.parse()?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "order_validation".to_string(),
        rule_name: "Order Validation".to_string(),
        input: serde_json::json!({
            "ticket_type": ticket_type,
            "quantity": quantity.get(),
            "day": day.as_str()
        }),
        output: serde_json::json!({
            "valid": true,
            "unit_price": unit_price.normalize().to_string()
        }),
        reasoning: format!(
            "Ticket type '{}' is on the price list, quantity {} is positive, '{}' is a recognised day",
            ticket_type, quantity, day
        ),
    };

    Ok(OrderValidationResult {
        order: ValidatedOrder {
            ticket_type: ticket_type.to_string(),
            unit_price,
            quantity,
            day,
        },
        audit_step,
    })
}

/// Returns true if the order would pass [`validate_order`].
pub fn is_valid_order(
    config: &PricingConfig,
    ticket_type: &str,
    quantity: &QuantityInput,
    day: &str,
) -> bool {
    validate_order(config, ticket_type, quantity, day, 0).is_ok()
}
