//! Base price calculation.
//!
//! The subtotal is the configured unit price times the ticket count.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::ValidatedOrder;

/// The result of the base price step.
#[derive(Debug, Clone)]
pub struct SubtotalResult {
    /// Price of one ticket.
    pub unit_price: Decimal,
    /// `unit_price * quantity`.
    pub subtotal: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the subtotal for a validated order.
///
/// # Examples
///
/// ```
/// use cinema_pricing::calculation::{calculate_subtotal, ValidatedOrder};
/// use cinema_pricing::models::{Day, Quantity};
/// use rust_decimal::Decimal;
///
/// let order = ValidatedOrder {
///     ticket_type: "dewasa".to_string(),
///     unit_price: Decimal::from(50000),
///     quantity: Quantity::new(3).unwrap(),
///     day: Day::Sabtu,
/// };
///
/// let result = calculate_subtotal(&order, 2);
/// assert_eq!(result.subtotal, Decimal::from(150000));
/// ```
pub fn calculate_subtotal(order: &ValidatedOrder, step_number: u32) -> SubtotalResult {
    let subtotal = order.unit_price * order.quantity.as_decimal();

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_price".to_string(),
        rule_name: "Base Price".to_string(),
        input: serde_json::json!({
            "ticket_type": order.ticket_type,
            "unit_price": order.unit_price.normalize().to_string(),
            "quantity": order.quantity.get()
        }),
        output: serde_json::json!({
            "subtotal": subtotal.normalize().to_string()
        }),
        reasoning: format!(
            "{} x '{}' ticket at {} = {}",
            order.quantity,
            order.ticket_type,
            order.unit_price.normalize(),
            subtotal.normalize()
        ),
    };

    SubtotalResult {
        unit_price: order.unit_price,
        subtotal,
        audit_step,
    }
}
