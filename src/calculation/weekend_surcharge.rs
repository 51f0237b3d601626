//! Weekend surcharge calculation.
//!
//! Orders booked on a configured weekend day pay a flat surcharge per
//! ticket. Other days pay nothing extra.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::config::SurchargeRule;
use crate::models::{AuditStep, Day};

use super::ValidatedOrder;

/// The result of the weekend surcharge step.
#[derive(Debug, Clone)]
pub struct WeekendSurchargeResult {
    /// Whether the booking day is a weekend day.
    pub applied: bool,
    /// The surcharge for the whole order (zero when not applied).
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns true if the named day is one of the weekend days.
///
/// The name is compared case-insensitively. Unrecognised names are never
/// weekend days.
///
/// # Examples
///
/// ```
/// use cinema_pricing::calculation::is_weekend;
/// use cinema_pricing::models::Day;
/// use std::collections::BTreeSet;
///
/// let weekend = BTreeSet::from([Day::Sabtu, Day::Minggu]);
/// assert!(is_weekend(&weekend, "Sabtu"));
/// assert!(!is_weekend(&weekend, "jumat"));
/// assert!(!is_weekend(&weekend, "saturday"));
/// ```
pub fn is_weekend(weekend_days: &BTreeSet<Day>, day: &str) -> bool {
    day.parse::<Day>()
        .map(|day| weekend_days.contains(&day))
        .unwrap_or(false)
}

/// Calculates the weekend surcharge for a validated order.
///
/// The surcharge is charged per ticket, not once per order.
///
/// # Examples
///
/// ```
/// use cinema_pricing::calculation::{calculate_weekend_surcharge, ValidatedOrder};
/// use cinema_pricing::config::PricingConfig;
/// use cinema_pricing::models::{Day, Quantity};
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let order = ValidatedOrder {
///     ticket_type: "dewasa".to_string(),
///     unit_price: Decimal::from(50000),
///     quantity: Quantity::new(3).unwrap(),
///     day: Day::Sabtu,
/// };
///
/// let result = calculate_weekend_surcharge(&order, config.weekend_days(), config.weekend_surcharge(), 3);
/// assert!(result.applied);
/// assert_eq!(result.amount, Decimal::from(30000));
/// ```
pub fn calculate_weekend_surcharge(
    order: &ValidatedOrder,
    weekend_days: &BTreeSet<Day>,
    rule: &SurchargeRule,
    step_number: u32,
) -> WeekendSurchargeResult {
    let applied = weekend_days.contains(&order.day);
    let amount = if applied {
        rule.amount_per_ticket * order.quantity.as_decimal()
    } else {
        Decimal::ZERO
    };

    let reasoning = if applied {
        format!(
            "'{}' is a weekend day: {} surcharge of {} per ticket x {} = {}",
            order.day,
            rule.name,
            rule.amount_per_ticket.normalize(),
            order.quantity,
            amount.normalize()
        )
    } else {
        format!("'{}' is not a weekend day - no {} surcharge", order.day, rule.name)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: format!("{}_surcharge", rule.name),
        rule_name: "Weekend Surcharge".to_string(),
        input: serde_json::json!({
            "day": order.day.as_str(),
            "weekday": order.day.weekday().to_string(),
            "quantity": order.quantity.get(),
            "amount_per_ticket": rule.amount_per_ticket.normalize().to_string()
        }),
        output: serde_json::json!({
            "applied": applied,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    WeekendSurchargeResult {
        applied,
        amount,
        audit_step,
    }
}
