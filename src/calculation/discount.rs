//! Bulk discount calculation.
//!
//! A percentage comes off the pre-discount total (subtotal plus weekend
//! surcharge) once that total reaches the threshold. The boundary is
//! inclusive. No rounding is applied.

use rust_decimal::Decimal;

use crate::config::DiscountRule;
use crate::models::AuditStep;

/// The result of the discount step.
#[derive(Debug, Clone)]
pub struct DiscountResult {
    /// The discount taken off (zero below the threshold).
    pub discount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the discount for an amount.
///
/// Returns `amount * rate` when `amount >= threshold`, otherwise zero.
///
/// # Examples
///
/// ```
/// use cinema_pricing::calculation::compute_discount;
/// use cinema_pricing::config::DiscountRule;
/// use rust_decimal::Decimal;
///
/// let rule = DiscountRule {
///     threshold: Decimal::from(150000),
///     rate: Decimal::new(10, 2),
/// };
///
/// assert_eq!(compute_discount(&rule, Decimal::from(180000)), Decimal::from(18000));
/// assert_eq!(compute_discount(&rule, Decimal::from(150000)), Decimal::from(15000));
/// assert_eq!(compute_discount(&rule, Decimal::from(149999)), Decimal::ZERO);
/// ```
pub fn compute_discount(rule: &DiscountRule, amount: Decimal) -> Decimal {
    if amount >= rule.threshold {
        amount * rule.rate
    } else {
        Decimal::ZERO
    }
}

/// Calculates the discount for a pre-discount total, with an audit step.
pub fn calculate_discount(
    rule: &DiscountRule,
    pre_discount_total: Decimal,
    step_number: u32,
) -> DiscountResult {
    let discount = compute_discount(rule, pre_discount_total);
    let eligible = pre_discount_total >= rule.threshold;

    let reasoning = if eligible {
        format!(
            "Pre-discount total {} reaches threshold {} - {}% discount = {}",
            pre_discount_total.normalize(),
            rule.threshold.normalize(),
            (rule.rate * Decimal::ONE_HUNDRED).normalize(),
            discount.normalize()
        )
    } else {
        format!(
            "Pre-discount total {} is below threshold {} - no discount",
            pre_discount_total.normalize(),
            rule.threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "bulk_discount".to_string(),
        rule_name: "Bulk Discount".to_string(),
        input: serde_json::json!({
            "pre_discount_total": pre_discount_total.normalize().to_string(),
            "threshold": rule.threshold.normalize().to_string(),
            "rate": rule.rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "eligible": eligible,
            "discount": discount.normalize().to_string()
        }),
        reasoning,
    };

    DiscountResult {
        discount,
        audit_step,
    }
}
