//! The pricing engine.
//!
//! [`PricingEngine`] runs the validate-then-compute pipeline:
//!
//! 1. validate the raw order ([`validate_order`])
//! 2. subtotal = unit price x quantity ([`calculate_subtotal`])
//! 3. weekend surcharge per ticket ([`calculate_weekend_surcharge`])
//! 4. discount on subtotal + surcharge ([`calculate_discount`])
//! 5. final total = subtotal + surcharge - discount

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::PricingConfig;
use crate::error::ValidationError;
use crate::models::{AuditStep, PriceBreakdown, QuantityInput, Quote};

use super::{
    calculate_discount, calculate_subtotal, calculate_weekend_surcharge, compute_discount,
    is_valid_order, is_weekend, validate_order,
};

/// Prices cinema ticket orders against an immutable configuration.
///
/// Cloning is cheap; clones share the same configuration. Every method is
/// pure, so one engine can serve any number of threads.
///
/// # Example
///
/// ```
/// use cinema_pricing::calculation::PricingEngine;
/// use rust_decimal::Decimal;
///
/// let engine = PricingEngine::default();
///
/// let breakdown = engine.price_order("dewasa", 3, "sabtu").unwrap();
/// assert_eq!(breakdown.subtotal, Decimal::from(150000));
/// assert_eq!(breakdown.weekend_surcharge, Decimal::from(30000));
/// assert_eq!(breakdown.discount, Decimal::from(18000));
/// assert_eq!(breakdown.final_total, Decimal::from(162000));
///
/// assert!(engine.price_order("vip", 1, "senin").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: Arc<PricingConfig>,
}

impl PricingEngine {
    /// Creates an engine for the given configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration this engine prices against.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns true if the order would be accepted.
    ///
    /// The ticket type must match a price list key exactly, the quantity must
    /// be a positive whole number, and the day must be one of the seven day
    /// names in any letter case.
    pub fn validate(&self, ticket_type: &str, quantity: impl Into<QuantityInput>, day: &str) -> bool {
        is_valid_order(&self.config, ticket_type, &quantity.into(), day)
    }

    /// Returns true if the named day is a configured weekend day.
    pub fn is_weekend(&self, day: &str) -> bool {
        is_weekend(self.config.weekend_days(), day)
    }

    /// Returns the bulk discount for a pre-discount amount.
    pub fn compute_discount(&self, amount: Decimal) -> Decimal {
        compute_discount(self.config.discount(), amount)
    }

    /// Prices an order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the ticket type, quantity or day is
    /// not acceptable. Valid orders always succeed.
    pub fn price_order(
        &self,
        ticket_type: &str,
        quantity: impl Into<QuantityInput>,
        day: &str,
    ) -> Result<PriceBreakdown, ValidationError> {
        self.run(ticket_type, &quantity.into(), day)
            .map(|(breakdown, _)| breakdown)
    }

    /// Prices an order and wraps it in a [`Quote`] with an audit trace.
    ///
    /// The breakdown is identical to what [`PricingEngine::price_order`]
    /// returns for the same input.
    pub fn quote(
        &self,
        ticket_type: &str,
        quantity: impl Into<QuantityInput>,
        day: &str,
    ) -> Result<Quote, ValidationError> {
        let (breakdown, audit_trace) = self.run(ticket_type, &quantity.into(), day)?;
        Ok(Quote {
            quote_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            breakdown,
            audit_trace,
        })
    }

    fn run(
        &self,
        ticket_type: &str,
        quantity: &QuantityInput,
        day: &str,
    ) -> Result<(PriceBreakdown, Vec<AuditStep>), ValidationError> {
        let mut steps = Vec::with_capacity(5);
        let mut step_number: u32 = 1;

        let validation = validate_order(&self.config, ticket_type, quantity, day, step_number)
            .inspect_err(|_| {
                debug!(ticket_type = %ticket_type, day = %day, "Order rejected by validation");
            })?;
        let order = validation.order;
        steps.push(validation.audit_step);
        step_number += 1;

        let base = calculate_subtotal(&order, step_number);
        steps.push(base.audit_step);
        step_number += 1;

        let surcharge = calculate_weekend_surcharge(
            &order,
            self.config.weekend_days(),
            self.config.weekend_surcharge(),
            step_number,
        );
        steps.push(surcharge.audit_step);
        step_number += 1;

        let pre_discount_total = base.subtotal + surcharge.amount;
        let discount = calculate_discount(self.config.discount(), pre_discount_total, step_number);
        steps.push(discount.audit_step);
        step_number += 1;

        let final_total = pre_discount_total - discount.discount;
        steps.push(AuditStep {
            step_number,
            rule_id: "final_total".to_string(),
            rule_name: "Final Total".to_string(),
            input: serde_json::json!({
                "subtotal": base.subtotal.normalize().to_string(),
                "weekend_surcharge": surcharge.amount.normalize().to_string(),
                "discount": discount.discount.normalize().to_string()
            }),
            output: serde_json::json!({
                "final_total": final_total.normalize().to_string()
            }),
            reasoning: format!(
                "{} + {} - {} = {}",
                base.subtotal.normalize(),
                surcharge.amount.normalize(),
                discount.discount.normalize(),
                final_total.normalize()
            ),
        });

        debug!(
            ticket_type = %order.ticket_type,
            quantity = order.quantity.get(),
            day = %order.day,
            final_total = %final_total,
            "Order priced"
        );

        let breakdown = PriceBreakdown {
            ticket_type: order.ticket_type,
            quantity: order.quantity.get(),
            unit_price: base.unit_price,
            subtotal: base.subtotal,
            weekend_surcharge: surcharge.amount,
            discount: discount.discount,
            final_total,
        };

        Ok((breakdown, steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiscountRule, SurchargeRule};
    use crate::models::Day;
    use std::collections::{BTreeMap, BTreeSet};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn engine() -> PricingEngine {
        PricingEngine::default()
    }

    #[test]
    fn test_scenario_adult_weekday() {
        let b = engine().price_order("dewasa", 2, "senin").unwrap();
        assert_eq!(b.ticket_type, "dewasa");
        assert_eq!(b.quantity, 2);
        assert_eq!(b.unit_price, dec("50000"));
        assert_eq!(b.subtotal, dec("100000"));
        assert_eq!(b.weekend_surcharge, Decimal::ZERO);
        assert_eq!(b.discount, Decimal::ZERO);
        assert_eq!(b.final_total, dec("100000"));
    }

    #[test]
    fn test_scenario_adult_saturday_with_discount() {
        let b = engine().price_order("dewasa", 3, "sabtu").unwrap();
        assert_eq!(b.subtotal, dec("150000"));
        assert_eq!(b.weekend_surcharge, dec("30000"));
        assert_eq!(b.pre_discount_total(), dec("180000"));
        assert_eq!(b.discount, dec("18000"));
        assert_eq!(b.final_total, dec("162000"));
    }

    #[test]
    fn test_scenario_child_sunday_below_threshold() {
        let b = engine().price_order("anak", 1, "minggu").unwrap();
        assert_eq!(b.subtotal, dec("30000"));
        assert_eq!(b.weekend_surcharge, dec("10000"));
        assert_eq!(b.pre_discount_total(), dec("40000"));
        assert_eq!(b.discount, Decimal::ZERO);
        assert_eq!(b.final_total, dec("40000"));
    }

    #[test]
    fn test_scenario_unknown_ticket_type() {
        assert_eq!(engine().price_order("vip", 1, "senin"), Err(ValidationError));
    }

    #[test]
    fn test_scenario_zero_quantity() {
        assert_eq!(engine().price_order("dewasa", 0, "senin"), Err(ValidationError));
    }

    #[test]
    fn test_scenario_unknown_day() {
        assert_eq!(engine().price_order("dewasa", 2, "funday"), Err(ValidationError));
    }

    #[test]
    fn test_discount_boundary_is_inclusive() {
        // 3 adult tickets on a weekday is exactly 150.000
        let b = engine().price_order("dewasa", 3, "rabu").unwrap();
        assert_eq!(b.pre_discount_total(), dec("150000"));
        assert_eq!(b.discount, dec("15000"));
        assert_eq!(b.final_total, dec("135000"));
    }

    #[test]
    fn test_quantity_from_form_text() {
        let b = engine().price_order("anak", "5", "Kamis").unwrap();
        assert_eq!(b.quantity, 5);
        assert_eq!(b.subtotal, dec("150000"));
        assert_eq!(b.final_total, dec("135000"));
    }

    #[test]
    fn test_quantity_text_with_separators_is_rejected() {
        let e = engine();
        assert_eq!(e.price_order("dewasa", "1_000", "senin"), Err(ValidationError));
        assert_eq!(e.price_order("dewasa", "1__2", "senin"), Err(ValidationError));
        assert_eq!(e.price_order("dewasa", "1,000", "senin"), Err(ValidationError));
        assert!(!e.validate("anak", "2_0", "sabtu"));
    }

    #[test]
    fn test_largest_configured_amounts_price_without_overflow() {
        let max = crate::config::MAX_AMOUNT;
        let config = PricingConfig::new(
            BTreeMap::from([("vip".to_string(), max)]),
            BTreeSet::from([Day::Sabtu]),
            SurchargeRule {
                name: "weekend".to_string(),
                amount_per_ticket: max,
            },
            DiscountRule {
                threshold: max,
                rate: dec("0.3333333333333333333333333333"),
            },
        )
        .unwrap();
        let e = PricingEngine::new(config);

        let b = e.price_order("vip", u32::MAX, "sabtu").unwrap();
        let count = Decimal::from(u32::MAX);
        assert_eq!(b.subtotal, max * count);
        assert_eq!(b.weekend_surcharge, max * count);
        assert!(b.discount > Decimal::ZERO);
        assert_eq!(b.final_total, b.pre_discount_total() - b.discount);
        assert!(e.quote("vip", u32::MAX, "sabtu").is_ok());
    }

    #[test]
    fn test_validate_matches_price_order() {
        let e = engine();
        assert!(e.validate("dewasa", 1, "SENIN"));
        assert!(!e.validate("dewasa", -1, "senin"));
        assert!(!e.validate("dewasa", "x", "senin"));
        assert!(!e.validate("DEWASA", 1, "senin"));
    }

    #[test]
    fn test_is_weekend_and_compute_discount() {
        let e = engine();
        assert!(e.is_weekend("sabtu"));
        assert!(e.is_weekend("Minggu"));
        assert!(!e.is_weekend("senin"));
        assert_eq!(e.compute_discount(dec("200000")), dec("20000"));
        assert_eq!(e.compute_discount(dec("100000")), Decimal::ZERO);
    }

    #[test]
    fn test_price_order_is_idempotent() {
        let e = engine();
        assert_eq!(
            e.price_order("anak", 7, "minggu"),
            e.price_order("anak", 7, "minggu")
        );
    }

    #[test]
    fn test_quote_carries_same_breakdown_and_five_steps() {
        let e = engine();
        let quote = e.quote("dewasa", 3, "sabtu").unwrap();
        assert_eq!(quote.breakdown, e.price_order("dewasa", 3, "sabtu").unwrap());

        let rule_ids: Vec<&str> = quote.audit_trace.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "order_validation",
                "base_price",
                "weekend_surcharge",
                "bulk_discount",
                "final_total"
            ]
        );
        let numbers: Vec<u32> = quote.audit_trace.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(quote.audit_trace[4].output["final_total"], "162000");
    }

    #[test]
    fn test_quote_rejects_invalid_order() {
        assert_eq!(engine().quote("dewasa", 2, "funday"), Err(ValidationError));
    }

    #[test]
    fn test_injected_configuration() {
        let config = PricingConfig::new(
            BTreeMap::from([("vip".to_string(), dec("100000"))]),
            BTreeSet::from([Day::Jumat]),
            SurchargeRule {
                name: "weekend".to_string(),
                amount_per_ticket: dec("25000"),
            },
            DiscountRule {
                threshold: dec("250000"),
                rate: dec("0.2"),
            },
        )
        .unwrap();
        let e = PricingEngine::new(config);

        assert!(e.price_order("dewasa", 1, "senin").is_err());

        let b = e.price_order("vip", 2, "jumat").unwrap();
        assert_eq!(b.subtotal, dec("200000"));
        assert_eq!(b.weekend_surcharge, dec("50000"));
        assert_eq!(b.discount, dec("50000"));
        assert_eq!(b.final_total, dec("200000"));

        assert!(!e.is_weekend("sabtu"));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<PricingEngine>();
    }
}
