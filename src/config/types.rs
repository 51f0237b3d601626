//! Configuration types for ticket pricing.
//!
//! [`PricingConfigFile`] mirrors the YAML file. [`PricingConfig`] is the
//! checked, immutable form the engine is built from.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Day;

/// Largest price, surcharge or threshold a configuration may carry.
///
/// At this bound a `u32::MAX` ticket order still fits comfortably in a
/// `Decimal`, so pricing arithmetic cannot overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A flat per-ticket surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeRule {
    /// Name of the surcharge, e.g. "weekend".
    #[serde(default = "default_surcharge_name")]
    pub name: String,
    /// Amount charged per ticket.
    pub amount_per_ticket: Decimal,
}

fn default_surcharge_name() -> String {
    "weekend".to_string()
}

/// A bulk-purchase discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Minimum pre-discount total (inclusive) that triggers the discount.
    pub threshold: Decimal,
    /// Fraction of the pre-discount total taken off, in `[0, 1]`.
    pub rate: Decimal,
}

/// Raw structure of `pricing.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfigFile {
    /// Unit price per ticket type key.
    pub ticket_prices: BTreeMap<String, Decimal>,
    /// Days that carry the weekend surcharge.
    pub weekend_days: BTreeSet<Day>,
    /// The weekend surcharge.
    pub weekend_surcharge: SurchargeRule,
    /// The bulk discount.
    pub discount: DiscountRule,
}

/// Checked pricing configuration.
///
/// Fixed at construction and never mutated afterwards.
///
/// # Example
///
/// ```
/// use cinema_pricing::config::PricingConfig;
/// use cinema_pricing::models::Day;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// assert_eq!(config.unit_price("dewasa"), Some(Decimal::from(50000)));
/// assert_eq!(config.unit_price("Dewasa"), None);
/// assert!(config.weekend_days().contains(&Day::Sabtu));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    ticket_prices: BTreeMap<String, Decimal>,
    weekend_days: BTreeSet<Day>,
    weekend_surcharge: SurchargeRule,
    discount: DiscountRule,
}

impl PricingConfig {
    /// Creates a configuration, checking every pricing invariant.
    ///
    /// Fails with [`EngineError::InvalidConfig`] when the price list is
    /// empty, any amount is negative or above [`MAX_AMOUNT`], or the
    /// discount rate lies outside `[0, 1]`.
    pub fn new(
        ticket_prices: BTreeMap<String, Decimal>,
        weekend_days: BTreeSet<Day>,
        weekend_surcharge: SurchargeRule,
        discount: DiscountRule,
    ) -> EngineResult<Self> {
        if ticket_prices.is_empty() {
            return Err(invalid("ticket_prices", "at least one ticket type is required"));
        }
        if let Some((ticket_type, _)) = ticket_prices.iter().find(|(_, price)| is_negative(**price)) {
            return Err(invalid(
                &format!("ticket_prices.{}", ticket_type),
                "price must not be negative",
            ));
        }
        if let Some((ticket_type, _)) = ticket_prices.iter().find(|(_, price)| **price > MAX_AMOUNT) {
            return Err(invalid(
                &format!("ticket_prices.{}", ticket_type),
                TOO_LARGE,
            ));
        }
        if is_negative(weekend_surcharge.amount_per_ticket) {
            return Err(invalid(
                "weekend_surcharge.amount_per_ticket",
                "amount must not be negative",
            ));
        }
        if weekend_surcharge.amount_per_ticket > MAX_AMOUNT {
            return Err(invalid("weekend_surcharge.amount_per_ticket", TOO_LARGE));
        }
        if is_negative(discount.threshold) {
            return Err(invalid("discount.threshold", "threshold must not be negative"));
        }
        if discount.threshold > MAX_AMOUNT {
            return Err(invalid("discount.threshold", TOO_LARGE));
        }
        if is_negative(discount.rate) || discount.rate > Decimal::ONE {
            return Err(invalid("discount.rate", "rate must be between 0 and 1"));
        }

        Ok(Self {
            ticket_prices,
            weekend_days,
            weekend_surcharge,
            discount,
        })
    }

    /// Returns the unit price for an exact ticket type key.
    pub fn unit_price(&self, ticket_type: &str) -> Option<Decimal> {
        self.ticket_prices.get(ticket_type).copied()
    }

    /// Returns the full price list.
    pub fn ticket_prices(&self) -> &BTreeMap<String, Decimal> {
        &self.ticket_prices
    }

    /// Returns the days that carry the weekend surcharge.
    pub fn weekend_days(&self) -> &BTreeSet<Day> {
        &self.weekend_days
    }

    /// Returns the weekend surcharge rule.
    pub fn weekend_surcharge(&self) -> &SurchargeRule {
        &self.weekend_surcharge
    }

    /// Returns the bulk discount rule.
    pub fn discount(&self) -> &DiscountRule {
        &self.discount
    }
}

impl Default for PricingConfig {
    /// Adult 50.000, child 30.000, 10.000 per ticket on Saturday and
    /// Sunday, 10% off from 150.000.
    fn default() -> Self {
        Self {
            ticket_prices: BTreeMap::from([
                ("dewasa".to_string(), Decimal::from(50_000)),
                ("anak".to_string(), Decimal::from(30_000)),
            ]),
            weekend_days: BTreeSet::from([Day::Sabtu, Day::Minggu]),
            weekend_surcharge: SurchargeRule {
                name: default_surcharge_name(),
                amount_per_ticket: Decimal::from(10_000),
            },
            discount: DiscountRule {
                threshold: Decimal::from(150_000),
                rate: Decimal::new(10, 2),
            },
        }
    }
}

impl TryFrom<PricingConfigFile> for PricingConfig {
    type Error = EngineError;

    fn try_from(file: PricingConfigFile) -> EngineResult<Self> {
        Self::new(
            file.ticket_prices,
            file.weekend_days,
            file.weekend_surcharge,
            file.discount,
        )
    }
}

const TOO_LARGE: &str = "amount must not exceed 1000000000000000";

fn is_negative(value: Decimal) -> bool {
    value < Decimal::ZERO
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
