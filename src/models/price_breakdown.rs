//! Pricing result models.
//!
//! This module contains the [`PriceBreakdown`] produced for every valid
//! order, and the [`Quote`] envelope that adds an identifier, a timestamp
//! and the audit trail of pricing decisions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full price derivation for one order.
///
/// Every field is always present, including zero surcharge and zero
/// discount, so the presenter decides what to show. Amounts are exact;
/// nothing is rounded.
///
/// # Example
///
/// ```
/// use cinema_pricing::models::PriceBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PriceBreakdown {
///     ticket_type: "dewasa".to_string(),
///     quantity: 2,
///     unit_price: Decimal::from(50000),
///     subtotal: Decimal::from(100000),
///     weekend_surcharge: Decimal::ZERO,
///     discount: Decimal::ZERO,
///     final_total: Decimal::from(100000),
/// };
/// assert_eq!(breakdown.pre_discount_total(), Decimal::from(100000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// The ticket type key that was priced.
    pub ticket_type: String,
    /// Number of tickets.
    pub quantity: u32,
    /// Price of a single ticket.
    pub unit_price: Decimal,
    /// `unit_price * quantity`.
    pub subtotal: Decimal,
    /// Per-ticket weekend surcharge times quantity, or zero on weekdays.
    pub weekend_surcharge: Decimal,
    /// Bulk discount, or zero below the threshold.
    pub discount: Decimal,
    /// `subtotal + weekend_surcharge - discount`.
    pub final_total: Decimal,
}

impl PriceBreakdown {
    /// Returns the subtotal plus weekend surcharge.
    pub fn pre_discount_total(&self) -> Decimal {
        self.subtotal + self.weekend_surcharge
    }
}

/// A single step in the audit trace recording a pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A priced order as returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was calculated.
    pub calculated_at: DateTime<Utc>,
    /// The price derivation.
    pub breakdown: PriceBreakdown,
    /// One step per pricing stage, in order.
    pub audit_trace: Vec<AuditStep>,
}
