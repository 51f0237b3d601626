//! Order request models.
//!
//! An [`OrderRequest`] carries the three raw values a request source hands
//! over: ticket type, quantity and booking day. Nothing here is validated;
//! that happens in [`crate::calculation`].

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A quantity as it arrives from the outside world.
///
/// JSON bodies may send a number, HTML forms always send text. A missing
/// quantity deserializes to `Integer(0)`, which validation rejects.
///
/// # Example
///
/// ```
/// use cinema_pricing::models::QuantityInput;
///
/// assert_eq!(QuantityInput::from(3).to_quantity().map(|q| q.get()), Some(3));
/// assert_eq!(QuantityInput::from(" 4 ").to_quantity().map(|q| q.get()), Some(4));
/// assert!(QuantityInput::from("2.5").to_quantity().is_none());
/// assert!(QuantityInput::from(0).to_quantity().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    /// A JSON integer.
    Integer(i64),
    /// A JSON floating point number.
    Float(f64),
    /// Text, typically from form data.
    Text(String),
}

impl Default for QuantityInput {
    fn default() -> Self {
        QuantityInput::Integer(0)
    }
}

impl QuantityInput {
    /// Coerces the raw value into a ticket count.
    ///
    /// Returns `None` unless the value is numeric, whole, strictly positive
    /// and fits in a `u32`. Text is trimmed and may use scientific notation.
    pub fn to_quantity(&self) -> Option<Quantity> {
        let count = match self {
            QuantityInput::Integer(n) => u32::try_from(*n).ok()?,
            QuantityInput::Float(f) => {
                if !f.is_finite() || f.fract() != 0.0 || *f < 1.0 || *f > f64::from(u32::MAX) {
                    return None;
                }
                *f as u32
            }
            QuantityInput::Text(text) => {
                let text = text.trim();
                if !is_numeric_text(text) {
                    return None;
                }
                let value = Decimal::from_str(text)
                    .or_else(|_| Decimal::from_scientific(text))
                    .ok()?;
                if !value.fract().is_zero() {
                    return None;
                }
                value.to_u32()?
            }
        };
        NonZeroU32::new(count).map(Quantity)
    }
}

/// Returns true if `text` is a plain decimal number: an optional sign,
/// digits with at most one `.`, and an optional `e`/`E` exponent with its
/// own optional sign and at least one digit.
fn is_numeric_text(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let mut mantissa_digits = 0;
    let mut seen_point = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => mantissa_digits += 1,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        i += 1;
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exponent_start = i;
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }

    i == bytes.len()
}

impl From<i32> for QuantityInput {
    fn from(value: i32) -> Self {
        QuantityInput::Integer(i64::from(value))
    }
}

impl From<i64> for QuantityInput {
    fn from(value: i64) -> Self {
        QuantityInput::Integer(value)
    }
}

impl From<u32> for QuantityInput {
    fn from(value: u32) -> Self {
        QuantityInput::Integer(i64::from(value))
    }
}

impl From<f64> for QuantityInput {
    fn from(value: f64) -> Self {
        QuantityInput::Float(value)
    }
}

impl From<&str> for QuantityInput {
    fn from(value: &str) -> Self {
        QuantityInput::Text(value.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(value: String) -> Self {
        QuantityInput::Text(value)
    }
}

impl From<Quantity> for QuantityInput {
    fn from(value: Quantity) -> Self {
        QuantityInput::from(value.get())
    }
}

/// A validated, strictly positive ticket count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Creates a quantity, returning `None` for zero.
    pub fn new(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(Quantity)
    }

    /// Returns the ticket count.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the ticket count as a decimal multiplier.
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.get())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raw order as supplied by a request source.
///
/// Missing fields default to an empty string or zero so that they reach
/// validation and get rejected there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Ticket type key, matched case-sensitively (e.g. "dewasa").
    #[serde(default)]
    pub ticket_type: String,
    /// Number of tickets.
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: QuantityInput,
    /// Booking day name, matched case-insensitively (e.g. "sabtu").
    #[serde(default)]
    pub day: String,
}

/// Deserializes a quantity, mapping `null`, booleans and other non-scalar
/// values to `Integer(0)` so they fail validation instead of parsing.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<QuantityInput, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Quantity(QuantityInput),
        Other(IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Quantity(quantity) => quantity,
        Lenient::Other(_) => QuantityInput::default(),
    })
}

impl OrderRequest {
    /// Creates an order request from its raw parts.
    pub fn new(
        ticket_type: impl Into<String>,
        quantity: impl Into<QuantityInput>,
        day: impl Into<String>,
    ) -> Self {
        Self {
            ticket_type: ticket_type.into(),
            quantity: quantity.into(),
            day: day.into(),
        }
    }
}
