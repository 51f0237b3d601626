//! Request types for the pricing API.
//!
//! JSON bodies deserialize straight into [`OrderRequest`]. HTML form posts
//! arrive as [`OrderForm`], where every value is text.

use serde::{Deserialize, Serialize};

use crate::models::{Day, OrderRequest, QuantityInput};

/// Request body for the `/price` endpoint.
pub type PriceRequest = OrderRequest;

/// URL-encoded body posted by the order form.
///
/// Missing fields become empty strings, which validation rejects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderForm {
    /// Ticket type key.
    #[serde(default)]
    pub ticket_type: String,
    /// Ticket count as typed by the user.
    #[serde(default)]
    pub quantity: String,
    /// Booking day name.
    #[serde(default)]
    pub day: String,
}

impl OrderForm {
    /// Returns the submitted day if it names a recognised day, for
    /// preselecting it when the form is rendered again.
    pub fn selected_day(&self) -> Option<Day> {
        self.day.parse().ok()
    }
}

impl From<OrderForm> for OrderRequest {
    fn from(form: OrderForm) -> Self {
        OrderRequest {
            ticket_type: form.ticket_type,
            quantity: QuantityInput::Text(form.quantity),
            day: form.day,
        }
    }
}
