//! HTTP API module for the cinema pricing engine.
//!
//! Serves the HTML order form and a JSON pricing endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{OrderForm, PriceRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
