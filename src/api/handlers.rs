//! HTTP request handlers for the pricing API.
//!
//! This module contains the handler functions for all endpoints.

use std::time::Instant;

use axum::{
    Form, Json, Router,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::OrderRequest;
use crate::presentation::{PageOutcome, render_order_page};

use super::request::{OrderForm, PriceRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(order_page_handler).post(order_form_handler))
        .route("/price", post(price_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET / - the empty order form.
async fn order_page_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_order_page(
        state.engine().config(),
        PageOutcome::Blank,
        None,
    ))
}

/// Handler for POST / - form submission, answered with the rendered page.
async fn order_form_handler(
    State(state): State<AppState>,
    payload: Result<Form<OrderForm>, FormRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing order form");

    let form = match payload {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Form rejected"
            );
            OrderForm::default()
        }
    };

    let selected_day = form.selected_day();
    let order: OrderRequest = form.into();
    let result = state
        .engine()
        .price_order(&order.ticket_type, order.quantity, &order.day);

    let status = match &result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                ticket_type = %breakdown.ticket_type,
                quantity = breakdown.quantity,
                final_total = %breakdown.final_total,
                "Order form priced"
            );
            StatusCode::OK
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Order form rejected");
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };

    let html = render_order_page(state.engine().config(), (&result).into(), selected_day);
    (status, Html(html)).into_response()
}

/// Handler for POST /price endpoint.
///
/// Accepts a JSON order and returns a priced quote.
async fn price_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing price request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match state
        .engine()
        .quote(&request.ticket_type, request.quantity, &request.day)
    {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                quote_id = %quote.quote_id,
                ticket_type = %quote.breakdown.ticket_type,
                quantity = quote.breakdown.quantity,
                final_total = %quote.breakdown.final_total,
                duration_us = start_time.elapsed().as_micros(),
                "Price calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(quote),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Price request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /health.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
