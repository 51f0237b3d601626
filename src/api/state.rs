//! Application state for the pricing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::calculation::PricingEngine;

/// Shared application state.
///
/// Holds the pricing engine. The engine keeps its configuration behind an
/// `Arc`, so cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    engine: PricingEngine,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: PricingEngine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the pricing engine.
    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }
}
