//! Configuration for the cinema pricing engine.
//!
//! This module provides the immutable [`PricingConfig`] (price list, weekend
//! days, surcharge and discount rules), a YAML [`ConfigLoader`], and the
//! environment-driven [`ServerSettings`] used by the binary.
//!
//! # Example
//!
//! ```no_run
//! use cinema_pricing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pricing.yaml").unwrap().into_config();
//! println!("Discount from: {}", config.discount().threshold);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{BIND_ADDR_VAR, CONFIG_PATH_VAR, DEFAULT_BIND_ADDR, ServerSettings};
pub use types::{DiscountRule, MAX_AMOUNT, PricingConfig, PricingConfigFile, SurchargeRule};
