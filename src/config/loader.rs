//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pricing
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PricingConfig, PricingConfigFile};

/// Loads and checks pricing configuration.
///
/// # File Format
///
/// ```text
/// ticket_prices:
///   dewasa: 50000
///   anak: 30000
/// weekend_days: [sabtu, minggu]
/// weekend_surcharge:
///   name: weekend
///   amount_per_ticket: 10000
/// discount:
///   threshold: 150000
///   rate: "0.10"
/// ```
///
/// # Example
///
/// ```no_run
/// use cinema_pricing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pricing.yaml").unwrap();
/// println!("Ticket types: {:?}", loader.config().ticket_prices().keys());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or is missing a required field
    /// - The values break a pricing invariant (negative amounts, rate outside `[0, 1]`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        let file: PricingConfigFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let config = PricingConfig::try_from(file)?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PricingConfig {
        self.config
    }
}
