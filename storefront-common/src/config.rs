use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checkout::CheckoutGateConfig;
use crate::markup::CART_PATH;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid storefront config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Where quantity changes are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartSinkKind {
    /// Diagnostic log line only
    #[default]
    Log,
    /// Persist the quantity in the browser's localStorage
    LocalStorage,
}

/// Page-level settings, embedded as JSON in the storefront templates.
///
/// Every field is optional; an empty object gives the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Buy-now navigation target
    pub cart_path: String,
    pub checkout: CheckoutGateConfig,
    pub cart_sink: CartSinkKind,
    /// localStorage key used by [`CartSinkKind::LocalStorage`]
    pub cart_storage_key: String,
    /// tracing filter directive, e.g. `info` or `storefront_common=debug`
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_path: CART_PATH.to_string(),
            checkout: CheckoutGateConfig::default(),
            cart_sink: CartSinkKind::default(),
            cart_storage_key: "storefront.cart.quantity".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a config document. Blank input gives the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.cart_path.starts_with('/') {
            return Err(ConfigError::Config(format!(
                "cart_path must be an absolute path, got {:?}",
                self.cart_path
            )));
        }
        if self.cart_sink == CartSinkKind::LocalStorage && self.cart_storage_key.is_empty() {
            return Err(ConfigError::Config(
                "cart_storage_key is required for the local_storage sink".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_default() {
        assert_eq!(StorefrontConfig::from_json("").unwrap(), StorefrontConfig::default());
        assert_eq!(StorefrontConfig::from_json("  \n").unwrap(), StorefrontConfig::default());
        assert_eq!(StorefrontConfig::from_json("{}").unwrap(), StorefrontConfig::default());
    }

    #[test]
    fn test_defaults_match_page_scripts() {
        let config = StorefrontConfig::default();
        assert_eq!(config.cart_path, "/cart");
        assert!(!config.checkout.enforce_disable);
        assert_eq!(config.cart_sink, CartSinkKind::Log);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_partial_override() {
        let config = StorefrontConfig::from_json(
            r#"{"checkout": {"enforce_disable": true}, "cart_sink": "local_storage"}"#,
        )
        .unwrap();
        assert!(config.checkout.enforce_disable);
        assert_eq!(config.cart_sink, CartSinkKind::LocalStorage);
        assert_eq!(config.cart_path, "/cart");
        assert_eq!(config.cart_storage_key, "storefront.cart.quantity");
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = StorefrontConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_unknown_sink_is_error() {
        let err = StorefrontConfig::from_json(r#"{"cart_sink": "server"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_relative_cart_path_rejected() {
        let err = StorefrontConfig::from_json(r#"{"cart_path": "cart"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[test]
    fn test_storage_sink_needs_key() {
        let err = StorefrontConfig::from_json(
            r#"{"cart_sink": "local_storage", "cart_storage_key": ""}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }
}
