//! # Storefront Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  UI glue                       Rust                                     │
//! │  ───────                       ────                                     │
//! │                                                                         │
//! │  addToCart(product, 0)                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::cart::add_to_cart → Result<CartResponse, ApiError>    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  ValidationError::MustBePositive ──► CoreError ──► ApiError ───►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR",                                          │
//! │    "message": "quantity must be positive" }                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration problems have their own [`ConfigError`]; they only surface
//! at startup and are not part of the command surface.

use inkstudio_core::CoreError;
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from the command surface.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price has invalid format: expected one or two decimal places"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Cart operation could not be completed
    CartError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => ApiError::cart("Cart is empty"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures while loading, validating or saving `shop.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`ShopConfig`](crate::config::ShopConfig).
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("Failed to save config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is not acceptable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// No explicit path and no platform config directory.
    #[error("No config path available")]
    NoConfigPath,
}
