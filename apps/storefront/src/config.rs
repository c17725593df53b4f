//! # Shop Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     INKSTUDIO_STORE_NAME="Nave-Mãe Store"                              │
//! │     INKSTUDIO_CURRENCY=BRL                                             │
//! │     INKSTUDIO_CURRENCY_SYMBOL="R$"                                     │
//! │     INKSTUDIO_NOTIFICATIONS=false                                      │
//! │     INKSTUDIO_LOG=debug                                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/inkstudio-storefront/shop.toml (Linux)                   │
//! │     ~/Library/Application Support/com.inkstudio.storefront/shop.toml   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     BRL, "R$", ',' separator, notifications on                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Inkstudio"
//! currency_code = "BRL"
//! currency_symbol = "R$"
//! decimal_separator = ","
//!
//! [notifications]
//! enabled = true
//!
//! [logging]
//! filter = "info,inkstudio=debug"
//! ```

use inkstudio_core::Money;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Store identity and currency display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in the storefront header.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Currency code (ISO 4217).
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Currency symbol (for display).
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Decimal separator for prices, `,` (pt-BR) or `.`.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_store_name() -> String {
    "Inkstudio".to_string()
}

fn default_currency_code() -> String {
    "BRL".to_string()
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_decimal_separator() -> char {
    ','
}

/// Display symbol for the currencies the studio sells in.
fn known_symbol(code: &str) -> Option<&'static str> {
    match code {
        "BRL" => Some("R$"),
        "USD" => Some("US$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: default_store_name(),
            currency_code: default_currency_code(),
            currency_symbol: default_currency_symbol(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl StoreConfig {
    /// Formats an amount with the configured symbol and separator.
    ///
    /// ```rust
    /// use inkstudio_core::Money;
    /// use inkstudio_storefront::config::StoreConfig;
    ///
    /// let store = StoreConfig::default();
    /// assert_eq!(store.format_price(Money::from_cents(29960)), "R$ 299,60");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol, self.decimal_separator)
    }
}

// =============================================================================
// Notification Settings
// =============================================================================

/// Toast notifications fired by cart operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings { enabled: true }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,inkstudio=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (shop.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading shop config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load shop config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Shop config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let code = &self.store.currency_code;
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ConfigError::Invalid(format!(
                "currency_code must be three uppercase letters, got: '{}'",
                code
            )));
        }

        if self.store.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".into(),
            ));
        }

        if !matches!(self.store.decimal_separator, ',' | '.') {
            return Err(ConfigError::Invalid(format!(
                "decimal_separator must be ',' or '.', got: '{}'",
                self.store.decimal_separator
            )));
        }

        Ok(())
    }

    /// Applies `INKSTUDIO_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("INKSTUDIO_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(code) = lookup("INKSTUDIO_CURRENCY") {
            debug!(currency = %code, "Overriding currency from environment");
            let code = code.to_uppercase();
            if code != self.store.currency_code {
                self.store.currency_symbol =
                    known_symbol(&code).unwrap_or(code.as_str()).to_string();
            }
            self.store.currency_code = code;
        }

        if let Some(symbol) = lookup("INKSTUDIO_CURRENCY_SYMBOL") {
            self.store.currency_symbol = symbol;
        }

        if let Some(flag) = lookup("INKSTUDIO_NOTIFICATIONS") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => self.notifications.enabled = true,
                "0" | "false" | "off" | "no" => self.notifications.enabled = false,
                _ => warn!(value = %flag, "Unknown INKSTUDIO_NOTIFICATIONS value"),
            }
        }

        if let Some(filter) = lookup("INKSTUDIO_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "inkstudio", "storefront")
            .map(|dirs| dirs.config_dir().join("shop.toml"))
    }
}
