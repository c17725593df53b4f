//! # Inkstudio Storefront
//!
//! Session-level cart handling for the Inkstudio storefront: the cart
//! provider, its notifications, the command surface used by UI glue, and the
//! draft handed to checkout.
//!
//! ## Module Organization
//! ```text
//! inkstudio_storefront/
//! ├── lib.rs          ◄─── You are here (logging & bootstrap)
//! ├── config.rs       ◄─── shop.toml + INKSTUDIO_* environment
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── cart.rs     ◄─── CartProvider (session-owned cart)
//! ├── notify.rs       ◄─── Toast notifications
//! ├── commands/
//! │   ├── cart.rs     ◄─── Cart commands
//! │   └── checkout.rs ◄─── Order draft command
//! ├── checkout.rs     ◄─── OrderDraft
//! └── error.rs        ◄─── ApiError / ConfigError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront::start(None)                                                │
//! │    1. ShopConfig::load_or_default(None)                                 │
//! │    2. init_tracing(&config.logging)                                     │
//! │    3. Storefront::new(config, TracingNotifier)                          │
//! │                                                                         │
//! │  UI glue swaps in its own notifier via Storefront::new, then calls      │
//! │  commands::cart::* with &storefront.cart                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{LoggingConfig, ShopConfig};
use notify::{CartNotifier, TracingNotifier};
use state::CartProvider;

/// Everything one storefront session needs.
#[derive(Debug)]
pub struct Storefront {
    pub config: ShopConfig,
    pub cart: CartProvider,
}

impl Storefront {
    pub fn new(config: ShopConfig, notifier: Arc<dyn CartNotifier>) -> Self {
        let cart = CartProvider::from_config(&config, notifier);
        info!(
            store = %config.store.name,
            session_id = %cart.session_id(),
            notifications = config.notifications.enabled,
            "Storefront session started"
        );
        Storefront { config, cart }
    }

    /// Headless startup: loads `shop.toml` (falling back to defaults),
    /// installs logging and announces cart changes through the log.
    pub fn start(config_path: Option<PathBuf>) -> Self {
        let config = ShopConfig::load_or_default(config_path);
        init_tracing(&config.logging);
        Storefront::new(config, Arc::new(TracingNotifier))
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` always wins when set
/// - Otherwise `logging.filter` from the shop config
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::NoOpNotifier;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let logging = LoggingConfig::default();
        init_tracing(&logging);
        init_tracing(&logging);
    }

    #[test]
    fn test_start_reads_shop_file() {
        let dir = std::env::temp_dir().join(format!("inkstudio-{}", uuid::Uuid::new_v4()));
        let path = dir.join("shop.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[store]\nname = \"Estúdio Centro\"\n").unwrap();

        let storefront = Storefront::start(Some(path));
        assert_eq!(storefront.config.store.name, "Estúdio Centro");
        assert!(storefront.cart.snapshot().is_empty());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_start_announces_through_the_log() {
        let storefront = Storefront::start(Some(std::env::temp_dir().join("inkstudio-missing.toml")));
        let poster = inkstudio_core::ProductRef::new(
            "p1",
            "Poster",
            inkstudio_core::Money::from_cents(8990),
            "",
            "",
        )
        .unwrap();

        let state = storefront.cart.add_to_cart(poster, None).unwrap();
        assert_eq!(state.total_items(), 1);
        assert_eq!(storefront.cart.clear_cart().total_items(), 0);
    }

    #[test]
    fn test_storefront_starts_empty() {
        let storefront = Storefront::new(ShopConfig::default(), Arc::new(NoOpNotifier));
        assert!(storefront.cart.snapshot().is_empty());
    }
}
