//! # Cart Notifications
//!
//! Transient user-facing feedback ("toasts") fired after cart mutations.
//!
//! The cart only ever *calls* a [`CartNotifier`]; it never owns the surface
//! that displays the message.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartProvider                                                           │
//! │    1. reduce(state, action)         (pure)                              │
//! │    2. swap snapshot, release lock                                       │
//! │    3. notifier.notify(&notification)                                    │
//! │                    │                                                    │
//! │      ┌─────────────┼──────────────────┬─────────────────────┐          │
//! │      ▼             ▼                  ▼                     ▼           │
//! │  NoOpNotifier  TracingNotifier  BroadcastNotifier    (UI adapters)      │
//! │                  info! event     tokio broadcast ──► toast subscribers  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{info, trace};
use ts_rs::TS;

// =============================================================================
// Notification
// =============================================================================

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Success,
    Info,
}

/// A toast as the UI renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    /// Fired after a product is added.
    pub fn added(product_name: &str) -> Self {
        Notification::new(
            "Adicionado ao carrinho",
            format!("{} foi adicionado ao carrinho.", product_name),
            Severity::Success,
        )
    }

    /// Fired after an explicit removal. `product_name` is `None` when the
    /// entry was not in the cart.
    pub fn removed(product_name: Option<&str>) -> Self {
        let description = match product_name {
            Some(name) => format!("{} foi removido do carrinho.", name),
            None => "O item foi removido do carrinho.".to_string(),
        };
        Notification::new("Removido do carrinho", description, Severity::Info)
    }

    /// Fired after the cart is cleared.
    pub fn cleared() -> Self {
        Notification::new(
            "Carrinho limpo",
            "Todos os itens foram removidos.",
            Severity::Info,
        )
    }
}

// =============================================================================
// Notifier Trait
// =============================================================================

/// Injected capability that displays notifications.
pub trait CartNotifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Drops every notification. Used when notifications are disabled.
pub struct NoOpNotifier;

impl CartNotifier for NoOpNotifier {
    fn notify(&self, _notification: &Notification) {}
}

/// Writes notifications to the log.
pub struct TracingNotifier;

impl CartNotifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        info!(
            title = %notification.title,
            severity = ?notification.severity,
            "{}",
            notification.description
        );
    }
}

/// Fans notifications out to any number of UI subscribers.
///
/// Sending while nobody is subscribed is not an error; the notification is
/// simply dropped. Slow subscribers may observe `Lagged` and skip ahead.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        BroadcastNotifier { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        BroadcastNotifier::new(64)
    }
}

impl CartNotifier for BroadcastNotifier {
    fn notify(&self, notification: &Notification) {
        if self.tx.send(notification.clone()).is_err() {
            trace!(title = %notification.title, "No notification subscribers");
        }
    }
}
