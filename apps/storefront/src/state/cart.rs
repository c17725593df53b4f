//! # Cart Provider
//!
//! Owns the single cart of a storefront session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Provider Operations                             │
//! │                                                                         │
//! │  UI Action            Provider Method        Action        Toast        │
//! │  ─────────            ───────────────        ──────        ─────        │
//! │                                                                         │
//! │  "Adicionar" ───────► add_to_cart() ───────► Add ────────► success     │
//! │                                                                         │
//! │  Quantity stepper ──► update_quantity() ───► SetQuantity ► (none)      │
//! │                                                                         │
//! │  Trash icon ────────► remove_from_cart() ──► Remove ─────► info        │
//! │                                                                         │
//! │  "Limpar carrinho" ─► clear_cart() ────────► Clear ──────► info        │
//! │                                                                         │
//! │  Render ────────────► snapshot() ──────────► (read only, Arc clone)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshots
//! The current state lives in a `Mutex<Arc<CartState>>`. A transition holds
//! the lock only long enough to reduce and swap the `Arc`; readers clone the
//! `Arc` and may keep it as long as they like, since a published state is
//! never mutated again.
//!
//! ## Notification Order
//! Mutations are serialized by a separate writer lock that stays held until
//! the notifier returns, so toasts arrive in exactly the order the states
//! were published. The state lock is already released at that point, so a
//! notifier may read [`CartProvider::snapshot`]; it must not mutate the cart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use inkstudio_core::{reduce, CartAction, CartState, CoreResult, ProductRef, Quantity};
use tracing::debug;
use uuid::Uuid;

use crate::config::ShopConfig;
use crate::notify::{CartNotifier, NoOpNotifier, Notification};

/// Session-owned cart state holder.
///
/// Constructed once per storefront session and passed by reference to
/// whatever needs to read or mutate the cart.
pub struct CartProvider {
    state: Mutex<Arc<CartState>>,
    writer: Mutex<()>,
    notifier: Arc<dyn CartNotifier>,
    session_id: Uuid,
    opened_at: DateTime<Utc>,
}

impl CartProvider {
    /// Creates a provider with an empty cart.
    pub fn new(notifier: Arc<dyn CartNotifier>) -> Self {
        CartProvider {
            state: Mutex::new(Arc::new(CartState::empty())),
            writer: Mutex::new(()),
            notifier,
            session_id: Uuid::new_v4(),
            opened_at: Utc::now(),
        }
    }

    /// Creates a provider honoring `notifications.enabled`.
    pub fn from_config(config: &ShopConfig, notifier: Arc<dyn CartNotifier>) -> Self {
        if config.notifications.enabled {
            CartProvider::new(notifier)
        } else {
            CartProvider::new(Arc::new(NoOpNotifier))
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Returns the current immutable snapshot.
    pub fn snapshot(&self) -> Arc<CartState> {
        Arc::clone(&*self.lock())
    }

    /// Applies an action without any notification.
    pub fn dispatch(&self, action: &CartAction) -> Arc<CartState> {
        self.transition(action, |_| None)
    }

    /// Adds a product, defaulting to one unit, then announces it.
    ///
    /// Rejects a non-positive or oversized quantity before touching the cart.
    pub fn add_to_cart(
        &self,
        product: ProductRef,
        quantity: Option<i64>,
    ) -> CoreResult<Arc<CartState>> {
        let quantity = Quantity::or_one(quantity)?;
        debug!(product_id = %product.id(), quantity = quantity.get(), "add_to_cart");

        let notification = Notification::added(product.name());
        Ok(self.transition(&CartAction::Add { product, quantity }, |_| {
            Some(notification)
        }))
    }

    /// Removes an entry and announces it. Absent ids are a silent no-op for
    /// the state, but the notification still fires.
    pub fn remove_from_cart(&self, id: &str) -> Arc<CartState> {
        debug!(product_id = %id, "remove_from_cart");

        self.transition(&CartAction::Remove { id: id.to_string() }, |previous| {
            let name = previous.entry(id).map(|e| e.name.as_str());
            Some(Notification::removed(name))
        })
    }

    /// Sets an absolute quantity; `<= 0` removes the entry. Never notifies.
    pub fn update_quantity(&self, id: &str, quantity: i64) -> Arc<CartState> {
        debug!(product_id = %id, quantity, "update_quantity");

        self.dispatch(&CartAction::SetQuantity {
            id: id.to_string(),
            quantity,
        })
    }

    /// Empties the cart and announces it.
    pub fn clear_cart(&self) -> Arc<CartState> {
        debug!("clear_cart");

        self.transition(&CartAction::Clear, |_| Some(Notification::cleared()))
    }

    /// Reduces and publishes, then hands `announce` the state the action
    /// was applied to and delivers whatever it returns.
    fn transition<F>(&self, action: &CartAction, announce: F) -> Arc<CartState>
    where
        F: FnOnce(&CartState) -> Option<Notification>,
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut current = self.lock();
        let previous = Arc::clone(&*current);
        let next = Arc::new(reduce(&previous, action));
        *current = Arc::clone(&next);
        drop(current);

        debug!(
            action = action.kind(),
            lines = next.line_count(),
            total_items = next.total_items(),
            total_price = next.total_price().cents(),
            "cart updated"
        );

        if let Some(notification) = announce(&previous) {
            self.notifier.notify(&notification);
        }
        next
    }

    /// A poisoned lock still guards a coherent `Arc`, so recover it.
    fn lock(&self) -> MutexGuard<'_, Arc<CartState>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartProvider {
    fn default() -> Self {
        CartProvider::new(Arc::new(NoOpNotifier))
    }
}

impl std::fmt::Debug for CartProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartProvider")
            .field("session_id", &self.session_id)
            .field("opened_at", &self.opened_at)
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}
