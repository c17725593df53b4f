//! # Checkout Draft
//!
//! Read-only payload handed to the checkout collaborator.
//!
//! The cart has no "finalize" step of its own. Checkout reads a snapshot,
//! places the order elsewhere, and only after it confirms success does the
//! UI call `clear_cart`.
//!
//! ```text
//! CartProvider::snapshot() ──► OrderDraft::from_snapshot() ──► checkout
//!                                                                 │
//!        clear_cart() ◄──────────── confirmed ◄───────────────────┘
//! ```
//!
//! Lines use the snapshot pattern: name and price are frozen at draft time so
//! the order matches what the customer saw.

use chrono::{DateTime, Utc};
use inkstudio_core::{CartState, CoreError, CoreResult, Money};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::state::CartProvider;

/// One line of an order draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    pub product_id: String,
    pub name_snapshot: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// An order ready to be placed by the checkout collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDraft {
    #[ts(as = "String")]
    pub id: Uuid,
    #[ts(as = "String")]
    pub session_id: Uuid,
    #[ts(as = "String")]
    pub session_opened_at: DateTime<Utc>,
    pub currency_code: String,
    pub lines: Vec<OrderLine>,
    #[ts(type = "number")]
    pub item_count: u64,
    pub subtotal: Money,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Builds a draft from a cart snapshot. Fails on an empty cart.
    pub fn from_snapshot(
        session_id: Uuid,
        session_opened_at: DateTime<Utc>,
        state: &CartState,
        currency_code: &str,
    ) -> CoreResult<Self> {
        if state.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let lines = state
            .entries()
            .iter()
            .map(|e| OrderLine {
                product_id: e.id.clone(),
                name_snapshot: e.name.clone(),
                unit_price: e.unit_price,
                quantity: e.quantity,
                line_total: e.line_total(),
            })
            .collect();

        Ok(OrderDraft {
            id: Uuid::new_v4(),
            session_id,
            session_opened_at,
            currency_code: currency_code.to_string(),
            lines,
            item_count: state.total_items(),
            subtotal: state.total_price(),
            created_at: Utc::now(),
        })
    }

    /// Drafts the provider's current cart. The cart itself is left untouched.
    pub fn from_provider(cart: &CartProvider, store: &StoreConfig) -> CoreResult<Self> {
        let draft = OrderDraft::from_snapshot(
            cart.session_id(),
            cart.opened_at(),
            &cart.snapshot(),
            &store.currency_code,
        )?;
        tracing::info!(
            draft_id = %draft.id,
            session_id = %draft.session_id,
            lines = draft.lines.len(),
            subtotal = draft.subtotal.cents(),
            "order draft created"
        );
        Ok(draft)
    }

    /// Sum of line totals; always equals `subtotal`.
    pub fn lines_total(&self) -> Money {
        self.lines.iter().map(|l| l.line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkstudio_core::ProductRef;

    fn filled_cart() -> CartProvider {
        let cart = CartProvider::default();
        let poster = ProductRef::new("p1", "Poster", Money::from_cents(8990), "", "").unwrap();
        let sticker = ProductRef::new("p2", "Sticker", Money::from_cents(2990), "", "").unwrap();
        cart.add_to_cart(poster, Some(3)).unwrap();
        cart.add_to_cart(sticker, None).unwrap();
        cart
    }

    #[test]
    fn test_draft_from_provider() {
        let cart = filled_cart();
        let draft = OrderDraft::from_provider(&cart, &StoreConfig::default()).unwrap();

        assert_eq!(draft.session_id, cart.session_id());
        assert_eq!(draft.session_opened_at, cart.opened_at());
        assert!(draft.session_opened_at <= draft.created_at);
        assert_eq!(draft.currency_code, "BRL");
        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].product_id, "p1");
        assert_eq!(draft.lines[0].line_total.cents(), 26970);
        assert_eq!(draft.item_count, 4);
        assert_eq!(draft.subtotal.cents(), 29960);
        assert_eq!(draft.lines_total(), draft.subtotal);
    }

    #[test]
    fn test_draft_does_not_clear_cart() {
        let cart = filled_cart();
        OrderDraft::from_provider(&cart, &StoreConfig::default()).unwrap();
        assert_eq!(cart.snapshot().total_items(), 4);
    }

    #[test]
    fn test_empty_cart_has_no_draft() {
        let cart = CartProvider::default();
        assert_eq!(
            OrderDraft::from_provider(&cart, &StoreConfig::default()),
            Err(CoreError::EmptyCart)
        );
    }

    #[test]
    fn test_each_draft_gets_its_own_id() {
        let cart = filled_cart();
        let store = StoreConfig::default();
        let a = OrderDraft::from_provider(&cart, &store).unwrap();
        let b = OrderDraft::from_provider(&cart, &store).unwrap();
        assert_ne!(a.id, b.id);
    }
}
