//! # Cart State & Reducer
//!
//! The cart is an immutable aggregate. Every transition builds a brand-new
//! [`CartState`] from the previous one and an action; nothing is mutated in
//! place.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    reduce(state, action) → state'                       │
//! │                                                                         │
//! │  Action                    Effect on entries                            │
//! │  ──────                    ─────────────────                            │
//! │                                                                         │
//! │  Add(product, q)  ───────► existing id? quantity += q                   │
//! │                            otherwise   push to the end                  │
//! │                                                                         │
//! │  Remove(id) ─────────────► drop the matching entry (absent = no-op)     │
//! │                                                                         │
//! │  SetQuantity(id, q) ─────► q <= 0      → same as Remove(id)             │
//! │                            otherwise   → quantity = q (absolute)        │
//! │                                                                         │
//! │  Clear ──────────────────► no entries                                   │
//! │                                                                         │
//! │  After EVERY transition: totals recomputed from entries.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries are unique by id and keep insertion order
//! - Every entry has `quantity >= 1`
//! - `total_items == Σ quantity` and `total_price == Σ unit_price × quantity`
//!
//! The totals are private fields and the only way to build a `CartState` is
//! through [`CartState::from_entries`], which derives them.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartEntry, ProductRef, Quantity};

// =============================================================================
// Cart State
// =============================================================================

/// A snapshot of the cart: entries in insertion order plus derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    entries: Vec<CartEntry>,
    total_items: u64,
    total_price: Money,
}

impl CartState {
    /// The empty cart every session starts with.
    pub fn empty() -> Self {
        CartState {
            entries: Vec::new(),
            total_items: 0,
            total_price: Money::zero(),
        }
    }

    /// Builds a state from entries, deriving both totals.
    fn from_entries(entries: Vec<CartEntry>) -> Self {
        let total_items = entries.iter().map(|e| u64::from(e.quantity)).sum();
        let total_price = entries.iter().map(CartEntry::line_total).sum();

        CartState {
            entries,
            total_items,
            total_price,
        }
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of all entry quantities.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of all line totals.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entry(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CartState {
    fn default() -> Self {
        CartState::empty()
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// One requested change to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` units of `product`, merging with an existing entry.
    Add {
        product: ProductRef,
        quantity: Quantity,
    },

    /// Remove the entry with this id, if any.
    Remove { id: String },

    /// Set the entry's quantity to an absolute value; `<= 0` removes it.
    SetQuantity { id: String, quantity: i64 },

    /// Drop every entry.
    Clear,
}

impl CartAction {
    /// Short action name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::Add { .. } => "add",
            CartAction::Remove { .. } => "remove",
            CartAction::SetQuantity { .. } => "set_quantity",
            CartAction::Clear => "clear",
        }
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Computes the next cart state from the current state and an action.
///
/// Pure and total: no side effects, no hidden state, and every
/// `(state, action)` pair yields the same result.
///
/// ```rust
/// use inkstudio_core::{reduce, CartAction, CartState, Money, ProductRef, Quantity};
///
/// let sticker = ProductRef::new("p2", "Sticker", Money::from_cents(2990), "", "stickers").unwrap();
/// let state = reduce(
///     &CartState::empty(),
///     &CartAction::Add { product: sticker, quantity: Quantity::ONE },
/// );
///
/// let state = reduce(&state, &CartAction::SetQuantity { id: "p2".into(), quantity: -5 });
/// assert!(state.is_empty());
/// ```
pub fn reduce(state: &CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::Add { product, quantity } => add(state, product, *quantity),
        CartAction::Remove { id } => remove(state, id),
        CartAction::SetQuantity { id, quantity } => set_quantity(state, id, *quantity),
        CartAction::Clear => CartState::empty(),
    }
}

fn add(state: &CartState, product: &ProductRef, quantity: Quantity) -> CartState {
    let mut entries = state.entries.clone();

    match entries.iter_mut().find(|e| e.id == product.id()) {
        Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity.get()),
        None => entries.push(CartEntry::from_product(product, quantity)),
    }

    CartState::from_entries(entries)
}

fn remove(state: &CartState, id: &str) -> CartState {
    let entries = state
        .entries
        .iter()
        .filter(|e| e.id != id)
        .cloned()
        .collect();

    CartState::from_entries(entries)
}

fn set_quantity(state: &CartState, id: &str, quantity: i64) -> CartState {
    if quantity <= 0 {
        return remove(state, id);
    }

    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    let entries = state
        .entries
        .iter()
        .map(|e| {
            if e.id == id {
                CartEntry {
                    quantity,
                    ..e.clone()
                }
            } else {
                e.clone()
            }
        })
        .collect();

    CartState::from_entries(entries)
}

// =============================================================================
// Unit Tests
// =============================================================================
