//! # Cart Commands
//!
//! JSON-friendly entry points for UI glue. Product payloads arrive exactly
//! as the catalog serves them and are validated here before the cart sees
//! them.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Draft   │     │ Confirmed│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └────┬─────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                             │             │
//! │       │           update_cart_item                        │             │
//! │       │           remove_from_cart                        │             │
//! │       │                                                   │             │
//! │       └──────────────── clear_cart ◄──────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inkstudio_core::{CartEntry, CartState, CoreError, Money, ProductRef, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::config::StoreConfig;
use crate::error::ApiError;
use crate::state::CartProvider;

// =============================================================================
// Request Types
// =============================================================================

/// A product as the catalog serializes it.
///
/// Exactly one of `price` (decimal string, `"89.90"` or `"89,90"`) and
/// `priceCents` must be present.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    #[ts(type = "number | null")]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<ProductInput> for ProductRef {
    type Error = ValidationError;

    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        let price = match (input.price_cents, input.price.as_deref()) {
            (Some(cents), None) => Money::from_cents(cents),
            (None, Some(decimal)) => decimal.parse()?,
            (Some(_), Some(_)) => {
                return Err(ValidationError::InvalidFormat {
                    field: "price".to_string(),
                    reason: "provide either price or priceCents, not both".to_string(),
                })
            }
            (None, None) => {
                return Err(ValidationError::Required {
                    field: "price".to_string(),
                })
            }
        };

        ProductRef::new(
            input.id,
            input.name,
            price,
            input.image.unwrap_or_default(),
            input.category.unwrap_or_default(),
        )
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Cart totals summary for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    #[ts(type = "number")]
    pub total_items: u64,
    #[ts(type = "number")]
    pub total_price_cents: i64,
    pub total_price_display: String,
}

impl CartTotals {
    pub fn from_state(state: &CartState, store: &StoreConfig) -> Self {
        CartTotals {
            line_count: state.line_count(),
            total_items: state.total_items(),
            total_price_cents: state.total_price().cents(),
            total_price_display: store.format_price(state.total_price()),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub items: Vec<CartEntry>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn from_state(state: &CartState, store: &StoreConfig) -> Self {
        CartResponse {
            items: state.entries().to_vec(),
            totals: CartTotals::from_state(state, store),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents.
pub fn get_cart(cart: &CartProvider, store: &StoreConfig) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from_state(&cart.snapshot(), store)
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - `quantity` defaults to 1
/// - Already in cart: quantity increases
/// - Malformed product or non-positive quantity: `VALIDATION_ERROR`, cart untouched
pub fn add_to_cart(
    cart: &CartProvider,
    store: &StoreConfig,
    product: ProductInput,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product.id, ?quantity, "add_to_cart command");

    let product = ProductRef::try_from(product).map_err(CoreError::from)?;
    let state = cart.add_to_cart(product, quantity)?;

    Ok(CartResponse::from_state(&state, store))
}

/// Sets the quantity of an item; 0 or less removes it.
pub fn update_cart_item(
    cart: &CartProvider,
    store: &StoreConfig,
    product_id: String,
    quantity: i64,
) -> CartResponse {
    debug!(product_id = %product_id, quantity, "update_cart_item command");
    CartResponse::from_state(&cart.update_quantity(&product_id, quantity), store)
}

/// Removes an item from the cart.
pub fn remove_from_cart(cart: &CartProvider, store: &StoreConfig, product_id: String) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    CartResponse::from_state(&cart.remove_from_cart(&product_id), store)
}

/// Clears all items from the cart.
///
/// ## When Used
/// - Customer empties the cart
/// - Checkout collaborator confirmed the order
pub fn clear_cart(cart: &CartProvider, store: &StoreConfig) -> CartResponse {
    debug!("clear_cart command");
    CartResponse::from_state(&cart.clear_cart(), store)
}
