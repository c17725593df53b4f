//! # inkstudio-core: Pure Cart Logic for the Inkstudio Storefront
//!
//! This crate holds the shopping cart as pure functions with zero I/O
//! dependencies. The storefront app owns the session and the side effects;
//! everything here is deterministic.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inkstudio Storefront                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Product Card ──► Shop Page ──► Cart Drawer ──► Checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront (CartProvider)                       │   │
//! │  │    add_to_cart, remove_from_cart, update_quantity, clear_cart  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inkstudio-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ ProductRef│  │   Money   │  │ CartState │  │   rules   │  │   │
//! │  │   │ CartEntry │  │           │  │  reduce   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO NOTIFICATIONS • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Boundary types (ProductRef, Quantity, CartEntry)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state, actions and the reducer
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use inkstudio_core::{reduce, CartAction, CartState, Money, ProductRef, Quantity};
//!
//! let poster = ProductRef::new("p1", "Poster", Money::from_cents(8990), "", "prints").unwrap();
//!
//! let state = reduce(
//!     &CartState::empty(),
//!     &CartAction::Add { product: poster, quantity: Quantity::new(3).unwrap() },
//! );
//!
//! assert_eq!(state.total_items(), 3);
//! assert_eq!(state.total_price().cents(), 26970);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{reduce, CartAction, CartState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CartEntry, ProductRef, Quantity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted in a single add request.
///
/// Repeated adds may accumulate past this; the bound only applies to what a
/// caller asks for in one go (e.g. a typo of 10000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 9_999;

/// Maximum length of a product identifier.
pub const MAX_PRODUCT_ID_LEN: usize = 128;

/// Maximum length of a product display name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a product category.
pub const MAX_CATEGORY_LEN: usize = 100;
