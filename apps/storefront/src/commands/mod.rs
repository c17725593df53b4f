//! # Commands Module
//!
//! Functions the UI glue calls. Each takes the session's [`CartProvider`]
//! and the store settings by reference and returns serializable responses.
//!
//! ```text
//! commands/
//! ├── cart.rs      get_cart, add_to_cart, update_cart_item,
//! │                remove_from_cart, clear_cart
//! └── checkout.rs  create_order_draft
//! ```
//!
//! [`CartProvider`]: crate::state::CartProvider

pub mod cart;
pub mod checkout;
