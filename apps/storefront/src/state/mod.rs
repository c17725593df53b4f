//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │     CartProvider     │        │        ShopConfig        │          │
//! │  │                      │        │                          │          │
//! │  │  Mutex<Arc<          │        │  store / currency        │          │
//! │  │    CartState>>       │        │  notifications           │          │
//! │  │  Arc<dyn Notifier>   │        │  logging                 │          │
//! │  └──────────────────────┘        └──────────────────────────┘          │
//! │                                                                         │
//! │  • CartProvider: one per session, passed by reference                  │
//! │  • ShopConfig: read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::CartProvider;
