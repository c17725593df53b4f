//! # Checkout Commands
//!
//! Checkout lives outside the storefront; this only hands it a draft.

use tracing::debug;

use crate::checkout::OrderDraft;
use crate::config::StoreConfig;
use crate::error::ApiError;
use crate::state::CartProvider;

/// Builds an order draft from the current cart.
///
/// ## Returns
/// - The draft; the cart is left as-is
/// - `CART_ERROR` if the cart is empty
pub fn create_order_draft(cart: &CartProvider, store: &StoreConfig) -> Result<OrderDraft, ApiError> {
    debug!(session_id = %cart.session_id(), "create_order_draft command");
    Ok(OrderDraft::from_provider(cart, store)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_empty_cart_is_cart_error() {
        let err = create_order_draft(&CartProvider::default(), &StoreConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Cart is empty");
    }
}
