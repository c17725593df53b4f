//! # Validation Module
//!
//! Input validation rules applied at the cart boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  └── Quantity steppers, disabled buttons                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront commands                                          │
//! │  └── Deserialization of the catalog's product payload                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  └── ProductRef / Quantity constructors                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Reducer: trusts its inputs, never fails                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CATEGORY_LEN, MAX_LINE_QUANTITY, MAX_PRODUCT_ID_LEN, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty
/// - No leading or trailing whitespace
/// - At most 128 characters
///
/// Ids are cart keys and are compared verbatim on remove and update, so
/// they are never rewritten.
///
/// ```rust
/// use inkstudio_core::validation::validate_product_id;
///
/// assert!(validate_product_id("p1").is_ok());
/// assert!(validate_product_id("  ").is_err());
/// assert!(validate_product_id("p1 ").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    validate_required("id", id, MAX_PRODUCT_ID_LEN)?;

    if id.trim() != id {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not start or end with whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Validates a product category. Empty is allowed.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity requested by a caller.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Shop page: "Adicionar ao carrinho" (qty stepper = 2)                  │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(2) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0?    → Error: "quantity must be positive"            │
/// │       ├── qty > 9999?  → Error: "quantity must be between 1 and 9999"  │
/// │       └── OK → CartAction::Add                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free gifts)
///
/// ```rust
/// use inkstudio_core::money::Money;
/// use inkstudio_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(8990)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}
