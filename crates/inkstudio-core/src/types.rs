//! # Boundary Types
//!
//! Value types that cross the cart boundary.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Types                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ProductRef    │   │    Quantity     │   │   CartEntry     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  1..=9999       │   │  ProductRef     │       │
//! │  │  name           │──►│  (never 0)      │──►│  fields frozen  │       │
//! │  │  unit_price     │   │                 │   │  quantity ≥ 1   │       │
//! │  │  image/category │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validate Once, Trust Afterwards
//! Catalog pages hand the cart loosely-typed product data. Both
//! [`ProductRef`] and [`Quantity`] can only be built through validating
//! constructors, so the reducer never has to second-guess its inputs.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_category, validate_price, validate_product_id, validate_product_name,
    validate_quantity, ValidationResult,
};

// =============================================================================
// Product Reference
// =============================================================================

/// A product as supplied by the catalog when it is added to the cart.
///
/// The cart trusts this reference verbatim once built; it is never checked
/// against a live catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    id: String,
    name: String,
    unit_price: Money,
    image: String,
    category: String,
}

impl ProductRef {
    /// Builds a validated product reference.
    ///
    /// The identifier is kept verbatim and must not carry surrounding
    /// whitespace. Name and category are trimmed; the name must be non-empty
    /// and the price must not be negative. Image and category may be empty.
    ///
    /// ```rust
    /// use inkstudio_core::{Money, ProductRef};
    ///
    /// let poster = ProductRef::new("p1", "Poster", Money::from_cents(8990), "/img/poster.jpg", "prints");
    /// assert!(poster.is_ok());
    ///
    /// let free = ProductRef::new("p0", "Adesivo brinde", Money::zero(), "", "");
    /// assert!(free.is_ok());
    ///
    /// let negative = ProductRef::new("p2", "Sticker", Money::from_cents(-1), "", "");
    /// assert!(negative.is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> ValidationResult<Self> {
        let id = id.into();
        let name = name.into().trim().to_string();
        let category = category.into().trim().to_string();

        validate_product_id(&id)?;
        validate_product_name(&name)?;
        validate_price(unit_price)?;
        validate_category(&category)?;

        Ok(ProductRef {
            id,
            name,
            unit_price,
            image: image.into(),
            category,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A strictly positive quantity requested by a caller.
///
/// Non-positive quantities are rejected here rather than reaching the
/// reducer, for brand-new products and existing entries alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Quantity of one, the default for "add to cart" buttons.
    pub const ONE: Quantity = Quantity(1);

    /// Validates a raw quantity.
    ///
    /// ```rust
    /// use inkstudio_core::Quantity;
    ///
    /// assert_eq!(Quantity::new(2).unwrap().get(), 2);
    /// assert!(Quantity::new(0).is_err());
    /// assert!(Quantity::new(-5).is_err());
    /// ```
    pub fn new(qty: i64) -> ValidationResult<Self> {
        validate_quantity(qty)?;
        u32::try_from(qty)
            .map(Quantity)
            .map_err(|_| ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: crate::MAX_LINE_QUANTITY,
            })
    }

    /// Validates an optional quantity, defaulting to one when absent.
    pub fn or_one(qty: Option<i64>) -> ValidationResult<Self> {
        qty.map_or(Ok(Quantity::ONE), Quantity::new)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ONE
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// One line of the cart, keyed by product identifier.
///
/// ## Invariant
/// `quantity >= 1`. An entry whose quantity would reach zero is removed from
/// the cart instead of being kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
    pub image: String,
    pub category: String,
    pub quantity: u32,
}

impl CartEntry {
    /// Creates a new entry from a product reference.
    pub fn from_product(product: &ProductRef, quantity: Quantity) -> Self {
        CartEntry {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: quantity.get(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}
