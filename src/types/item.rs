//! Catalog and order line items

use super::error::StoreError;
use rust_decimal::Decimal;

/// Item identifier, unique within a store's catalog
pub type ItemId = u32;

/// A product line: either a store inventory entry or a value copy embedded in
/// an order
///
/// An order keeps its own copy, so later catalog edits do not change the
/// name, quantity or price recorded at purchase time.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Units in stock (inventory) or purchased (order line)
    pub quantity: u32,
    price: Decimal,
}

impl Item {
    /// Create an item
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` if `price` is below zero.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        price: Decimal,
    ) -> Result<Self, StoreError> {
        if price < Decimal::ZERO {
            return Err(StoreError::negative_amount("Item", "price", price));
        }

        Ok(Item {
            id,
            name: name.into(),
            quantity,
            price,
        })
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Quantity times unit price
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the product does not fit in a `Decimal`.
    pub fn line_total(&self) -> Result<Decimal, StoreError> {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(StoreError::arithmetic_overflow("line_total", "Item", self.id))
    }
}
