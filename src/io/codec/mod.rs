//! Entity codecs for the persisted line format
//!
//! Each codec turns one record into one line (`encode`) and one tokenized
//! line back into a record (`decode`). Decoding is row-local: an error means
//! "skip this row" to the caller and never affects neighbouring rows.
//!
//! All functions here are pure (no I/O) for easy testing.

pub mod account;
pub mod item;
pub mod order;
pub mod transaction;
pub mod user;

pub use account::AccountCodec;
pub use item::{InventoryCodec, InventoryRow, ItemCodec};
pub use order::OrderCodec;
pub use transaction::TransactionCodec;
pub use user::UserCodec;

use crate::io::tokenizer::{split, Separator};
use crate::types::StoreError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Encode/decode pair for one record type
pub trait RecordCodec {
    /// The record produced by `decode`
    type Record;

    /// Entity name used in diagnostics
    const ENTITY: &'static str;

    /// Encode a record as one line, without the line terminator
    fn encode(record: &Self::Record) -> String;

    /// Decode a record from the top-level columns of one line
    ///
    /// # Errors
    ///
    /// Returns a row-level `StoreError` when the row must be skipped.
    fn decode(fields: &[&str]) -> Result<Self::Record, StoreError>;

    /// Tokenize a whole line on `,` and decode it
    fn decode_line(line: &str) -> Result<Self::Record, StoreError> {
        Self::decode(&split(line, Separator::Field))
    }
}

/// Fail with `MissingFields` unless `fields` has at least `expected` columns
pub(crate) fn require_fields(
    fields: &[&str],
    expected: usize,
    entity: &'static str,
) -> Result<(), StoreError> {
    if fields.len() < expected {
        return Err(StoreError::missing_fields(entity, expected, fields.len()));
    }
    Ok(())
}

/// Parse an integer-like column, ignoring surrounding whitespace
pub(crate) fn parse_number<T: FromStr>(
    text: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<T, StoreError> {
    text.trim()
        .parse::<T>()
        .map_err(|_| StoreError::invalid_number(entity, field, text))
}

/// Parse a currency column, ignoring surrounding whitespace
pub(crate) fn parse_amount(
    text: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<Decimal, StoreError> {
    Decimal::from_str(text.trim()).map_err(|_| StoreError::invalid_number(entity, field, text))
}

/// Format a currency amount with exactly two fractional digits
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
