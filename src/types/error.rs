//! Error types for the shop ledger store
//!
//! This module defines every error the persistence layer can produce.
//!
//! # Error Categories
//!
//! - **Row-level decode errors**: wrong arity, non-numeric fields, negative amounts,
//!   unknown roles. These are recoverable: the reader logs them and skips the row.
//! - **File errors**: missing or unreadable files on load (recoverable, the load
//!   degrades to an empty collection) and failed writes (reported to the caller).

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the store
///
/// Decode variants carry the entity name so that a skipped row can be traced
/// back to the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// File not found at the specified path
    ///
    /// On load this degrades to an empty collection.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The delimited file could not be read at the record level
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A row had fewer columns than the entity layout requires
    #[error("{entity} row has {found} fields, expected at least {expected}")]
    MissingFields {
        /// Entity being decoded
        entity: &'static str,
        /// Minimum number of fields
        expected: usize,
        /// Number of fields present
        found: usize,
    },

    /// A numeric column could not be parsed
    #[error("Invalid {field} '{value}' in {entity} row")]
    InvalidNumber {
        /// Entity being decoded
        entity: &'static str,
        /// Column name
        field: &'static str,
        /// Raw text of the column
        value: String,
    },

    /// A currency amount that must be non-negative was negative
    #[error("Negative {field} '{value}' in {entity}")]
    NegativeAmount {
        /// Entity being decoded or constructed
        entity: &'static str,
        /// Column name
        field: &'static str,
        /// Offending value as text
        value: String,
    },

    /// The role column of a user row was not Buyer, Seller or Admin
    #[error("Unknown user role '{role}'")]
    UnknownRole {
        /// The unrecognized role text
        role: String,
    },

    /// A deposit or withdrawal amount was zero or negative
    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal larger than the account balance
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account identifier
        account: u32,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for {entity} {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: &'static str,
        /// Entity whose amount overflowed
        entity: &'static str,
        /// Identifier of that entity
        id: u32,
    },

    /// A collection file could not be written
    #[error("Failed to write {path}: {message}")]
    WriteFailed {
        /// Target file
        path: String,
        /// Underlying cause
        message: String,
    },
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        StoreError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return StoreError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());
        StoreError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl StoreError {
    /// Create a MissingFields error
    pub fn missing_fields(entity: &'static str, expected: usize, found: usize) -> Self {
        StoreError::MissingFields {
            entity,
            expected,
            found,
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(entity: &'static str, field: &'static str, value: &str) -> Self {
        StoreError::InvalidNumber {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        StoreError::NegativeAmount {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Create an UnknownRole error
    pub fn unknown_role(role: &str) -> Self {
        StoreError::UnknownRole {
            role: role.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: u32, balance: Decimal, requested: Decimal) -> Self {
        StoreError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &'static str, entity: &'static str, id: u32) -> Self {
        StoreError::ArithmeticOverflow {
            operation,
            entity,
            id,
        }
    }

    /// Create a WriteFailed error
    pub fn write_failed(path: &std::path::Path, message: impl ToString) -> Self {
        StoreError::WriteFailed {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Whether this error only affects a single row
    ///
    /// Row-level errors are skipped; anything else means the file itself
    /// could not be read further.
    pub fn is_row_level(&self) -> bool {
        matches!(
            self,
            StoreError::MissingFields { .. }
                | StoreError::InvalidNumber { .. }
                | StoreError::NegativeAmount { .. }
                | StoreError::UnknownRole { .. }
                | StoreError::ParseError { .. }
        )
    }
}
