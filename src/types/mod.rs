//! Types module
//!
//! Contains the domain records persisted by the store:
//! - `account`: bank accounts and arena keys
//! - `item`: inventory and order line items
//! - `order`: orders with embedded items and placeholder rows
//! - `user`: role-polymorphic user records
//! - `transaction`: bank transaction log entries
//! - `timestamp`: instants with an explicit unknown sentinel
//! - `error`: error types for the store

pub mod account;
pub mod error;
pub mod item;
pub mod order;
pub mod timestamp;
pub mod transaction;
pub mod user;

pub use account::{AccountId, AccountKey, BankAccount};
pub use error::StoreError;
pub use item::{Item, ItemId};
pub use order::{Order, OrderId, OrderStatus, PlaceholderKind};
pub use timestamp::{CalendarZone, EpochUnit, Timestamp};
pub use transaction::{BankTransaction, TransactionKind};
pub use user::{Role, RoleTag, UserRecord};
