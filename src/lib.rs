//! Shop Ledger Store Library
//! # Overview
//!
//! Persistence and record codecs for a small shop and bank system. Bank
//! accounts, users, store inventories, orders and a transaction log live in
//! flat comma-delimited text files; this crate reads them back into a linked
//! in-memory graph and writes them out again.
//!
//! # Architecture
//!
//! - [`types`] - Records (accounts, items, orders, users, transactions) and errors
//! - [`io`] - Line format: tokenizer, timestamp forms, entity codecs, file store
//! - [`core`] - The bank's account arena and the application state
//! - [`persistence`] - Load with cross-file linking, save, transaction log access
//! - [`config`] - Data directory resolution
//! - [`cli`] - Command-line parsing and subcommands
//!
//! # Linking
//!
//! Users and the bank's customer registry refer to accounts through the same
//! [`types::AccountKey`], so a balance changed through one is seen by the
//! other. Links are rebuilt on every load by owner name (accounts) and store
//! name (inventory).
//!
//! # Error policy
//!
//! Loading never fails: malformed rows are logged and skipped, missing files
//! load as empty, and unreadable order headers become placeholder orders.
//! Writes report failures per file through [`persistence::SaveReport`].

pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod persistence;
pub mod types;

pub use config::DataPaths;
pub use core::{AppState, Bank};
pub use persistence::{LoadReport, Persistence, SaveReport};
pub use types::{
    AccountId, AccountKey, BankAccount, BankTransaction, Item, ItemId, Order, OrderId,
    OrderStatus, Role, RoleTag, StoreError, Timestamp, TransactionKind, UserRecord,
};
