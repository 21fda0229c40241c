//! Core in-memory model
//!
//! - `bank` - Account arena and customer registry
//! - `state` - Application context owning the bank, users and orders

pub mod bank;
pub mod state;

pub use bank::Bank;
pub use state::AppState;
