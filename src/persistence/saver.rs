//! Save orchestration
//!
//! The account and inventory files are derived from the users, not from the
//! bank: one account row per linked user and one inventory row per item of
//! every Seller. Each of the four files is rewritten on its own, so a failure
//! in one does not stop the others.

use crate::config::DataPaths;
use crate::core::AppState;
use crate::io::codec::{AccountCodec, InventoryCodec, InventoryRow, OrderCodec, UserCodec};
use crate::io::FileStore;
use crate::types::{BankAccount, Role, StoreError};
use std::collections::HashSet;
use tracing::{info, warn};

/// Per-file result of a save; `Ok` holds the number of rows written
#[derive(Debug)]
pub struct SaveReport {
    /// bank_accounts.csv
    pub accounts: Result<usize, StoreError>,
    /// users.csv
    pub users: Result<usize, StoreError>,
    /// inventory.csv
    pub inventory: Result<usize, StoreError>,
    /// orders.csv
    pub orders: Result<usize, StoreError>,
}

impl SaveReport {
    /// Whether every file was written
    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    /// Files that failed, labelled
    pub fn failures(&self) -> Vec<(&'static str, &StoreError)> {
        self.entries()
            .into_iter()
            .filter_map(|(label, result)| result.as_ref().err().map(|error| (label, error)))
            .collect()
    }

    /// All four results, labelled, in write order
    pub fn entries(&self) -> [(&'static str, &Result<usize, StoreError>); 4] {
        [
            ("accounts", &self.accounts),
            ("users", &self.users),
            ("inventory", &self.inventory),
            ("orders", &self.orders),
        ]
    }
}

/// Rewrite the four collection files from `state`
pub fn save_all(paths: &DataPaths, state: &AppState) -> SaveReport {
    if let Err(error) = paths.ensure_data_dir() {
        warn!(%error, "could not create data directory");
    }

    let report = SaveReport {
        accounts: FileStore::<AccountCodec>::new(paths.accounts_file())
            .write_all(linked_accounts(state)),
        users: FileStore::<UserCodec>::new(paths.users_file()).write_all(&state.users),
        inventory: FileStore::<InventoryCodec>::new(paths.inventory_file())
            .write_all(&inventory_rows(state)),
        orders: FileStore::<OrderCodec>::new(paths.orders_file()).write_all(&state.orders),
    };

    for (label, error) in report.failures() {
        warn!(file = label, %error, "save failed");
    }
    if report.is_success() {
        info!(users = state.users.len(), orders = state.orders.len(), "save complete");
    }

    report
}

/// Accounts reachable from users, each once, in user order
fn linked_accounts(state: &AppState) -> Vec<&BankAccount> {
    let mut seen = HashSet::new();
    state
        .users
        .iter()
        .filter_map(|user| user.account)
        .filter(|key| seen.insert(*key))
        .filter_map(|key| state.bank.account(key))
        .collect()
}

fn inventory_rows(state: &AppState) -> Vec<InventoryRow> {
    state
        .users
        .iter()
        .filter_map(|user| match &user.role {
            Role::Seller {
                store_name,
                inventory,
            } => Some((store_name, inventory)),
            _ => None,
        })
        .flat_map(|(store_name, inventory)| {
            inventory.iter().map(move |item| InventoryRow {
                store_name: store_name.clone(),
                item: item.clone(),
            })
        })
        .collect()
}
