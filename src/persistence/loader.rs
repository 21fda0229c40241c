//! Load orchestration and cross-file linking
//!
//! Files are read in a fixed order because each step uses what the previous
//! one built:
//!
//! 1. Bank accounts go into the bank arena and an owner-name index.
//! 2. Users are read; a user whose name matches an account owner has that
//!    account registered as a bank customer. Buyers and Sellers also get the
//!    account's key; Admins never hold an account.
//! 3. Inventory rows are appended to the Seller whose store name matches.
//!    Rows for unknown stores are dropped.
//! 4. Orders are read as-is; they are never linked.
//!
//! A missing or unreadable file leaves its step empty and loading continues.

use crate::config::DataPaths;
use crate::core::AppState;
use crate::io::codec::{AccountCodec, InventoryCodec, OrderCodec, UserCodec};
use crate::io::{FileStore, ReadOutcome};
use crate::types::AccountKey;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Row counts for one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSummary {
    /// Rows decoded into records
    pub decoded: usize,
    /// Rows dropped as malformed
    pub skipped: usize,
    /// The file was missing or could not be opened
    pub unavailable: bool,
}

impl FileSummary {
    fn of<T>(outcome: &ReadOutcome<T>) -> Self {
        FileSummary {
            decoded: outcome.records.len(),
            skipped: outcome.skipped,
            unavailable: outcome.unavailable,
        }
    }
}

/// What happened during a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// bank_accounts.csv
    pub accounts: FileSummary,
    /// users.csv
    pub users: FileSummary,
    /// inventory.csv
    pub inventory: FileSummary,
    /// orders.csv
    pub orders: FileSummary,
    /// Owner names seen on more than one account row; the last row won
    pub duplicate_account_names: Vec<String>,
    /// Buyers and Sellers left without an account
    pub unlinked_users: usize,
    /// Inventory rows whose store matched no Seller
    pub orphan_inventory: usize,
    /// Orders materialized as placeholders
    pub placeholder_orders: usize,
}

impl LoadReport {
    /// Total rows skipped across all four files
    pub fn skipped_rows(&self) -> usize {
        self.accounts.skipped + self.users.skipped + self.inventory.skipped + self.orders.skipped
    }
}

/// Load every collection file and link users to accounts and inventory
pub fn load_all(paths: &DataPaths) -> (AppState, LoadReport) {
    let mut state = AppState::new();
    let mut report = LoadReport::default();

    let owners = load_accounts(paths, &mut state, &mut report);
    load_users(paths, &owners, &mut state, &mut report);
    load_inventory(paths, &mut state, &mut report);
    load_orders(paths, &mut state, &mut report);

    info!(
        users = state.users.len(),
        customers = state.bank.customer_count(),
        orders = state.orders.len(),
        skipped = report.skipped_rows(),
        "load complete"
    );

    (state, report)
}

fn load_accounts(
    paths: &DataPaths,
    state: &mut AppState,
    report: &mut LoadReport,
) -> HashMap<String, AccountKey> {
    let outcome = FileStore::<AccountCodec>::new(paths.accounts_file()).read_all();
    report.accounts = FileSummary::of(&outcome);

    let mut owners = HashMap::new();
    for account in outcome.records {
        let owner = account.owner.clone();
        let key = state.bank.add_account(account);

        if owners.insert(owner.clone(), key).is_some() {
            warn!(%owner, "duplicate account owner name, the later row wins");
            report.duplicate_account_names.push(owner);
        }
    }

    owners
}

fn load_users(
    paths: &DataPaths,
    owners: &HashMap<String, AccountKey>,
    state: &mut AppState,
    report: &mut LoadReport,
) {
    let outcome = FileStore::<UserCodec>::new(paths.users_file()).read_all();
    report.users = FileSummary::of(&outcome);

    for mut user in outcome.records {
        if let Some(&key) = owners.get(&user.name) {
            if !user.attach_account(key) {
                debug!(user = %user.name, "admin has a matching account, registering it unlinked");
            }
            state.bank.register_customer(key);
        } else if !user.is_admin() {
            debug!(user = %user.name, "no account for user");
            report.unlinked_users += 1;
        }
        state.users.push(user);
    }
}

fn load_inventory(paths: &DataPaths, state: &mut AppState, report: &mut LoadReport) {
    let outcome = FileStore::<InventoryCodec>::new(paths.inventory_file()).read_all();
    report.inventory = FileSummary::of(&outcome);

    let sellers: HashMap<String, usize> = state
        .users
        .iter()
        .enumerate()
        .filter_map(|(index, user)| user.store_name().map(|store| (store.to_string(), index)))
        .collect();

    for row in outcome.records {
        match sellers.get(&row.store_name) {
            Some(&index) => {
                state.users[index].add_item(row.item);
            }
            None => {
                debug!(store = %row.store_name, item = row.item.id, "dropping inventory for unknown store");
                report.orphan_inventory += 1;
            }
        }
    }
}

fn load_orders(paths: &DataPaths, state: &mut AppState, report: &mut LoadReport) {
    let outcome = FileStore::<OrderCodec>::new(paths.orders_file()).read_all();
    report.orders = FileSummary::of(&outcome);

    report.placeholder_orders = outcome
        .records
        .iter()
        .filter(|order| order.is_placeholder())
        .count();
    if report.placeholder_orders > 0 {
        warn!(count = report.placeholder_orders, "orders file has unreadable rows kept as placeholders");
    }

    state.orders = outcome.records;
}
