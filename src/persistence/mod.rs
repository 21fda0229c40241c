//! Persistence entry points
//!
//! `Persistence` is what the business layer talks to. It loads and saves the
//! four collection files as a unit and appends to and queries the transaction
//! log independently of that cycle.
//!
//! ```no_run
//! use shop_ledger_store::config::DataPaths;
//! use shop_ledger_store::persistence::Persistence;
//!
//! let store = Persistence::new(DataPaths::new("data"));
//! let (mut state, report) = store.load_all();
//! println!("{} users, {} rows skipped", state.users.len(), report.skipped_rows());
//!
//! state.orders.clear();
//! let saved = store.save_all(&state);
//! assert!(saved.is_success());
//! ```

pub mod loader;
pub mod saver;

pub use loader::{FileSummary, LoadReport};
pub use saver::SaveReport;

use crate::config::DataPaths;
use crate::core::AppState;
use crate::io::codec::TransactionCodec;
use crate::io::FileStore;
use crate::types::{AccountId, BankTransaction, StoreError};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Facade over the data directory
#[derive(Debug, Clone)]
pub struct Persistence {
    paths: DataPaths,
}

impl Persistence {
    /// A store over the files in `paths`
    pub fn new(paths: DataPaths) -> Self {
        Persistence { paths }
    }

    /// Locations of the files this store reads and writes
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Load users, orders and the bank registry; never fails
    pub fn load_all(&self) -> (AppState, LoadReport) {
        loader::load_all(&self.paths)
    }

    /// Rewrite the account, user, inventory and order files
    pub fn save_all(&self, state: &AppState) -> SaveReport {
        saver::save_all(&self.paths, state)
    }

    /// Append one entry to the transaction log
    ///
    /// # Errors
    ///
    /// `WriteFailed` if the log cannot be opened or written. The failure is
    /// also logged.
    pub fn append_transaction(&self, transaction: &BankTransaction) -> Result<(), StoreError> {
        self.paths.ensure_data_dir()?;
        self.transaction_log()
            .append_one(transaction)
            .inspect_err(|error| warn!(%error, account = transaction.account_id, "transaction not logged"))
    }

    /// Entries for `account_id` recorded at or after `since`, in file order
    ///
    /// Entries with an unknown timestamp never match. A missing log yields
    /// no entries.
    pub fn read_transactions_for_account(
        &self,
        account_id: AccountId,
        since: DateTime<Utc>,
    ) -> Vec<BankTransaction> {
        let reader = match self.transaction_log().reader() {
            Ok(reader) => reader,
            Err(StoreError::FileNotFound { .. }) => return Vec::new(),
            Err(error) => {
                warn!(%error, "transaction log unreadable");
                return Vec::new();
            }
        };

        reader
            .filter_map(|row| match row.result {
                Ok(transaction) => Some(transaction),
                Err(error) => {
                    warn!(line = row.line, %error, "skipping malformed transaction");
                    None
                }
            })
            .filter(|transaction| {
                transaction.account_id == account_id && transaction.timestamp.is_since(since)
            })
            .collect()
    }

    fn transaction_log(&self) -> FileStore<TransactionCodec> {
        FileStore::new(self.paths.transactions_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Timestamp, TransactionKind};
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    fn store() -> (TempDir, Persistence) {
        let dir = TempDir::new().unwrap();
        let store = Persistence::new(DataPaths::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn test_append_then_read_back() {
        let (_dir, store) = store();
        let deposit = BankTransaction::new(7, TransactionKind::Deposit, Decimal::new(20, 0), "cash");
        let other = BankTransaction::new(8, TransactionKind::Deposit, Decimal::new(5, 0), "cash");

        store.append_transaction(&deposit).unwrap();
        store.append_transaction(&other).unwrap();

        let since = Utc::now() - Duration::days(1);
        assert_eq!(store.read_transactions_for_account(7, since), vec![deposit]);
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let (_dir, store) = store();
        assert!(store.read_transactions_for_account(7, Utc::now()).is_empty());
    }

    #[test]
    fn test_cutoff_applies_to_both_timestamp_forms() {
        let (_dir, store) = store();
        fs::write(
            store.paths().transactions_file(),
            "7,1714550400000,Credit,1.00,epoch form\n\
             7,2024-05-03 12:00:00,Debit,2.00,calendar form\n\
             7,2024-04-01 00:00:00,Debit,3.00,too old\n\
             7,UnknownTime,Credit,4.00,no time\n\
             7,not-a-row\n",
        )
        .unwrap();

        let since = Utc.with_ymd_and_hms(2024, 4, 30, 0, 0, 0).unwrap();
        let found = store.read_transactions_for_account(7, since);

        let descriptions: Vec<&str> = found.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["epoch form", "calendar form"]);
        assert!(found.iter().all(|t| t.timestamp.is_known()));
        assert!(found[0].timestamp < found[1].timestamp);
    }

    #[test]
    fn test_entry_at_cutoff_is_included() {
        let (_dir, store) = store();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut entry = BankTransaction::new(7, TransactionKind::Credit, Decimal::ONE, "edge");
        entry.timestamp = Timestamp::from_datetime(at);

        store.append_transaction(&entry).unwrap();
        assert_eq!(store.read_transactions_for_account(7, at).len(), 1);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_dir, store) = store();
        let (mut state, _) = store.load_all();
        state.users.push(crate::types::UserRecord::buyer("Ann", "pw"));

        assert!(store.save_all(&state).is_success());
        let (reloaded, report) = store.load_all();

        assert_eq!(reloaded.users, state.users);
        assert_eq!(report.skipped_rows(), 0);
    }
}
