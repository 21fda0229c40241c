//! Data file locations
//!
//! ## Resolution order
//!
//! 1. `--data-dir` on the command line
//! 2. `SHOP_LEDGER_DATA_DIR` environment variable
//! 3. `./data`

use crate::types::StoreError;
use std::path::{Path, PathBuf};

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "SHOP_LEDGER_DATA_DIR";

/// Data directory used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "data";

/// Paths of every file in the data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    data_dir: PathBuf,
}

impl DataPaths {
    /// Paths under `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        DataPaths {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding every data file
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Bank accounts, one per linked user
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir.join("bank_accounts.csv")
    }

    /// Users of every role
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.csv")
    }

    /// Seller inventory keyed by store name
    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir.join("inventory.csv")
    }

    /// Orders with their embedded items
    pub fn orders_file(&self) -> PathBuf {
        self.data_dir.join("orders.csv")
    }

    /// The append-only transaction log
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir.join("transactions.csv")
    }

    /// Create the data directory if it does not exist yet
    ///
    /// # Errors
    ///
    /// `WriteFailed` if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| StoreError::write_failed(&self.data_dir, e))
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths::new(DEFAULT_DATA_DIR)
    }
}
