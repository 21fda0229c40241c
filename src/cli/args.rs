use crate::config::{DataPaths, DATA_DIR_ENV, DEFAULT_DATA_DIR};
use crate::types::AccountId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and maintain the shop and bank data files
#[derive(Parser, Debug)]
#[command(name = "shop-ledger")]
#[command(about = "Inspect and maintain the shop and bank data files", long_about = None)]
pub struct CliArgs {
    /// Directory holding the data files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = DATA_DIR_ENV,
        default_value = DEFAULT_DATA_DIR,
        global = true
    )]
    pub data_dir: PathBuf,

    /// What to do with the data directory
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load every file and print a summary
    Check,

    /// Load every file and write it back in the canonical format
    Normalize,

    /// List recent transactions for one account
    Transactions {
        /// Account identifier
        #[arg(long = "account", value_name = "ID")]
        account: AccountId,

        /// How many days back to look
        #[arg(long = "days", value_name = "N", default_value_t = 30)]
        days: u32,
    },
}

impl CliArgs {
    /// File locations under `--data-dir`
    pub fn data_paths(&self) -> DataPaths {
        DataPaths::new(&self.data_dir)
    }
}
