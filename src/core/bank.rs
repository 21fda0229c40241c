//! Bank module
//!
//! The `Bank` owns every `BankAccount` in an arena and keeps a customer
//! registry of keys into it. Users hold the same keys, so there is exactly one
//! copy of each balance no matter which path reaches it.

use crate::types::{AccountId, AccountKey, BankAccount};

/// Account arena plus customer registry
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<BankAccount>,
    customers: Vec<AccountKey>,
}

impl Bank {
    /// Create a bank with no accounts
    pub fn new() -> Self {
        Bank::default()
    }

    /// Move `account` into the arena and return its key
    ///
    /// The account is not a customer until `register_customer` is called.
    pub fn add_account(&mut self, account: BankAccount) -> AccountKey {
        self.accounts.push(account);
        AccountKey(self.accounts.len() - 1)
    }

    /// Add `key` to the customer registry
    ///
    /// Returns `false` if the key is unknown or already registered.
    pub fn register_customer(&mut self, key: AccountKey) -> bool {
        if key.0 >= self.accounts.len() || self.customers.contains(&key) {
            return false;
        }
        self.customers.push(key);
        true
    }

    /// The account behind `key`, registered or not
    pub fn account(&self, key: AccountKey) -> Option<&BankAccount> {
        self.accounts.get(key.0)
    }

    /// Mutable access to the account behind `key`
    pub fn account_mut(&mut self, key: AccountKey) -> Option<&mut BankAccount> {
        self.accounts.get_mut(key.0)
    }

    /// Look up a registered customer's account by identifier
    pub fn find_account(&self, id: AccountId) -> Option<AccountKey> {
        self.customers
            .iter()
            .copied()
            .find(|key| self.accounts[key.0].id == id)
    }

    /// Registered customer accounts in registration order
    pub fn customers(&self) -> impl Iterator<Item = &BankAccount> + '_ {
        self.customers.iter().map(|key| &self.accounts[key.0])
    }

    /// Number of registered customers
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Number of accounts in the arena, registered or not
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}
