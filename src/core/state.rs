//! Application state
//!
//! `AppState` is the context object handed to load, save and the business
//! layer. It owns the bank, the user collection and the order collection.

use crate::core::bank::Bank;
use crate::types::{AccountKey, BankAccount, Order, UserRecord};

/// Everything loaded from and saved to the data directory
#[derive(Debug, Default)]
pub struct AppState {
    /// Account arena and customer registry
    pub bank: Bank,
    /// Users in file order
    pub users: Vec<UserRecord>,
    /// Orders in file order, placeholders included
    pub orders: Vec<Order>,
}

impl AppState {
    /// An empty state with no users, orders or accounts
    pub fn new() -> Self {
        AppState::default()
    }

    /// User by exact name
    pub fn find_user(&self, name: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.name == name)
    }

    /// Mutable user by exact name
    pub fn find_user_mut(&mut self, name: &str) -> Option<&mut UserRecord> {
        self.users.iter_mut().find(|user| user.name == name)
    }

    /// The seller running `store_name`
    pub fn find_seller(&self, store_name: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|user| user.store_name() == Some(store_name))
    }

    /// The account linked to `user`, if any
    pub fn user_account(&self, user: &UserRecord) -> Option<&BankAccount> {
        user.account.and_then(|key| self.bank.account(key))
    }

    /// Mutable access to the account linked to the user named `name`
    pub fn user_account_mut(&mut self, name: &str) -> Option<&mut BankAccount> {
        let key = self.find_user(name)?.account?;
        self.bank.account_mut(key)
    }

    /// Give the user named `name` a new account
    ///
    /// The account is added to the bank, registered as a customer and linked
    /// to the user. Returns `None` if there is no such user or the user is an
    /// Admin.
    pub fn open_account(&mut self, name: &str, account: BankAccount) -> Option<AccountKey> {
        let index = self
            .users
            .iter()
            .position(|user| user.name == name && !user.is_admin())?;

        let key = self.bank.add_account(account);
        self.bank.register_customer(key);
        self.users[index].attach_account(key);
        Some(key)
    }

    /// Orders that stand in for unreadable rows
    pub fn placeholder_orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().filter(|order| order.is_placeholder())
    }
}
