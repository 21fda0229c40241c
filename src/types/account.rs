//! Bank account type
//!
//! A `BankAccount` is the record the bank registry and its owning user share.
//! The balance is kept private so that no code path can make it negative.

use super::error::StoreError;
use super::timestamp::Timestamp;
use rust_decimal::Decimal;

/// Bank account identifier, unique within the bank
pub type AccountId = u32;

/// Handle to an account slot in the bank's account arena
///
/// Users and the bank customer registry both hold keys into the same arena,
/// so a balance change made through either path is seen by the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountKey(pub(crate) usize);

impl AccountKey {
    /// Position of the account in the arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A customer's bank account
///
/// The owner name is the join key used to link the account to a user record
/// on load, so it must be unique across accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    /// Account identifier
    pub id: AccountId,

    /// Owner display name (join key to the user collection)
    pub owner: String,

    balance: Decimal,

    /// Instant of the last deposit or withdrawal, `UNKNOWN` if never recorded
    pub last_activity: Timestamp,
}

impl BankAccount {
    /// Create an account with the given opening balance
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` if `balance` is below zero.
    pub fn new(id: AccountId, owner: impl Into<String>, balance: Decimal) -> Result<Self, StoreError> {
        if balance.is_sign_negative() && !balance.is_zero() {
            return Err(StoreError::negative_amount("BankAccount", "balance", balance));
        }

        Ok(BankAccount {
            id,
            owner: owner.into(),
            balance,
            last_activity: Timestamp::UNKNOWN,
        })
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit funds to the account
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `ArithmeticOverflow` if the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), StoreError> {
        if amount <= Decimal::ZERO {
            return Err(StoreError::NonPositiveAmount { amount });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(StoreError::arithmetic_overflow("deposit", "BankAccount", self.id))?;
        self.last_activity = Timestamp::now();

        Ok(())
    }

    /// Debit funds from the account
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `InsufficientFunds` if `amount` exceeds the balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), StoreError> {
        if amount <= Decimal::ZERO {
            return Err(StoreError::NonPositiveAmount { amount });
        }
        if self.balance < amount {
            return Err(StoreError::insufficient_funds(self.id, self.balance, amount));
        }

        self.balance -= amount;
        self.last_activity = Timestamp::now();

        Ok(())
    }
}
