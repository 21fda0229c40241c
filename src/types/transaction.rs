//! Bank transaction log entries
//!
//! The type tag vocabulary differs between producers ("DEPOSIT"/"WITHDRAW"
//! from the banking menu, "Credit"/"Debit" from the cash-flow history), so
//! tags are matched literally and anything else is preserved as `Other`.

use super::account::AccountId;
use super::timestamp::Timestamp;
use rust_decimal::Decimal;

/// Type tag of a logged transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// `DEPOSIT`: funds credited
    Deposit,
    /// `WITHDRAW`: funds debited
    Withdraw,
    /// `Credit`: funds credited
    Credit,
    /// `Debit`: funds debited
    Debit,
    /// Any other tag, kept verbatim
    Other(String),
}

impl TransactionKind {
    /// The literal persisted for this tag
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdraw => "WITHDRAW",
            TransactionKind::Credit => "Credit",
            TransactionKind::Debit => "Debit",
            TransactionKind::Other(tag) => tag,
        }
    }

    /// Whether the tag denotes money leaving the account
    pub fn is_outflow(&self) -> bool {
        matches!(self, TransactionKind::Withdraw | TransactionKind::Debit)
    }
}

impl From<&str> for TransactionKind {
    fn from(tag: &str) -> Self {
        match tag {
            "DEPOSIT" => TransactionKind::Deposit,
            "WITHDRAW" => TransactionKind::Withdraw,
            "Credit" => TransactionKind::Credit,
            "Debit" => TransactionKind::Debit,
            other => TransactionKind::Other(other.to_string()),
        }
    }
}

/// One entry in the append-only transaction log
#[derive(Debug, Clone, PartialEq)]
pub struct BankTransaction {
    /// Account the entry belongs to (not validated against the bank)
    pub account_id: AccountId,
    /// When the entry was recorded
    pub timestamp: Timestamp,
    /// Type tag
    pub kind: TransactionKind,
    /// Amount as stored; its sign is not meaningful on its own
    pub amount: Decimal,
    /// Free-text description
    pub description: String,
}

impl BankTransaction {
    /// Create a log entry stamped with the current time
    pub fn new(
        account_id: AccountId,
        kind: TransactionKind,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        BankTransaction {
            account_id,
            timestamp: Timestamp::now(),
            kind,
            amount,
            description: description.into(),
        }
    }

    /// Amount with the sign implied by the type tag
    ///
    /// Inflows are positive and outflows negative regardless of the stored
    /// sign. `Other` tags return the amount unchanged.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit | TransactionKind::Credit => self.amount.abs(),
            TransactionKind::Withdraw | TransactionKind::Debit => -self.amount.abs(),
            TransactionKind::Other(_) => self.amount,
        }
    }
}
