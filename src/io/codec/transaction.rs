//! Transaction log rows: `accountId,timestamp,type,amount,description`
//!
//! The timestamp is written as UTC calendar text; integer values are read as
//! epoch milliseconds. Commas inside the description become `;` on write, and
//! any columns past the fifth are folded back into the description on read.

use super::{format_amount, parse_amount, parse_number, require_fields, RecordCodec};
use crate::io::timestamp_codec::TimestampFormat;
use crate::io::tokenizer::{join, neutralize, Separator};
use crate::types::{AccountId, BankTransaction, StoreError, TransactionKind};

/// Codec for the transaction log
pub struct TransactionCodec;

impl RecordCodec for TransactionCodec {
    type Record = BankTransaction;

    const ENTITY: &'static str = "BankTransaction";

    fn encode(transaction: &BankTransaction) -> String {
        format!(
            "{},{},{},{},{}",
            transaction.account_id,
            TimestampFormat::TRANSACTION.encode_calendar(transaction.timestamp),
            neutralize(transaction.kind.as_str(), Separator::Field, Separator::SubField),
            format_amount(transaction.amount),
            neutralize(&transaction.description, Separator::Field, Separator::SubField),
        )
    }

    fn decode(fields: &[&str]) -> Result<BankTransaction, StoreError> {
        require_fields(fields, 5, Self::ENTITY)?;

        let account_id: AccountId = parse_number(fields[0], Self::ENTITY, "accountId")?;
        let amount = parse_amount(fields[3], Self::ENTITY, "amount")?;

        Ok(BankTransaction {
            account_id,
            timestamp: TimestampFormat::TRANSACTION.decode(fields[1]),
            kind: TransactionKind::from(fields[2]),
            amount,
            description: join(&fields[4..], Separator::SubField),
        })
    }
}
