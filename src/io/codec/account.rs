//! Bank account rows: `id,owner,balance[,lastActivity]`

use super::{format_amount, parse_amount, parse_number, require_fields, RecordCodec};
use crate::io::timestamp_codec::TimestampFormat;
use crate::types::{AccountId, BankAccount, StoreError};

/// Codec for the bank accounts file
pub struct AccountCodec;

impl RecordCodec for AccountCodec {
    type Record = BankAccount;

    const ENTITY: &'static str = "BankAccount";

    fn encode(account: &BankAccount) -> String {
        let mut line = format!(
            "{},{},{}",
            account.id,
            account.owner,
            format_amount(account.balance())
        );
        if account.last_activity.is_known() {
            line.push(',');
            line.push_str(&TimestampFormat::ACCOUNT_ACTIVITY.encode_calendar(account.last_activity));
        }
        line
    }

    fn decode(fields: &[&str]) -> Result<BankAccount, StoreError> {
        require_fields(fields, 3, Self::ENTITY)?;

        let id: AccountId = parse_number(fields[0], Self::ENTITY, "id")?;
        let balance = parse_amount(fields[2], Self::ENTITY, "balance")?;
        let mut account = BankAccount::new(id, fields[1], balance)?;

        if let Some(activity) = fields.get(3).filter(|text| !text.is_empty()) {
            account.last_activity = TimestampFormat::ACCOUNT_ACTIVITY.decode(activity);
        }

        Ok(account)
    }
}
