//! Subcommand implementations
//!
//! Each command talks to the data directory through `Persistence` and writes
//! its human-readable output to the supplied writer, so it can be driven from
//! `main` with stdout or from tests with a buffer.

use crate::cli::args::Command;
use crate::core::AppState;
use crate::io::codec::format_amount;
use crate::io::TimestampFormat;
use crate::persistence::{LoadReport, Persistence};
use crate::types::{AccountId, RoleTag, StoreError, Timestamp};
use chrono::Utc;
use rust_decimal::Decimal;
use std::io::Write;

/// Run `command` against `store`
///
/// # Errors
///
/// - `WriteFailed` if `normalize` could not rewrite a file (the first failure
///   is returned after every outcome has been printed)
/// - `IoError` if the output cannot be written
pub fn run(command: &Command, store: &Persistence, output: &mut dyn Write) -> Result<(), StoreError> {
    match command {
        Command::Check => check(store, output),
        Command::Normalize => normalize(store, output),
        Command::Transactions { account, days } => transactions(store, *account, *days, output),
    }
}

fn check(store: &Persistence, output: &mut dyn Write) -> Result<(), StoreError> {
    let (state, report) = store.load_all();
    write_summary(&state, &report, output)
}

fn normalize(store: &Persistence, output: &mut dyn Write) -> Result<(), StoreError> {
    let (state, report) = store.load_all();
    if report.skipped_rows() > 0 {
        writeln!(output, "dropping {} unreadable rows", report.skipped_rows())?;
    }

    let saved = store.save_all(&state);
    for (label, result) in saved.entries() {
        match result {
            Ok(rows) => writeln!(output, "{label}: {rows} rows written")?,
            Err(error) => writeln!(output, "{label}: FAILED ({error})")?,
        }
    }

    match saved.failures().first() {
        Some((_, error)) => Err((*error).clone()),
        None => Ok(()),
    }
}

fn transactions(
    store: &Persistence,
    account: AccountId,
    days: u32,
    output: &mut dyn Write,
) -> Result<(), StoreError> {
    let since = Timestamp::cutoff_days_before(Utc::now(), days);
    let entries = store.read_transactions_for_account(account, since);

    let mut net = Decimal::ZERO;
    for entry in &entries {
        net = net
            .checked_add(entry.signed_amount())
            .ok_or(StoreError::arithmetic_overflow("net", "BankAccount", account))?;
        writeln!(
            output,
            "{}  {:<8}  {:>10}  {}",
            TimestampFormat::TRANSACTION.encode_calendar(entry.timestamp),
            entry.kind.as_str(),
            format_amount(entry.amount),
            entry.description
        )?;
    }
    writeln!(
        output,
        "{} transactions in the last {} days, net {}",
        entries.len(),
        days,
        format_amount(net)
    )?;
    Ok(())
}

fn write_summary(state: &AppState, report: &LoadReport, output: &mut dyn Write) -> Result<(), StoreError> {
    let count_role = |tag: RoleTag| state.users.iter().filter(|user| user.role_tag() == tag).count();
    let inventory: usize = state.users.iter().map(|user| user.inventory().len()).sum();

    writeln!(
        output,
        "users: {} (buyers {}, sellers {}, admins {})",
        state.users.len(),
        count_role(RoleTag::Buyer),
        count_role(RoleTag::Seller),
        count_role(RoleTag::Admin)
    )?;
    writeln!(
        output,
        "linked accounts: {} (unlinked users {})",
        state.bank.customer_count(),
        report.unlinked_users
    )?;
    writeln!(
        output,
        "inventory items: {} (orphaned rows {})",
        inventory, report.orphan_inventory
    )?;
    writeln!(
        output,
        "orders: {} (placeholders {})",
        state.orders.len(),
        report.placeholder_orders
    )?;
    writeln!(output, "skipped rows: {}", report.skipped_rows())?;
    if !report.duplicate_account_names.is_empty() {
        writeln!(
            output,
            "duplicate account owners: {}",
            report.duplicate_account_names.join(", ")
        )?;
    }
    Ok(())
}
