use crate::models::{Account, BalanceSummary, StatementRow, Transaction};
use rust_decimal::Decimal;
use std::rc::Rc;

/// Incoming total minus outgoing total. Positive means the account is owed money.
pub fn net_balance(account: &Account) -> Decimal {
    let incoming: Decimal = account.incoming().iter().map(|tx| tx.amount).sum();
    let outgoing: Decimal = account.outgoing().iter().map(|tx| tx.amount).sum();
    incoming - outgoing
}

pub fn summary(account: &Account) -> BalanceSummary<'_> {
    let net = net_balance(account);
    BalanceSummary {
        name: account.name(),
        owes: net < Decimal::ZERO,
        amount: net.abs(),
    }
}

/// The account's transactions in both directions, ordered by date.
///
/// The sort is stable over the ingestion-ordered history, so rows on the same
/// date keep the order they were read in. A self-transfer is listed once.
pub fn statement(account: &Account) -> Vec<StatementRow<'_>> {
    let mut transactions: Vec<&Rc<Transaction>> = account.history().iter().collect();
    transactions.sort_by_key(|tx| tx.date);

    transactions
        .into_iter()
        .map(|tx| StatementRow {
            date: tx.date,
            narrative: &tx.narrative,
            counterparty: &tx.to,
            amount: tx.amount,
        })
        .collect()
}
