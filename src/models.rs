use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::rc::Rc;

/// Date layout used when a date is shown to the user.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// A single transfer between two accounts. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub from: String,
    pub to: String,
    pub narrative: String,
    pub amount: Decimal,
}

/// The transactions touching one named account, in ingestion order.
/// Fields are private; only the ledger appends to them.
#[derive(Debug, PartialEq)]
pub struct Account {
    name: String,
    pub(crate) incoming: Vec<Rc<Transaction>>,
    pub(crate) outgoing: Vec<Rc<Transaction>>,
    /// Both directions in ingestion order, each transaction once.
    pub(crate) history: Vec<Rc<Transaction>>,
}

impl Account {
    /// Creates an account with no transactions.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transactions where this account is the receiver.
    pub fn incoming(&self) -> &[Rc<Transaction>] {
        &self.incoming
    }

    /// Transactions where this account is the sender.
    pub fn outgoing(&self) -> &[Rc<Transaction>] {
        &self.outgoing
    }

    /// Every transaction touching this account, in ingestion order.
    /// A self-transfer appears once.
    pub fn history(&self) -> &[Rc<Transaction>] {
        &self.history
    }
}

/// One line of the all-accounts report.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSummary<'a> {
    pub name: &'a str,
    /// True when the net balance is below zero.
    pub owes: bool,
    /// Absolute value of the net balance.
    pub amount: Decimal,
}

impl BalanceSummary<'_> {
    pub fn verb(&self) -> &'static str {
        if self.owes {
            "owes"
        } else {
            "is owed"
        }
    }
}

/// One line of a single-account statement.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow<'a> {
    pub date: NaiveDate,
    pub narrative: &'a str,
    /// The `to` field of the underlying transaction, whatever the direction.
    pub counterparty: &'a str,
    pub amount: Decimal,
}

/// Formats a Decimal with exactly two decimal places.
fn serialize_with_two_decimals<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted_value = format!("{:.2}", value.round_dp(2));
    serializer.serialize_str(&formatted_value)
}

fn serialize_display_date<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(DISPLAY_DATE_FORMAT).to_string())
}

/// A balance line for CSV output.
#[derive(Debug, Serialize)]
pub struct BalanceRecord<'a> {
    pub account: &'a str,
    pub owes: bool,
    #[serde(serialize_with = "serialize_with_two_decimals")]
    pub amount: Decimal,
}

impl<'a> From<&BalanceSummary<'a>> for BalanceRecord<'a> {
    fn from(summary: &BalanceSummary<'a>) -> Self {
        Self {
            account: summary.name,
            owes: summary.owes,
            amount: summary.amount,
        }
    }
}

/// A statement line for CSV output.
#[derive(Debug, Serialize)]
pub struct StatementRecord<'a> {
    #[serde(serialize_with = "serialize_display_date")]
    pub date: NaiveDate,
    pub narrative: &'a str,
    pub counterparty: &'a str,
    #[serde(serialize_with = "serialize_with_two_decimals")]
    pub amount: Decimal,
}

impl<'a> From<&StatementRow<'a>> for StatementRecord<'a> {
    fn from(row: &StatementRow<'a>) -> Self {
        Self {
            date: row.date,
            narrative: row.narrative,
            counterparty: row.counterparty,
            amount: row.amount,
        }
    }
}
