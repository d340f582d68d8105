use crate::error::AppError;
use crate::models::{BalanceRecord, BalanceSummary, StatementRecord, StatementRow, DISPLAY_DATE_FORMAT};
use rust_decimal::Decimal;
use std::io::Write;

/// How reports are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Aligned columns for the console.
    #[default]
    Table,
    /// Comma-separated rows with a header.
    Csv,
}

fn pounds(amount: Decimal) -> String {
    format!("£{:.2}", amount.round_dp(2))
}

/// Writes one line per account: name, whether it owes or is owed, and how much.
pub fn write_balances<W: Write>(out: &mut W, summaries: &[BalanceSummary<'_>], format: Format) -> Result<(), AppError> {
    match format {
        Format::Table => {
            for summary in summaries {
                writeln!(out, "{:<11}{:<10}{:<10}", summary.name, summary.verb(), pounds(summary.amount))?;
            }
            writeln!(out)?;
        }
        Format::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for summary in summaries {
                wtr.serialize(BalanceRecord::from(summary))?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Writes an account's statement, one line per transaction.
pub fn write_statement<W: Write>(out: &mut W, name: &str, rows: &[StatementRow<'_>], format: Format) -> Result<(), AppError> {
    match format {
        Format::Table => {
            let width = rows.iter().map(|r| r.narrative.chars().count()).max().unwrap_or(0) + 3;
            writeln!(out, "Account: {}", name)?;
            for row in rows {
                writeln!(
                    out,
                    "{:<15} {:<width$} {:<15} {:>10}",
                    row.date.format(DISPLAY_DATE_FORMAT).to_string(),
                    row.narrative,
                    row.counterparty,
                    pounds(row.amount),
                    width = width
                )?;
            }
            writeln!(out)?;
        }
        Format::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for row in rows {
                wtr.serialize(StatementRecord::from(row))?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
