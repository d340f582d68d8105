use crate::error::RecordError;
use crate::models::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date layouts accepted in the date column, tried in order.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y"];

/// Parses one raw line, splitting it on `delimiter`.
pub fn parse_line(line: &str, delimiter: char) -> Result<Transaction, RecordError> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    parse_fields(&fields)
}

/// Validates the fields of one record (date, from, to, narrative, amount):
/// field count first, then date, then amount.
pub fn parse_fields(fields: &[&str]) -> Result<Transaction, RecordError> {
    let [date, from, to, narrative, amount] = fields else {
        return Err(RecordError::WrongFieldCount);
    };
    let date = parse_date(date).ok_or(RecordError::InvalidDate)?;
    let amount = Decimal::from_str(amount.trim()).map_err(|_| RecordError::InvalidAmount)?;

    Ok(Transaction {
        date,
        from: (*from).to_owned(),
        to: (*to).to_owned(),
        narrative: (*narrative).to_owned(),
        amount,
    })
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}
