//! Money and date formatting between BAI2, CSV and OFX encodings.

use crate::{
    error::{Bai2QboError, Result},
    model::Direction,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

pub const CSV_DATE: &str = "%m/%d/%Y";
pub const OFX_DATETIME: &str = "%Y%m%d%H%M%S";

/// Minor units to a two-decimal string: `12345` → `"123.45"`, `5` → `"0.05"`.
pub fn decorate_amount(minor: u64) -> String {
    Decimal::from_i128_with_scale(i128::from(minor), 2).to_string()
}

/// Decorated amount with the sign convention: debits negative, everything else unsigned.
pub fn signed_amount(minor: u64, direction: Direction) -> String {
    let s = decorate_amount(minor);
    match direction {
        Direction::Debit => format!("-{s}"),
        Direction::Credit | Direction::Misc => s,
    }
}

pub fn csv_date(d: NaiveDate) -> String {
    d.format(CSV_DATE).to_string()
}

pub fn parse_csv_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, CSV_DATE).map_err(|_| Bai2QboError::DateParse(s.to_string()))
}

pub fn hh_mm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn ofx_datetime(dt: NaiveDateTime) -> String {
    dt.format(OFX_DATETIME).to_string()
}

/// Calendar day flattened to midnight, `YYYYMMDD000000`.
pub fn ofx_date(d: NaiveDate) -> String {
    ofx_datetime(d.and_time(NaiveTime::MIN))
}

/// `MM/DD/YYYY` straight to the OFX timestamp form.
pub fn csv_date_to_ofx(s: &str) -> Result<String> {
    parse_csv_date(s).map(ofx_date)
}
