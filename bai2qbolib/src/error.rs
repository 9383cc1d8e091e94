//! Single error type for the public API.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Bai2QboError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid UTF-8 in {}", .0.display())]
    Encoding(PathBuf),

    #[error("malformed BAI2 record: {0}")]
    MalformedRecord(String),

    #[error("no transactions in {0}")]
    EmptyResult(String),

    #[error("bad date {0:?}, expected MM/DD/YYYY")]
    DateParse(String),

    #[error("group has no as-of date")]
    MissingAsOfDate,
}

pub type Result<T> = std::result::Result<T, Bai2QboError>;

pub(crate) fn malformed(line: usize, msg: impl std::fmt::Display) -> Bai2QboError {
    Bai2QboError::MalformedRecord(format!("line {line}: {msg}"))
}
