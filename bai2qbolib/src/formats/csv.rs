//! CSV interchange between extraction and OFX emission. Headers:
//! Date,Description,Amount,Customer Account Number,Currency,BAI Code,Transaction,Level,Fund Type,Availability,Bank Reference,Customer Reference,Text

use crate::{
    error::{Bai2QboError, Result},
    extract::{SummaryRow, TransactionRow},
    traits::{ReadFormat, WriteFormat},
};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// One transaction as it appears in the CSV file: date and amount already rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvTransaction {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Customer Account Number")]
    pub customer_account_number: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "BAI Code")]
    pub bai_code: String,
    #[serde(rename = "Transaction")]
    pub transaction: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Fund Type")]
    pub fund_type: String,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "Bank Reference")]
    pub bank_reference: String,
    #[serde(rename = "Customer Reference")]
    pub customer_reference: String,
    #[serde(rename = "Text")]
    pub text: String,
}

impl CsvTransaction {
    /// Stamps the as-of date and the signed decimal amount; every other field passes through.
    pub fn decorate(row: &TransactionRow, as_of_date: &str) -> Self {
        Self {
            date: as_of_date.to_string(),
            description: row.description.clone(),
            amount: row.signed_amount(),
            customer_account_number: row.customer_account_number.clone(),
            currency: row.currency.clone(),
            bai_code: row.bai_code.clone(),
            transaction: row.direction.as_str().to_string(),
            level: row.level.as_str().to_string(),
            fund_type: row.funds_type.clone(),
            availability: row.availability.clone(),
            bank_reference: row.bank_reference.clone(),
            customer_reference: row.customer_reference.clone(),
            text: row.text.clone(),
        }
    }
}

pub fn decorate_all(rows: &[TransactionRow], as_of_date: &str) -> Vec<CsvTransaction> {
    rows.iter().map(|r| CsvTransaction::decorate(r, as_of_date)).collect()
}

#[derive(Serialize)]
struct CsvSummaryRow<'a> {
    #[serde(rename = "BAI Code")]
    bai_code: &'a str,
    #[serde(rename = "Level")]
    level: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: Option<i64>,
    #[serde(rename = "Count")]
    count: Option<u32>,
    #[serde(rename = "Fund Type")]
    fund_type: &'a str,
    #[serde(rename = "Availability")]
    availability: &'a str,
}

pub struct TransactionCsv;

impl ReadFormat for TransactionCsv {
    type Output = Vec<CsvTransaction>;

    fn read<R: BufRead>(r: R) -> Result<Vec<CsvTransaction>> {
        let mut rdr = ReaderBuilder::new().from_reader(r);
        let mut out = Vec::new();
        for rec in rdr.deserialize::<CsvTransaction>() {
            out.push(rec?);
        }
        Ok(out)
    }
}

impl WriteFormat for TransactionCsv {
    type Input = [CsvTransaction];

    fn write<W: Write>(w: W, rows: &[CsvTransaction]) -> Result<()> {
        if rows.is_empty() {
            return Err(Bai2QboError::EmptyResult("transaction list".into()));
        }
        let mut wrt = WriterBuilder::new().terminator(Terminator::Any(b'\n')).from_writer(w);
        for row in rows {
            wrt.serialize(row)?;
        }
        wrt.flush()?;
        Ok(())
    }
}

pub struct SummaryCsv;

impl WriteFormat for SummaryCsv {
    type Input = [SummaryRow];

    fn write<W: Write>(w: W, rows: &[SummaryRow]) -> Result<()> {
        let mut wrt = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(w);
        wrt.write_record([
            "BAI Code",
            "Level",
            "Description",
            "Amount",
            "Count",
            "Fund Type",
            "Availability",
        ])?;
        for s in rows {
            wrt.serialize(CsvSummaryRow {
                bai_code: &s.bai_code,
                level: s.level.as_str(),
                description: &s.description,
                amount: s.amount,
                count: s.item_count,
                fund_type: &s.funds_type,
                availability: &s.availability,
            })?;
        }
        wrt.flush()?;
        Ok(())
    }
}
