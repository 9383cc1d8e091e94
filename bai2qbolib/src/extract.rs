//! Flattens a parsed BAI2 file into transaction rows and account-summary rows.

use crate::{
    convert::{csv_date, hh_mm, signed_amount},
    error::{Bai2QboError, Result},
    model::{
        Account, AccountHeader, AccountSummary, Bai2File, Direction, FileHeader, GroupHeader,
        TransactionDetail, TypeCodeLevel,
    },
};
use chrono::NaiveDate;
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: u64,
    pub customer_account_number: String,
    pub currency: String,
    pub bai_code: String,
    pub direction: Direction,
    pub level: TypeCodeLevel,
    pub funds_type: String,
    pub availability: String,
    pub bank_reference: String,
    pub customer_reference: String,
    pub text: String,
}

impl TransactionRow {
    pub fn signed_amount(&self) -> String {
        signed_amount(self.amount, self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub bai_code: String,
    pub level: TypeCodeLevel,
    pub description: String,
    pub amount: Option<i64>,
    pub item_count: Option<u32>,
    pub funds_type: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeaderRow {
    pub sender_id: String,
    pub receiver_id: String,
    pub creation_date: String,
    pub creation_time: Option<String>,
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeaderRow {
    pub ultimate_receiver_id: Option<String>,
    pub originator_id: String,
    pub group_status: Option<String>,
    pub as_of_date: Option<String>,
    pub as_of_time: Option<String>,
    pub currency: Option<String>,
    pub as_of_date_modifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub file_header: FileHeaderRow,
    pub group_header: GroupHeaderRow,
    pub as_of_date: Option<NaiveDate>,
    pub transactions: Vec<TransactionRow>,
    pub summaries: Vec<SummaryRow>,
}

pub fn extract(file: &Bai2File) -> Result<Extraction> {
    let group = file
        .groups
        .first()
        .ok_or_else(|| Bai2QboError::MalformedRecord("file contains no group".into()))?;
    if file.groups.len() > 1 {
        warn!(
            "file {} has {} groups, only the first is converted",
            file.header.file_id,
            file.groups.len()
        );
    }

    let as_of_date = group.header.as_of_date;
    let group_currency = group.header.currency.as_deref();

    let mut transactions = Vec::new();
    let mut summaries = Vec::new();
    for account in &group.accounts {
        summaries.extend(account.header.summaries.iter().map(summary_row));
        transactions.extend(account_transactions(account, as_of_date, group_currency));
    }
    debug!(
        "extracted {} transaction(s) and {} summary row(s)",
        transactions.len(),
        summaries.len()
    );

    Ok(Extraction {
        file_header: file_header_row(&file.header),
        group_header: group_header_row(&group.header),
        as_of_date,
        transactions,
        summaries,
    })
}

fn account_transactions<'a>(
    account: &'a Account,
    date: Option<NaiveDate>,
    group_currency: Option<&'a str>,
) -> impl Iterator<Item = TransactionRow> + 'a {
    let header = &account.header;
    let currency = header
        .currency
        .as_deref()
        .or(group_currency)
        .unwrap_or_default();
    account
        .transactions
        .iter()
        .map(move |t| transaction_row(header, currency, date, t))
}

fn transaction_row(
    header: &AccountHeader,
    currency: &str,
    date: Option<NaiveDate>,
    t: &TransactionDetail,
) -> TransactionRow {
    let row = TransactionRow {
        date,
        description: t.type_code.description.clone(),
        amount: t.amount,
        customer_account_number: header.customer_account_number.clone(),
        currency: currency.to_string(),
        bai_code: t.type_code.code.clone(),
        direction: t.type_code.transaction,
        level: TypeCodeLevel::Detail,
        funds_type: t.funds_type.code().to_string(),
        availability: t.funds_type.availability(),
        bank_reference: t.bank_reference.clone().unwrap_or_default(),
        customer_reference: t.customer_reference.clone().unwrap_or_default(),
        text: t.text.clone(),
    };
    debug!("transaction row: {row:?}");
    row
}

fn summary_row(s: &AccountSummary) -> SummaryRow {
    SummaryRow {
        bai_code: s.type_code.code.clone(),
        level: s.type_code.level,
        description: s.type_code.description.clone(),
        amount: s.amount,
        item_count: s.item_count,
        funds_type: s.funds_type.code().to_string(),
        availability: s.funds_type.availability(),
    }
}

fn file_header_row(h: &FileHeader) -> FileHeaderRow {
    FileHeaderRow {
        sender_id: h.sender_id.clone(),
        receiver_id: h.receiver_id.clone(),
        creation_date: csv_date(h.creation_date),
        creation_time: h.creation_time.map(hh_mm),
        file_id: h.file_id.clone(),
    }
}

fn group_header_row(h: &GroupHeader) -> GroupHeaderRow {
    GroupHeaderRow {
        ultimate_receiver_id: h.ultimate_receiver_id.clone(),
        originator_id: h.originator_id.clone(),
        group_status: h.group_status.map(|s| s.name().to_string()),
        as_of_date: h.as_of_date.map(csv_date),
        as_of_time: h.as_of_time.map(hh_mm),
        currency: h.currency.clone(),
        as_of_date_modifier: h.as_of_date_modifier.map(|m| m.name().to_string()),
    }
}
