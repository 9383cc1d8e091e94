//! BAI2 record model: File → Group → Account → TransactionDetail.
//!
//! Required fields are plain values, optional ones are `Option`. Amounts are
//! integer minor units; direction lives on the type code, never in the sign
//! of a transaction amount.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Credit,
    Debit,
    Misc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Credit => "credit",
            Direction::Debit => "debit",
            Direction::Misc => "misc",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeCodeLevel {
    Status,
    Summary,
    Detail,
}

impl TypeCodeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCodeLevel::Status => "status",
            TypeCodeLevel::Summary => "summary",
            TypeCodeLevel::Detail => "detail",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeCode {
    pub code: String,
    pub transaction: Direction,
    pub level: TypeCodeLevel,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    Update,
    Deletion,
    Correction,
    TestOnly,
}

impl GroupStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(GroupStatus::Update),
            "2" => Some(GroupStatus::Deletion),
            "3" => Some(GroupStatus::Correction),
            "4" => Some(GroupStatus::TestOnly),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GroupStatus::Update => "update",
            GroupStatus::Deletion => "deletion",
            GroupStatus::Correction => "correction",
            GroupStatus::TestOnly => "test_only",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AsOfDateModifier {
    InterimPreviousDay,
    FinalPreviousDay,
    InterimSameDay,
    FinalSameDay,
}

impl AsOfDateModifier {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(AsOfDateModifier::InterimPreviousDay),
            "2" => Some(AsOfDateModifier::FinalPreviousDay),
            "3" => Some(AsOfDateModifier::InterimSameDay),
            "4" => Some(AsOfDateModifier::FinalSameDay),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AsOfDateModifier::InterimPreviousDay => "interim_previous_day",
            AsOfDateModifier::FinalPreviousDay => "final_previous_day",
            AsOfDateModifier::InterimSameDay => "interim_same_day",
            AsOfDateModifier::FinalSameDay => "final_same_day",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayAvailability {
    pub days: u32,
    pub amount: i64,
}

/// Funds type plus the availability payload some of the codes carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FundsType {
    Unknown,
    Immediate,
    OneDay,
    TwoOrMoreDays,
    Distributed {
        immediate: i64,
        one_day: i64,
        more_than_one_day: i64,
    },
    ValueDated {
        date: NaiveDate,
        time: Option<NaiveTime>,
    },
    DistributedByDays(Vec<DayAvailability>),
}

impl FundsType {
    pub fn code(&self) -> &'static str {
        match self {
            FundsType::Unknown => "Z",
            FundsType::Immediate => "0",
            FundsType::OneDay => "1",
            FundsType::TwoOrMoreDays => "2",
            FundsType::Distributed { .. } => "S",
            FundsType::ValueDated { .. } => "V",
            FundsType::DistributedByDays(_) => "D",
        }
    }

    /// Availability column text; empty for the codes without a payload.
    pub fn availability(&self) -> String {
        match self {
            FundsType::Distributed {
                immediate,
                one_day,
                more_than_one_day,
            } => format!("0:{immediate};1:{one_day};2:{more_than_one_day}"),
            FundsType::ValueDated { date, time } => match time {
                Some(t) => format!("{} {}", date.format("%Y-%m-%d"), t.format("%H:%M")),
                None => date.format("%Y-%m-%d").to_string(),
            },
            FundsType::DistributedByDays(items) => items
                .iter()
                .map(|d| format!("{}:{}", d.days, d.amount))
                .collect::<Vec<_>>()
                .join(";"),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileHeader {
    pub sender_id: String,
    pub receiver_id: String,
    pub creation_date: NaiveDate,
    pub creation_time: Option<NaiveTime>,
    pub file_id: String,
    pub physical_record_length: Option<u32>,
    pub block_size: Option<u32>,
    pub version_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileTrailer {
    pub control_total: i64,
    pub group_count: u32,
    pub record_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupHeader {
    pub ultimate_receiver_id: Option<String>,
    pub originator_id: String,
    pub group_status: Option<GroupStatus>,
    pub as_of_date: Option<NaiveDate>,
    pub as_of_time: Option<NaiveTime>,
    pub currency: Option<String>,
    pub as_of_date_modifier: Option<AsOfDateModifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupTrailer {
    pub control_total: i64,
    pub account_count: u32,
    pub record_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub type_code: TypeCode,
    /// Signed: status codes report balances, which may be negative.
    pub amount: Option<i64>,
    pub item_count: Option<u32>,
    pub funds_type: FundsType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountHeader {
    pub customer_account_number: String,
    pub currency: Option<String>,
    pub summaries: Vec<AccountSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDetail {
    pub type_code: TypeCode,
    pub amount: u64,
    pub funds_type: FundsType,
    pub bank_reference: Option<String>,
    pub customer_reference: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountTrailer {
    pub control_total: i64,
    pub record_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub header: AccountHeader,
    pub transactions: Vec<TransactionDetail>,
    pub trailer: AccountTrailer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub header: GroupHeader,
    pub accounts: Vec<Account>,
    pub trailer: GroupTrailer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bai2File {
    pub header: FileHeader,
    pub groups: Vec<Group>,
    pub trailer: FileTrailer,
}
