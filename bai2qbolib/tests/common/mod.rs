#![allow(dead_code)]

use bai2qbolib::{
    model::{
        Account, AccountHeader, AccountTrailer, Bai2File, FileHeader, FileTrailer, FundsType,
        Group, GroupHeader, GroupTrailer, TransactionDetail,
    },
    type_codes,
};
use chrono::{NaiveDate, NaiveTime};

pub const SAMPLE: &str = include_str!("../data/sample.txt");

pub const LONG_TEXT: &str = "PAYMENT TO VENDOR XYZ CORPORATION LONGER THAN THIRTY TWO CHARS";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn detail(code: &str, amount: u64, bank_reference: &str, text: &str) -> TransactionDetail {
    TransactionDetail {
        type_code: type_codes::lookup(code).unwrap(),
        amount,
        funds_type: FundsType::Unknown,
        bank_reference: Some(bank_reference.to_string()),
        customer_reference: None,
        text: text.to_string(),
    }
}

pub fn account(number: &str, currency: Option<&str>, transactions: Vec<TransactionDetail>) -> Account {
    Account {
        header: AccountHeader {
            customer_account_number: number.to_string(),
            currency: currency.map(str::to_string),
            summaries: Vec::new(),
        },
        transactions,
        trailer: AccountTrailer {
            control_total: 0,
            record_count: 0,
        },
    }
}

pub fn file(as_of_date: Option<NaiveDate>, accounts: Vec<Account>) -> Bai2File {
    Bai2File {
        header: FileHeader {
            sender_id: "122099999".into(),
            receiver_id: "123456789".into(),
            creation_date: date(2024, 3, 1),
            creation_time: NaiveTime::from_hms_opt(8, 0, 0),
            file_id: "FILE01".into(),
            physical_record_length: None,
            block_size: None,
            version_number: "2".into(),
        },
        groups: vec![Group {
            header: GroupHeader {
                ultimate_receiver_id: None,
                originator_id: "122099999".into(),
                group_status: None,
                as_of_date,
                as_of_time: None,
                currency: Some("USD".into()),
                as_of_date_modifier: None,
            },
            accounts,
            trailer: GroupTrailer {
                control_total: 0,
                account_count: 0,
                record_count: 0,
            },
        }],
        trailer: FileTrailer {
            control_total: 0,
            group_count: 1,
            record_count: 0,
        },
    }
}

/// BAI2 text for a single-account statement.
pub fn bai2_text(as_of: &str, account: &str, details: &[&str]) -> String {
    let mut s = String::new();
    s.push_str("01,122099999,123456789,240301,0800,FILE01,80,,2/\n");
    s.push_str(&format!("02,123456789,122099999,1,{as_of},0800,USD,2/\n"));
    s.push_str(&format!("03,{account},USD,010,500000,,/\n"));
    for d in details {
        s.push_str(d);
        s.push('\n');
    }
    s.push_str("49,0,2/\n98,0,1,4/\n99,0,1,6/\n");
    s
}
