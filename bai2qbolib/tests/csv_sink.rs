mod common;

use bai2qbolib::{
    error::Bai2QboError,
    extract::extract,
    formats::{
        bai2::Bai2,
        csv::{decorate_all, CsvTransaction, SummaryCsv, TransactionCsv},
    },
    traits::{ReadFormat, WriteFormat},
};
use common::{account, date, detail, file, LONG_TEXT, SAMPLE};
use std::io::Cursor;

const HEADER: &str = "Date,Description,Amount,Customer Account Number,Currency,BAI Code,Transaction,Level,Fund Type,Availability,Bank Reference,Customer Reference,Text";

fn scenario_rows() -> Vec<CsvTransaction> {
    let f = file(
        Some(date(2024, 3, 1)),
        vec![account("9876543210", Some("USD"), vec![detail("409", 150075, "REF1", LONG_TEXT)])],
    );
    let x = extract(&f).expect("extract");
    decorate_all(&x.transactions, "03/01/2024")
}

#[test]
fn csv_write_scenario_row() {
    let rows = scenario_rows();
    assert_eq!(rows[0].date, "03/01/2024");
    assert_eq!(rows[0].amount, "-1500.75");
    assert_eq!(rows[0].bank_reference, "REF1");

    let mut out = Vec::new();
    TransactionCsv::write(&mut out, &rows).expect("write csv");
    let s = String::from_utf8(out).unwrap();

    let mut lines = s.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(
        lines.next(),
        Some("03/01/2024,Debit (Any Type),-1500.75,9876543210,USD,409,debit,detail,Z,,REF1,,PAYMENT TO VENDOR XYZ CORPORATION LONGER THAN THIRTY TWO CHARS")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn csv_write_has_no_bom_and_lf_endings() {
    let mut out = Vec::new();
    TransactionCsv::write(&mut out, &scenario_rows()).expect("write csv");
    assert!(out.starts_with(b"Date,"));
    assert!(!out.contains(&b'\r'));
    assert!(out.ends_with(b"\n"));
}

#[test]
fn csv_write_refuses_empty() {
    let mut out = Vec::new();
    let err = TransactionCsv::write(&mut out, &[]).expect_err("empty must fail");
    assert!(matches!(err, Bai2QboError::EmptyResult(_)));
    assert!(out.is_empty());
}

#[test]
fn csv_sample_write_then_read_back() {
    let f = Bai2::read(Cursor::new(SAMPLE)).expect("bai2 read");
    let x = extract(&f).expect("extract");
    let rows = decorate_all(&x.transactions, "03/01/2024");

    let mut out = Vec::new();
    TransactionCsv::write(&mut out, &rows).expect("write csv");
    // one header plus one line per row; the comma in the wire text is quoted
    assert_eq!(String::from_utf8_lossy(&out).lines().count(), rows.len() + 1);

    let back = TransactionCsv::read(Cursor::new(out)).expect("read csv");
    assert_eq!(back, rows);
    assert_eq!(back[2].text, "INCOMING WIRE, REF 42");
    assert_eq!(back[3].amount, "-0.05");
    assert_eq!(back[0].amount, "2500.00");
}

#[test]
fn csv_summary_rows() {
    let f = Bai2::read(Cursor::new(SAMPLE)).expect("bai2 read");
    let x = extract(&f).expect("extract");

    let mut out = Vec::new();
    SummaryCsv::write(&mut out, &x.summaries).expect("write summary csv");
    let s = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = s.lines().collect();

    assert_eq!(lines[0], "BAI Code,Level,Description,Amount,Count,Fund Type,Availability");
    assert_eq!(lines[1], "010,status,Opening Ledger,500000,,Z,");
    assert_eq!(lines[2], "015,status,Closing Ledger,-12500,,Z,");
    assert_eq!(lines[3], "100,summary,Total Credits,250000,2,Z,");
    assert_eq!(lines.len(), 6);
}
