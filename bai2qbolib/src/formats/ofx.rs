//! OFX 1.0.2 SGML writer for QBO bank statements.

use crate::{
    convert::{csv_date_to_ofx, ofx_datetime},
    error::{Bai2QboError, Result},
    formats::csv::CsvTransaction,
    traits::WriteFormat,
};
use chrono::NaiveDateTime;
use std::fmt::Write as FmtWrite;
use std::io::Write;

const NAME_CHARS: usize = 32;
const MEMO_CHARS: usize = 48;
const TZ_SUFFIX: &str = ".000[-4]";

const HEADER: &[&str] = &[
    "OFXHEADER:100",
    "DATA:OFXSGML",
    "VERSION:102",
    "SECURITY:NONE",
    "ENCODING:USASCII",
    "CHARSET:1252",
    "COMPRESSION:NONE",
    "OLDFILEUID:NONE",
    "NEWFILEUID:NONE",
];

/// Everything one QBO document needs besides the fixed tags.
#[derive(Debug, Clone)]
pub struct OfxStatement {
    pub bank_id: String,
    pub account_id: String,
    /// Used for DTSERVER, DTSTART and DTEND.
    pub generated_at: NaiveDateTime,
    pub transactions: Vec<CsvTransaction>,
}

pub struct Qbo;

impl WriteFormat for Qbo {
    type Input = OfxStatement;

    fn write<W: Write>(mut w: W, st: &OfxStatement) -> Result<()> {
        let doc = render(st)?;
        w.write_all(doc.as_bytes())?;
        w.flush()?;
        Ok(())
    }
}

/// Renders the full document; fails before producing output if any row date is bad.
pub fn render(st: &OfxStatement) -> Result<String> {
    if st.transactions.is_empty() {
        return Err(Bai2QboError::EmptyResult("OFX statement".into()));
    }

    let now = format!("{}{TZ_SUFFIX}", ofx_datetime(st.generated_at));
    let mut s = String::new();

    for line in HEADER {
        let _ = writeln!(s, "{line}");
    }
    let _ = writeln!(s);

    let _ = writeln!(s, "<OFX>");
    let _ = writeln!(s, "<SIGNONMSGSRSV1>");
    let _ = writeln!(s, "<SONRS>");
    write_status(&mut s);
    let _ = writeln!(s, "<DTSERVER>{now}");
    let _ = writeln!(s, "<LANGUAGE>ENG");
    let _ = writeln!(s, "<INTU.BID>02102");
    let _ = writeln!(s, "</SONRS>");
    let _ = writeln!(s, "</SIGNONMSGSRSV1>");

    let _ = writeln!(s, "<BANKMSGSRSV1>");
    let _ = writeln!(s, "<STMTTRNRS>");
    let _ = writeln!(s, "<TRNUID>0");
    write_status(&mut s);
    let _ = writeln!(s, "<STMTRS>");
    let _ = writeln!(s, "<CURDEF>USD");

    let _ = writeln!(s, "<BANKACCTFROM>");
    let _ = writeln!(s, "<BANKID>{}", st.bank_id);
    let _ = writeln!(s, "<ACCTID>{}", st.account_id);
    let _ = writeln!(s, "<ACCTTYPE>CHECKING");
    let _ = writeln!(s, "</BANKACCTFROM>");

    let _ = writeln!(s, "<BANKTRANLIST>");
    let _ = writeln!(s, "<DTSTART>{now}");
    let _ = writeln!(s, "<DTEND>{now}");

    let mut last_posted = String::new();
    for row in &st.transactions {
        last_posted = csv_date_to_ofx(&row.date)?;

        let _ = writeln!(s, "<STMTTRN>");
        let _ = writeln!(s, "<TRNTYPE>{}", row.transaction.to_uppercase());
        let _ = writeln!(s, "<DTPOSTED>{last_posted}{TZ_SUFFIX}");
        let _ = writeln!(s, "<TRNAMT>{}", row.amount);
        let _ = writeln!(s, "<FITID>{}", row.bank_reference);
        let _ = writeln!(s, "<NAME>{}", first_chars(&row.text, NAME_CHARS));
        let _ = writeln!(s, "<MEMO>{}", last_chars(&row.text, MEMO_CHARS));
        let _ = writeln!(s, "</STMTTRN>");
    }
    let _ = writeln!(s, "</BANKTRANLIST>");

    let _ = writeln!(s, "<LEDGERBAL>");
    let _ = writeln!(s, "<BALAMT>0.00");
    let _ = writeln!(s, "<DTASOF>{last_posted}{TZ_SUFFIX}");
    let _ = writeln!(s, "</LEDGERBAL>");

    let _ = writeln!(s, "</STMTRS>");
    let _ = writeln!(s, "</STMTTRNRS>");
    let _ = writeln!(s, "</BANKMSGSRSV1>");
    let _ = writeln!(s, "</OFX>");
    Ok(s)
}

fn write_status(s: &mut String) {
    let _ = writeln!(s, "<STATUS>");
    let _ = writeln!(s, "<CODE>0");
    let _ = writeln!(s, "<SEVERITY>INFO");
    let _ = writeln!(s, "<MESSAGE>OK");
    let _ = writeln!(s, "</STATUS>");
}

/// First `n` characters (not bytes).
pub fn first_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Last `n` characters (not bytes).
pub fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}
