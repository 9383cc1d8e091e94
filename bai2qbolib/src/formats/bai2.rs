//! BAI2 reader. Records: 01 file header, 02 group header, 03 account, 16 detail,
//! 49 account trailer, 88 continuation, 98 group trailer, 99 file trailer.

use crate::{
    error::{malformed, Bai2QboError, Result},
    model::{
        Account, AccountHeader, AccountSummary, AccountTrailer, AsOfDateModifier, Bai2File,
        DayAvailability, FileHeader, FileTrailer, FundsType, Group, GroupHeader, GroupStatus,
        GroupTrailer, TransactionDetail, TypeCode,
    },
    traits::ReadFormat,
    type_codes,
};
use chrono::{NaiveDate, NaiveTime};
use log::debug;
use std::io::BufRead;
use std::str::FromStr;

pub struct Bai2;

/// One logical record: a physical line plus any 88 continuations.
#[derive(Debug)]
struct Record {
    line: usize,
    code: String,
    body: String,
}

impl ReadFormat for Bai2 {
    type Output = Bai2File;

    fn read<R: BufRead>(r: R) -> Result<Bai2File> {
        let mut records = logical_records(r)?.into_iter();

        let first = records
            .next()
            .ok_or_else(|| Bai2QboError::MalformedRecord("empty BAI2 input".into()))?;
        if first.code != "01" {
            return Err(malformed(first.line, format!("expected 01 file header, got {}", first.code)));
        }
        let header = file_header(&first)?;

        let mut groups = Vec::new();
        let trailer = loop {
            let rec = records.next().ok_or_else(|| {
                Bai2QboError::MalformedRecord("unexpected end of input: missing 99 file trailer".into())
            })?;
            match rec.code.as_str() {
                "02" => groups.push(read_group(&rec, &mut records)?),
                "99" => break file_trailer(&rec)?,
                other => return Err(malformed(rec.line, format!("unexpected {other} record at file level"))),
            }
        };

        if let Some(extra) = records.next() {
            return Err(malformed(extra.line, "record after 99 file trailer"));
        }

        debug!(
            "parsed BAI2 file {} from {} with {} group(s)",
            header.file_id,
            header.sender_id,
            groups.len()
        );
        Ok(Bai2File { header, groups, trailer })
    }
}

fn logical_records<R: BufRead>(r: R) -> Result<Vec<Record>> {
    let mut out: Vec<Record> = Vec::new();
    for (idx, line) in r.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let n = idx + 1;
        let (code, body) = match line.split_once(',') {
            Some((c, b)) => (c.trim(), b),
            None => (line.trim_end_matches('/'), ""),
        };

        if code == "88" {
            let prev = out
                .last_mut()
                .ok_or_else(|| malformed(n, "88 continuation without a preceding record"))?;
            if prev.code == "16" && detail_text_started(&prev.body) {
                if prev.body.ends_with('/') {
                    prev.body.pop();
                }
                if !prev.body.ends_with(',') {
                    prev.body.push(' ');
                }
            } else if prev.body.ends_with('/') {
                prev.body.pop();
                prev.body.push(',');
            } else {
                prev.body.push(' ');
            }
            prev.body.push_str(body);
            continue;
        }

        out.push(Record {
            line: n,
            code: code.to_string(),
            body: body.to_string(),
        });
    }
    Ok(out)
}

/// True once a 16 body has gone past the customer reference, so anything
/// further belongs to the free text.
fn detail_text_started(body: &str) -> bool {
    let mut f = Fields::over(body, 0);
    f.next(); // type code
    f.next(); // amount
    if funds_type(&mut f).is_err() {
        return false;
    }
    f.next(); // bank reference
    f.next(); // customer reference
    f.rest.is_some()
}

fn read_group(rec: &Record, records: &mut impl Iterator<Item = Record>) -> Result<Group> {
    let header = group_header(rec)?;
    let mut accounts = Vec::new();
    let trailer = loop {
        let next = records.next().ok_or_else(|| malformed(rec.line, "group without 98 trailer"))?;
        match next.code.as_str() {
            "03" => accounts.push(read_account(&next, records)?),
            "98" => break group_trailer(&next)?,
            other => return Err(malformed(next.line, format!("unexpected {other} record inside group"))),
        }
    };
    Ok(Group { header, accounts, trailer })
}

fn read_account(rec: &Record, records: &mut impl Iterator<Item = Record>) -> Result<Account> {
    let header = account_header(rec)?;
    let mut transactions = Vec::new();
    let trailer = loop {
        let next = records.next().ok_or_else(|| malformed(rec.line, "account without 49 trailer"))?;
        match next.code.as_str() {
            "16" => transactions.push(transaction_detail(&next)?),
            "49" => break account_trailer(&next)?,
            other => return Err(malformed(next.line, format!("unexpected {other} record inside account"))),
        }
    };
    Ok(Account {
        header,
        transactions,
        trailer,
    })
}

/* ------------------------------ RECORDS --------------------------------- */

fn file_header(rec: &Record) -> Result<FileHeader> {
    let mut f = Fields::new(rec);
    Ok(FileHeader {
        sender_id: f.req("sender id")?.to_string(),
        receiver_id: f.req("receiver id")?.to_string(),
        creation_date: date(f.req("creation date")?, rec.line)?,
        creation_time: f.opt().map(|t| time(t, rec.line)).transpose()?,
        file_id: f.req("file id")?.to_string(),
        physical_record_length: f.opt().map(|v| number(v, "record length", rec.line)).transpose()?,
        block_size: f.opt().map(|v| number(v, "block size", rec.line)).transpose()?,
        version_number: f.req("version number")?.to_string(),
    })
}

fn group_header(rec: &Record) -> Result<GroupHeader> {
    let mut f = Fields::new(rec);
    let ultimate_receiver_id = f.opt().map(str::to_string);
    let originator_id = f.req("originator id")?.to_string();
    let group_status = f
        .opt()
        .map(|s| {
            GroupStatus::from_code(s).ok_or_else(|| malformed(rec.line, format!("group status {s}")))
        })
        .transpose()?;
    let as_of_date = f.opt().map(|d| date(d, rec.line)).transpose()?;
    let as_of_time = f.opt().map(|t| time(t, rec.line)).transpose()?;
    let currency = f.opt().map(str::to_string);
    let as_of_date_modifier = f
        .opt()
        .map(|s| {
            AsOfDateModifier::from_code(s)
                .ok_or_else(|| malformed(rec.line, format!("as-of-date modifier {s}")))
        })
        .transpose()?;

    Ok(GroupHeader {
        ultimate_receiver_id,
        originator_id,
        group_status,
        as_of_date,
        as_of_time,
        currency,
        as_of_date_modifier,
    })
}

fn account_header(rec: &Record) -> Result<AccountHeader> {
    let mut f = Fields::new(rec);
    let customer_account_number = f.req("customer account number")?.to_string();
    let currency = f.opt().map(str::to_string);

    let mut summaries = Vec::new();
    while let Some(code) = f.opt() {
        let type_code = type_code(code, rec.line)?;
        let amount = f.opt().map(|a| number(a, "summary amount", rec.line)).transpose()?;
        let item_count = f.opt().map(|c| number(c, "item count", rec.line)).transpose()?;
        let funds_type = funds_type(&mut f)?;
        summaries.push(AccountSummary {
            type_code,
            amount,
            item_count,
            funds_type,
        });
    }

    Ok(AccountHeader {
        customer_account_number,
        currency,
        summaries,
    })
}

fn transaction_detail(rec: &Record) -> Result<TransactionDetail> {
    let mut f = Fields::new(rec);
    let type_code = type_code(f.req("type code")?, rec.line)?;
    let amount = number(f.req("amount")?, "amount", rec.line)?;
    let funds_type = funds_type(&mut f)?;
    let bank_reference = f.opt().map(str::to_string);
    let customer_reference = f.opt().map(str::to_string);
    let text = f.text();

    Ok(TransactionDetail {
        type_code,
        amount,
        funds_type,
        bank_reference,
        customer_reference,
        text,
    })
}

fn account_trailer(rec: &Record) -> Result<AccountTrailer> {
    let mut f = Fields::new(rec);
    Ok(AccountTrailer {
        control_total: number(f.req("control total")?, "control total", rec.line)?,
        record_count: number(f.req("number of records")?, "number of records", rec.line)?,
    })
}

fn group_trailer(rec: &Record) -> Result<GroupTrailer> {
    let mut f = Fields::new(rec);
    Ok(GroupTrailer {
        control_total: number(f.req("control total")?, "control total", rec.line)?,
        account_count: number(f.req("number of accounts")?, "number of accounts", rec.line)?,
        record_count: number(f.req("number of records")?, "number of records", rec.line)?,
    })
}

fn file_trailer(rec: &Record) -> Result<FileTrailer> {
    let mut f = Fields::new(rec);
    Ok(FileTrailer {
        control_total: number(f.req("control total")?, "control total", rec.line)?,
        group_count: number(f.req("number of groups")?, "number of groups", rec.line)?,
        record_count: number(f.req("number of records")?, "number of records", rec.line)?,
    })
}

fn funds_type(f: &mut Fields<'_>) -> Result<FundsType> {
    let line = f.line;
    let ft = match f.opt().unwrap_or("Z") {
        "Z" => FundsType::Unknown,
        "0" => FundsType::Immediate,
        "1" => FundsType::OneDay,
        "2" => FundsType::TwoOrMoreDays,
        "S" => FundsType::Distributed {
            immediate: number(f.req("immediate availability")?, "availability", line)?,
            one_day: number(f.req("one-day availability")?, "availability", line)?,
            more_than_one_day: number(f.req("two-day availability")?, "availability", line)?,
        },
        "V" => FundsType::ValueDated {
            date: date(f.req("value date")?, line)?,
            time: f.opt().map(|t| time(t, line)).transpose()?,
        },
        "D" => {
            let count: u32 = number(f.req("distribution count")?, "distribution count", line)?;
            let mut items = Vec::new();
            for _ in 0..count {
                items.push(DayAvailability {
                    days: number(f.req("availability days")?, "availability days", line)?,
                    amount: number(f.req("availability amount")?, "availability amount", line)?,
                });
            }
            FundsType::DistributedByDays(items)
        }
        other => return Err(malformed(line, format!("unknown funds type {other}"))),
    };
    Ok(ft)
}

/* ------------------------------- FIELDS --------------------------------- */

/// Comma-separated field cursor; a trailing `/` closes the list.
struct Fields<'a> {
    rest: Option<&'a str>,
    line: usize,
}

impl<'a> Fields<'a> {
    fn new(rec: &'a Record) -> Self {
        Self::over(&rec.body, rec.line)
    }

    fn over(body: &'a str, line: usize) -> Self {
        Self {
            rest: Some(body),
            line,
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.find(',') {
            Some(i) if !rest[..i].ends_with('/') => {
                self.rest = Some(&rest[i + 1..]);
                Some(rest[..i].trim())
            }
            Some(i) => {
                self.rest = None;
                Some(rest[..i - 1].trim())
            }
            None => {
                self.rest = None;
                Some(rest.strip_suffix('/').unwrap_or(rest).trim())
            }
        }
    }

    fn opt(&mut self) -> Option<&'a str> {
        self.next().filter(|s| !s.is_empty())
    }

    fn req(&mut self, name: &str) -> Result<&'a str> {
        self.opt().ok_or_else(|| malformed(self.line, format!("missing {name}")))
    }

    /// Everything left, commas included.
    fn text(&mut self) -> String {
        let rest = self.rest.take().unwrap_or("");
        rest.strip_suffix('/').unwrap_or(rest).trim().to_string()
    }
}

fn type_code(code: &str, line: usize) -> Result<TypeCode> {
    type_codes::lookup(code).ok_or_else(|| malformed(line, format!("bad type code {code}")))
}

fn number<T: FromStr>(s: &str, name: &str, line: usize) -> Result<T> {
    s.trim_start_matches('+')
        .parse()
        .map_err(|_| malformed(line, format!("bad {name} {s:?}")))
}

fn date(s: &str, line: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%y%m%d").map_err(|e| malformed(line, format!("date {s:?}: {e}")))
}

/// `HHMM`; 2400 and 9999 both mean end of day.
fn time(s: &str, line: usize) -> Result<NaiveTime> {
    match s {
        "2400" | "9999" => NaiveTime::from_hms_opt(23, 59, 59)
            .ok_or_else(|| malformed(line, "end-of-day time")),
        _ => NaiveTime::parse_from_str(s, "%H%M").map_err(|e| malformed(line, format!("time {s:?}: {e}"))),
    }
}
