//! BAI2 type codes: direction, level and description.
//!
//! The table covers the codes banks commonly send. Anything else is resolved
//! by the code ranges of the BAI2 standard.

use crate::model::{Direction, TypeCode, TypeCodeLevel};

use Direction::{Credit, Debit, Misc};
use TypeCodeLevel::{Detail, Status, Summary};

const TABLE: &[(&str, Direction, TypeCodeLevel, &str)] = &[
    ("010", Misc, Status, "Opening Ledger"),
    ("011", Misc, Status, "Average Opening Ledger MTD"),
    ("012", Misc, Status, "Average Opening Ledger YTD"),
    ("015", Misc, Status, "Closing Ledger"),
    ("020", Misc, Status, "Average Closing Ledger MTD"),
    ("025", Misc, Status, "Average Closing Ledger YTD"),
    ("030", Misc, Status, "Current Ledger"),
    ("040", Misc, Status, "Opening Available"),
    ("041", Misc, Status, "Average Opening Available MTD"),
    ("042", Misc, Status, "Average Opening Available YTD"),
    ("045", Misc, Status, "Closing Available"),
    ("050", Misc, Status, "Average Closing Available MTD"),
    ("055", Misc, Status, "Average Closing Available YTD"),
    ("056", Misc, Status, "Loan Balance"),
    ("057", Misc, Status, "Total Investment Position"),
    ("060", Misc, Status, "Current Available (CRS Suppressed)"),
    ("070", Misc, Status, "Total Float"),
    ("072", Misc, Status, "1-Day Float"),
    ("073", Misc, Status, "2 or More Days Float"),
    ("074", Misc, Status, "3 or More Days Float"),
    ("075", Misc, Status, "Adjustment to Balances"),
    ("100", Credit, Summary, "Total Credits"),
    ("101", Credit, Summary, "Total Credit Amount MTD"),
    ("105", Credit, Summary, "Credits Not Detailed"),
    ("106", Credit, Summary, "Deposits Subject to Float"),
    ("108", Credit, Detail, "Credit (Any Type)"),
    ("110", Credit, Summary, "Total Lockbox Deposits"),
    ("115", Credit, Detail, "Lockbox Deposit"),
    ("140", Credit, Summary, "Total ACH Credits"),
    ("142", Credit, Detail, "ACH Credit Received"),
    ("143", Credit, Detail, "Item in ACH Deposit"),
    ("145", Credit, Detail, "ACH Concentration Credit"),
    ("165", Credit, Detail, "Preauthorized ACH Credit"),
    ("166", Credit, Detail, "ACH Settlement"),
    ("169", Credit, Detail, "Miscellaneous ACH Credit"),
    ("170", Credit, Summary, "Total Other Check Deposits"),
    ("174", Credit, Detail, "Other Deposit"),
    ("175", Credit, Detail, "Check Deposit Package"),
    ("190", Credit, Summary, "Total Incoming Money Transfers"),
    ("195", Credit, Detail, "Incoming Money Transfer"),
    ("201", Credit, Detail, "Individual Automatic Transfer Credit"),
    ("206", Credit, Detail, "Book Transfer Credit"),
    ("275", Credit, Detail, "ZBA Credit"),
    ("301", Credit, Detail, "Commercial Deposit"),
    ("354", Credit, Detail, "Interest Credit"),
    ("395", Credit, Detail, "Check Reversal"),
    ("399", Credit, Detail, "Miscellaneous Credit"),
    ("400", Debit, Summary, "Total Debits"),
    ("401", Debit, Summary, "Total Debit Amount MTD"),
    ("408", Debit, Detail, "Float Adjustment"),
    ("409", Debit, Detail, "Debit (Any Type)"),
    ("450", Debit, Summary, "Total ACH Debits"),
    ("451", Debit, Detail, "ACH Debit Received"),
    ("455", Debit, Detail, "Preauthorized ACH Debit"),
    ("466", Debit, Detail, "ACH Settlement"),
    ("469", Debit, Detail, "Miscellaneous ACH Debit"),
    ("470", Debit, Summary, "Total Check Paid"),
    ("475", Debit, Detail, "Check Paid"),
    ("490", Debit, Summary, "Total Outgoing Money Transfers"),
    ("495", Debit, Detail, "Outgoing Money Transfer"),
    ("501", Debit, Detail, "Individual Automatic Transfer Debit"),
    ("506", Debit, Detail, "Book Transfer Debit"),
    ("555", Debit, Detail, "Deposited Item Returned"),
    ("575", Debit, Detail, "ZBA Debit"),
    ("698", Debit, Detail, "Miscellaneous Fees"),
    ("699", Debit, Detail, "Miscellaneous Debit"),
    ("890", Misc, Detail, "Contains Non-monetary Information"),
];

/// Resolve a three-digit type code. Returns `None` when `code` is not three digits.
pub fn lookup(code: &str) -> Option<TypeCode> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Some((c, transaction, level, description)) =
        TABLE.iter().find(|(c, ..)| *c == code)
    {
        return Some(TypeCode {
            code: (*c).to_string(),
            transaction: *transaction,
            level: *level,
            description: (*description).to_string(),
        });
    }

    let n: u16 = code.parse().ok()?;
    let (transaction, level, description) = match n {
        1..=99 => (Misc, Status, "Status"),
        100..=399 => (Credit, Detail, "Credit"),
        400..=699 => (Debit, Detail, "Debit"),
        900..=919 => (Credit, Detail, "Customized Credit"),
        920..=999 => (Debit, Detail, "Customized Debit"),
        _ => (Misc, Detail, "Miscellaneous"),
    };
    Some(TypeCode {
        code: code.to_string(),
        transaction,
        level,
        description: description.to_string(),
    })
}
