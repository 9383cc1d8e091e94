use bai2qbolib::{
    convert::csv_date,
    extract::extract,
    formats::{bai2::Bai2, csv::decorate_all, ofx::{OfxStatement, Qbo}},
    traits::{ReadFormat, WriteFormat},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // BAI2 on stdin -> QBO on stdout; ids come from BANKID / ACCTID
    let file = Bai2::read(std::io::BufReader::new(std::io::stdin()))?;
    let extraction = extract(&file)?;
    let as_of = extraction.as_of_date.ok_or("group has no as-of date")?;

    let st = OfxStatement {
        bank_id: std::env::var("BANKID").unwrap_or_default(),
        account_id: std::env::var("ACCTID").unwrap_or_default(),
        generated_at: chrono::Local::now().naive_local(),
        transactions: decorate_all(&extraction.transactions, &csv_date(as_of)),
    };
    Qbo::write(std::io::stdout(), &st)?;
    Ok(())
}
