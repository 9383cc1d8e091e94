use bai2qbolib::{
    error::Result,
    pipeline::{Config, Notifier, Pipeline},
};
use clap::Parser;
use log::{error, warn};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bai2qbo", version, about = "Convert BAI2 statements into QBO files")]
struct Cli {
    /// Directory with BAI2 statements (*.txt)
    #[arg(short = 'i', long = "input-dir", env = "BAI2QBO_INPUT_DIR")]
    input_dir: PathBuf,

    /// Directory for the CSV and QBO output
    #[arg(short = 'o', long = "output-dir", env = "BAI2QBO_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Bank routing id written to <BANKID>
    #[arg(long = "bank-id", env = "BANKID")]
    bank_id: String,

    /// Account id written to <ACCTID>
    #[arg(long = "account-id", env = "ACCTID")]
    account_id: String,
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn no_transactions(&self, source: &str) {
        warn!("no transactions {source}");
        eprintln!("Alert: no transactions {source}");
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("something bad happened: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let pipeline = Pipeline::new(
        Config {
            input_dir: cli.input_dir,
            output_dir: cli.output_dir,
            bank_id: cli.bank_id,
            account_id: cli.account_id,
        },
        StderrNotifier,
    );

    let reports = pipeline.run()?;
    let converted = reports.iter().filter(|r| r.result.is_ok()).count();
    eprintln!("converted {converted} of {} file(s)", reports.len());
    Ok(())
}
