//! Per-file conversion BAI2 → CSV → QBO, and the batch loop over an input directory.
//!
//! Every file gets its own `Result`; one bad statement never stops the batch.

use crate::{
    convert::csv_date,
    error::{Bai2QboError, Result},
    extract::{extract, FileHeaderRow, GroupHeaderRow, SummaryRow},
    formats::{
        bai2::Bai2,
        csv::{decorate_all, TransactionCsv},
        ofx::{self, OfxStatement},
    },
    traits::{ReadFormat, WriteFormat},
};
use chrono::Local;
use log::{error, info, warn};
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Cursor};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub bank_id: String,
    pub account_id: String,
}

/// User-facing signal for statements that carry no transactions.
pub trait Notifier {
    fn no_transactions(&self, source: &str);
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn no_transactions(&self, source: &str) {
        warn!("no transactions {source}");
    }
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub source: PathBuf,
    pub csv_path: PathBuf,
    pub qbo_path: PathBuf,
    pub transaction_count: usize,
    pub file_header: FileHeaderRow,
    pub group_header: GroupHeaderRow,
    pub summaries: Vec<SummaryRow>,
}

#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub result: Result<PipelineOutput>,
}

pub struct Pipeline<N = LogNotifier> {
    config: Config,
    notifier: N,
}

impl<N: Notifier> Pipeline<N> {
    pub fn new(config: Config, notifier: N) -> Self {
        Self { config, notifier }
    }

    /// BAI2 candidates in the input directory: names containing `.txt` in any case, sorted.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let re = Regex::new(r"(?i)\.txt")?;
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.config.input_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if re.is_match(&entry.file_name().to_string_lossy()) {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Converts every discovered file, collecting one report per file.
    pub fn run(&self) -> Result<Vec<FileReport>> {
        let files = self.discover()?;
        info!(
            "converting {} file(s) from {}",
            files.len(),
            self.config.input_dir.display()
        );

        let reports = files
            .into_iter()
            .map(|source| {
                let result = self.convert_file(&source);
                match &result {
                    Ok(out) => info!(
                        "{}: {} transaction(s) -> {}",
                        source.display(),
                        out.transaction_count,
                        out.qbo_path.display()
                    ),
                    Err(e @ Bai2QboError::Encoding(_)) => warn!("{e}"),
                    Err(Bai2QboError::EmptyResult(_)) => {}
                    Err(e) => error!("{}: {e}", source.display()),
                }
                FileReport { source, result }
            })
            .collect();
        Ok(reports)
    }

    pub fn convert_file(&self, source: &Path) -> Result<PipelineOutput> {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let bytes = fs::read(source)?;
        let text = String::from_utf8(bytes).map_err(|_| Bai2QboError::Encoding(source.to_path_buf()))?;
        let bai = Bai2::read(Cursor::new(text))?;
        let extraction = extract(&bai)?;

        if extraction.transactions.is_empty() {
            self.notifier.no_transactions(&name);
            return Err(Bai2QboError::EmptyResult(name));
        }
        let as_of_date = extraction.as_of_date.ok_or(Bai2QboError::MissingAsOfDate)?;

        let csv_path = self.config.output_dir.join(format!("transactions-{name}.csv"));
        let rows = decorate_all(&extraction.transactions, &csv_date(as_of_date));
        TransactionCsv::write(BufWriter::new(File::create(&csv_path)?), &rows)?;
        info!("wrote {}", csv_path.display());

        let qbo_path = self.config.output_dir.join(format!("transactions-{name}.csv.qbo"));
        self.emit_qbo(&csv_path, &qbo_path)?;

        Ok(PipelineOutput {
            source: source.to_path_buf(),
            csv_path,
            qbo_path,
            transaction_count: extraction.transactions.len(),
            file_header: extraction.file_header,
            group_header: extraction.group_header,
            summaries: extraction.summaries,
        })
    }

    /// Reads a transaction CSV and writes the QBO document. The document is
    /// rendered in memory first, so a failure leaves no `.qbo` behind.
    pub fn emit_qbo(&self, csv_path: &Path, qbo_path: &Path) -> Result<usize> {
        let transactions = TransactionCsv::read(BufReader::new(File::open(csv_path)?))?;
        let count = transactions.len();
        let st = OfxStatement {
            bank_id: self.config.bank_id.clone(),
            account_id: self.config.account_id.clone(),
            generated_at: Local::now().naive_local(),
            transactions,
        };
        let doc = ofx::render(&st)?;
        fs::write(qbo_path, doc)?;
        info!("wrote {}", qbo_path.display());
        Ok(count)
    }
}
