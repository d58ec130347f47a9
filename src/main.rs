//! Payroll Export CLI
//!
//! Reads computed disbursement records from a CSV file and either previews
//! or writes the bank transfer file for a chosen template.
//!
//! # Usage
//!
//! ```bash
//! # Write bank-transfer-2024-06-standard_csv.csv to the current directory
//! cargo run -- records.csv standard_csv 2024-06
//!
//! # Print the first five rows instead of writing a file
//! cargo run -- records.csv standard_csv 2024-06 --preview
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use chrono::NaiveDate;
use log::info;
use payroll_export::{
    DisbursementRecord, ExportEngine, ExportError, Result, RunContext, DEFAULT_PREVIEW_ROWS,
};
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

struct Args {
    input: String,
    template_id: String,
    period: NaiveDate,
    reference: Option<String>,
    preview: Option<usize>,
    out_dir: PathBuf,
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1).collect())?;
    let records = read_records(&args.input)?;
    info!("Read {} records from {}", records.len(), args.input);

    let ctx = RunContext {
        period: args.period,
        payment_reference: args.reference,
    };
    let engine = ExportEngine::new()?;

    match args.preview {
        Some(rows) => {
            let text = engine.preview(&records, &args.template_id, &ctx, rows)?;
            println!("{}", text);
        }
        None => {
            let file = engine.export(&records, &args.template_id, &ctx)?;
            let path = args.out_dir.join(&file.file_name);
            fs::write(&path, file.payload.as_bytes())?;
            info!(
                "Wrote {} ({} bytes, {})",
                path.display(),
                file.payload.as_bytes().len(),
                file.payload.mime()
            );
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut reference = None;
    let mut preview = None;
    let mut out_dir = PathBuf::from(".");

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--reference" => {
                i += 1;
                reference = Some(args.get(i).ok_or(ExportError::Usage)?.clone());
            }
            "--out" => {
                i += 1;
                out_dir = PathBuf::from(args.get(i).ok_or(ExportError::Usage)?);
            }
            "--preview" => {
                // Row count is optional; bare --preview uses the default cap
                match args.get(i + 1).and_then(|a| a.parse::<usize>().ok()) {
                    Some(rows) => {
                        preview = Some(rows);
                        i += 1;
                    }
                    None => preview = Some(DEFAULT_PREVIEW_ROWS),
                }
            }
            flag if flag.starts_with("--") => return Err(ExportError::Usage),
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    if positional.len() != 3 {
        return Err(ExportError::Usage);
    }

    let period = parse_period(&positional[2])?;
    Ok(Args {
        input: positional[0].clone(),
        template_id: positional[1].clone(),
        period,
        reference,
        preview,
        out_dir,
    })
}

/// Parses a `YYYY-MM` pay period as the first day of that month.
fn parse_period(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| ExportError::InvalidPeriod(s.to_string()))
}

/// Reads the full record list up front. A record that fails to parse
/// aborts the run: a partial bank file is worse than none.
fn read_records(path: &str) -> Result<Vec<DisbursementRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in reader.deserialize::<DisbursementRecord>() {
        records.push(result?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period() {
        assert_eq!(
            parse_period("2024-06").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_period("June 2024").is_err());
        assert!(parse_period("2024-13").is_err());
    }

    #[test]
    fn test_parse_args_positional_and_flags() {
        let args = parse_args(
            ["in.csv", "standard_csv", "2024-06", "--reference", "RUN-7"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();

        assert_eq!(args.input, "in.csv");
        assert_eq!(args.template_id, "standard_csv");
        assert_eq!(args.reference.as_deref(), Some("RUN-7"));
        assert_eq!(args.preview, None);
    }

    #[test]
    fn test_parse_args_preview_row_count() {
        let args = parse_args(
            ["in.csv", "standard_csv", "2024-06", "--preview", "10"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        assert_eq!(args.preview, Some(10));

        let args = parse_args(
            ["in.csv", "standard_csv", "2024-06", "--preview"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        assert_eq!(args.preview, Some(DEFAULT_PREVIEW_ROWS));
    }

    #[test]
    fn test_parse_args_rejects_missing_positionals() {
        assert!(parse_args(vec!["in.csv".to_string()]).is_err());
        assert!(parse_args(vec![]).is_err());
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag() {
        let result = parse_args(
            ["in.csv", "standard_csv", "2024-06", "--force"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert!(result.is_err());
    }
}
