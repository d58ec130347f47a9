//! # Payroll Export
//!
//! Serializes computed payroll disbursement records into bank-ready
//! transfer files, chosen from a catalogue of declarative templates,
//! across three output encodings: delimited text, fixed-width text, and a
//! single-sheet XLSX workbook.
//!
//! ## Design Principles
//!
//! - **Templates are data**: a closed catalogue validated once at
//!   construction; a column referencing an unknown field is a startup
//!   error, never an empty cell in a bank file
//! - **Decimal amounts**: money flows through `rust_decimal`, never floats
//! - **Pure emission**: projection and emitters are pure functions, so
//!   identical inputs give byte-identical text output
//! - **Honest previews**: a preview is a prefix of the real export payload
//!   rendered by the same code path, not an approximation
//!
//! ## Example
//!
//! ```no_run
//! use payroll_export::{DisbursementRecord, ExportEngine, RunContext};
//! use chrono::NaiveDate;
//!
//! let records: Vec<DisbursementRecord> = vec![/* computed upstream */];
//! let ctx = RunContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
//!
//! let engine = ExportEngine::new().unwrap();
//! let preview = engine.preview(&records, "standard_csv", &ctx, 5).unwrap();
//! println!("{}", preview);
//!
//! let file = engine.export(&records, "standard_csv", &ctx).unwrap();
//! std::fs::write(&file.file_name, file.payload.as_bytes()).unwrap();
//! ```

pub mod catalogue;
pub mod delimited;
pub mod emitter;
pub mod error;
pub mod export;
pub mod field;
pub mod fixed_width;
pub mod money;
pub mod projector;
pub mod record;
pub mod spreadsheet;
pub mod template;

pub use catalogue::TemplateCatalogue;
pub use emitter::{emit, Payload};
pub use error::{ExportError, Result};
pub use export::{ExportEngine, ExportFile, DEFAULT_PREVIEW_ROWS};
pub use field::Field;
pub use money::Money;
pub use projector::{column_value, project, CellValue, ProjectedRow};
pub use record::{DisbursementRecord, RunContext};
pub use template::{
    Align, ColumnSpec, FormatKind, OverflowPolicy, Template, TemplateColumn, TemplateSpec,
    Transform,
};
