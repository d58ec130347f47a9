//! Error types for the export engine.

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while building the catalogue or emitting a file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A template definition is internally inconsistent. Raised while the
    /// catalogue is constructed, never mid-export.
    #[error("Invalid template '{template}': {detail}")]
    Config { template: String, detail: String },

    /// Caller requested a template id absent from the catalogue
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    /// A fixed-width field exceeded its column width under the `Reject`
    /// overflow policy
    #[error("Value in column '{column}' is {len} characters, exceeds width {width}")]
    ColumnOverflow {
        column: String,
        width: usize,
        len: usize,
    },

    /// The workbook writer failed
    #[error("Workbook write error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Failed to read the input file or write the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The pay period argument could not be parsed as `YYYY-MM`
    #[error("Invalid pay period '{0}', expected YYYY-MM")]
    InvalidPeriod(String),

    /// Missing or malformed command line arguments
    #[error(
        "Usage: payroll-export <records.csv> <template-id> <period YYYY-MM> \
         [--reference REF] [--preview [rows]] [--out DIR]"
    )]
    Usage,
}
