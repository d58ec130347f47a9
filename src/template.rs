//! Output template model.
//!
//! A template is data, not behavior: an ordered list of columns plus the
//! format kind that decides which emitter consumes it. Templates enter the
//! system as declarative [`TemplateSpec`] values (field names as strings)
//! and are validated into [`Template`] values (fields as the closed enum)
//! exactly once, when the catalogue is built.

use crate::error::{ExportError, Result};
use crate::field::Field;

/// Output format kind. Adding a format is a compile-time-checked extension:
/// every emitter dispatch matches this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Delimited text file, e.g. CSV or pipe-separated
    Delimited { delimiter: char },

    /// Fixed-width text file; every column carries a declared width
    FixedWidth,

    /// Single-sheet binary XLSX workbook
    Spreadsheet,
}

/// Padding side for fixed-width columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Value first, spaces after
    #[default]
    Left,
    /// Spaces first, value after
    Right,
}

/// Optional per-column value transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Force the two-decimal text rendering of a numeric value. In the
    /// spreadsheet format this turns a native number cell into text.
    TwoDecimalString,
}

/// What the fixed-width emitter does with a value longer than its column.
///
/// The correct behavior is bank-specific, so it is template configuration
/// rather than a global rule. `PassThrough` emits the value unpadded,
/// misaligning the row; it is the default because it matches how these
/// files have historically been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Emit the oversized value as-is, unpadded
    #[default]
    PassThrough,
    /// Cut the value to the column width
    Truncate,
    /// Fail the whole emission
    Reject,
}

/// Declarative column definition, as written in the catalogue.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Stable column id
    pub id: &'static str,
    /// Header label
    pub label: &'static str,
    /// Source field name, resolved against [`Field`] during validation
    pub field: &'static str,
    /// Declared width; required for fixed-width templates, a display hint
    /// for spreadsheets, ignored for delimited output
    pub width: Option<usize>,
    /// Padding side, fixed-width only
    pub align: Align,
    /// Optional value transform
    pub transform: Option<Transform>,
}

/// Declarative template definition, as written in the catalogue.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub format: FormatKind,
    pub include_header: bool,
    pub extension: &'static str,
    pub overflow: OverflowPolicy,
    pub columns: &'static [ColumnSpec],
}

/// A validated output column. `source` is the closed field enum, so lookups
/// against a projected row cannot miss at emission time.
#[derive(Debug, Clone)]
pub struct TemplateColumn {
    pub id: String,
    pub label: String,
    pub source: Field,
    pub width: Option<usize>,
    pub align: Align,
    pub transform: Option<Transform>,
}

/// A validated, immutable output template.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub format: FormatKind,
    pub include_header: bool,
    pub extension: String,
    pub overflow: OverflowPolicy,
    pub columns: Vec<TemplateColumn>,
}

impl Template {
    /// Validates a declarative spec into a usable template.
    ///
    /// Checks, in order: the template has at least one column, every column
    /// field name resolves, fixed-width columns all declare widths, and a
    /// delimited delimiter is a single-byte character. Any failure is an
    /// [`ExportError::Config`] naming the template and the offending part.
    pub fn from_spec(spec: &TemplateSpec) -> Result<Template> {
        if spec.columns.is_empty() {
            return Err(config_error(spec.id, "template has no columns"));
        }

        if let FormatKind::Delimited { delimiter } = spec.format {
            if !delimiter.is_ascii() {
                return Err(config_error(
                    spec.id,
                    &format!("delimiter {:?} is not an ASCII character", delimiter),
                ));
            }
        }

        let mut columns = Vec::with_capacity(spec.columns.len());
        for column in spec.columns {
            let source = Field::from_name(column.field).ok_or_else(|| {
                config_error(
                    spec.id,
                    &format!(
                        "column '{}' references unknown field '{}'",
                        column.id, column.field
                    ),
                )
            })?;

            if spec.format == FormatKind::FixedWidth && column.width.is_none() {
                return Err(config_error(
                    spec.id,
                    &format!("fixed-width column '{}' has no width", column.id),
                ));
            }

            columns.push(TemplateColumn {
                id: column.id.to_string(),
                label: column.label.to_string(),
                source,
                width: column.width,
                align: column.align,
                transform: column.transform,
            });
        }

        Ok(Template {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            format: spec.format,
            include_header: spec.include_header,
            extension: spec.extension.to_string(),
            overflow: spec.overflow,
            columns,
        })
    }
}

fn config_error(template: &str, detail: &str) -> ExportError {
    ExportError::Config {
        template: template.to_string(),
        detail: detail.to_string(),
    }
}
