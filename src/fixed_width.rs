//! Fixed-width text emitter.
//!
//! Each row is the concatenation, in column order, of every value padded
//! with spaces to its declared width. Fixed-width bank formats carry no
//! header by convention, so `include_header` is ignored here. Values wider
//! than their column are handled per the template's overflow policy.

use crate::error::{ExportError, Result};
use crate::projector::{column_value, ProjectedRow};
use crate::template::{Align, OverflowPolicy, Template};

/// Emits the fixed-width text payload for a template.
///
/// Lines are joined with `\n` and the returned string has no trailing
/// newline. Only the `Reject` overflow policy can fail.
pub fn emit(rows: &[ProjectedRow], template: &Template) -> Result<String> {
    let mut lines = Vec::with_capacity(rows.len());

    for row in rows {
        let mut line = String::new();
        for column in &template.columns {
            // Safety: catalogue validation guarantees every fixed-width
            // column declares a width
            let width = column.width.expect("validated fixed-width column");
            let value = column_value(row, column).to_text();
            line.push_str(&pad(&value, width, column.align, template.overflow, &column.id)?);
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Pads one value to its column width, measured in characters.
fn pad(
    value: &str,
    width: usize,
    align: Align,
    overflow: OverflowPolicy,
    column_id: &str,
) -> Result<String> {
    let len = value.chars().count();
    if len > width {
        return match overflow {
            OverflowPolicy::PassThrough => Ok(value.to_string()),
            OverflowPolicy::Truncate => Ok(value.chars().take(width).collect()),
            OverflowPolicy::Reject => Err(ExportError::ColumnOverflow {
                column: column_id.to_string(),
                width,
                len,
            }),
        };
    }

    Ok(match align {
        Align::Left => format!("{:<width$}", value),
        Align::Right => format!("{:>width$}", value),
    })
}
