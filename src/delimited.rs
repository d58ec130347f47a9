//! Delimited text emitter.
//!
//! Emits one line per projected row with values joined by the template's
//! delimiter, preceded by a label header when the template asks for one.
//! Quoting is RFC4180-style minimal: a value is quoted (with internal
//! quotes doubled) if and only if it contains the delimiter, a double
//! quote, or a newline. The `csv` crate's `QuoteStyle::Necessary` with an
//! explicit `\n` terminator implements exactly that rule for whichever
//! delimiter the template uses.

use crate::error::Result;
use crate::projector::{column_value, ProjectedRow};
use crate::template::Template;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Emits the delimited text payload for a template.
///
/// The delimiter is a parameter rather than read from the template so the
/// preview path can substitute a tab when rendering a spreadsheet template
/// as text. The returned string has no trailing newline.
pub fn emit(rows: &[ProjectedRow], template: &Template, delimiter: char) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter as u8)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if template.include_header {
        writer.write_record(template.columns.iter().map(|c| c.label.as_str()))?;
    }

    for row in rows {
        writer.write_record(
            template
                .columns
                .iter()
                .map(|column| column_value(row, column).to_text()),
        )?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    // Safety: the writer only ever receives UTF-8 input
    let mut text = String::from_utf8(bytes).expect("delimited output is UTF-8");
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
