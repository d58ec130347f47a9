//! Spreadsheet emitter: a single-sheet XLSX workbook built in memory.

use crate::emitter::Payload;
use crate::error::Result;
use crate::projector::{column_value, CellValue, ProjectedRow};
use crate::template::Template;
use rust_xlsxwriter::{Format, Workbook};

/// Sheet name carried by every exported workbook.
pub const SHEET_NAME: &str = "Bank Transfers";

/// MIME type of the produced payload.
pub const MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Emits the workbook payload for a template.
///
/// Numeric cells keep their native type so the spreadsheet stays usable
/// for totals and filters; a column transform (the formatted-amount form)
/// turns the cell into text instead. Declared column widths become display
/// widths; columns without one keep the writer's default.
pub fn emit(rows: &[ProjectedRow], template: &Template) -> Result<Payload> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col_idx, column) in template.columns.iter().enumerate() {
        if let Some(width) = column.width {
            worksheet.set_column_width(col_idx as u16, width as f64)?;
        }
    }

    let mut first_data_row: u32 = 0;
    if template.include_header {
        for (col_idx, column) in template.columns.iter().enumerate() {
            worksheet.write_string_with_format(0, col_idx as u16, column.label.as_str(), &bold)?;
        }
        first_data_row = 1;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let out_row = first_data_row + row_idx as u32;
        for (col_idx, column) in template.columns.iter().enumerate() {
            match column_value(row, column) {
                CellValue::Number(amount) => {
                    worksheet.write_number(out_row, col_idx as u16, amount.to_f64())?;
                }
                CellValue::Text(text) => {
                    worksheet.write_string(out_row, col_idx as u16, text.as_str())?;
                }
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(Payload::Binary {
        bytes,
        mime: MIME_TYPE,
    })
}
