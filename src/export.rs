//! Export/preview façade.
//!
//! Orchestrates projection and emission for either a full export (a named
//! payload the caller hands off for download or writes to disk) or a
//! truncated preview. Both paths run the identical projector and, for the
//! line-based formats, the identical emitter: a preview is a strict prefix
//! of the export payload, never a separately derived approximation.

use crate::catalogue::TemplateCatalogue;
use crate::delimited;
use crate::emitter::{self, Payload};
use crate::error::Result;
use crate::fixed_width;
use crate::projector::{self, ProjectedRow};
use crate::record::{DisbursementRecord, RunContext};
use crate::template::FormatKind;
use log::debug;

/// Preview row cap used when the caller does not supply one.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// A fully emitted export: the payload plus the file name it should be
/// delivered under.
#[derive(Debug)]
pub struct ExportFile {
    /// `bank-transfer-<period>-<template>.<extension>`
    pub file_name: String,

    /// The emitted bytes
    pub payload: Payload,
}

/// The export engine: a validated template catalogue plus the two
/// operations callers use. Stateless across calls; safe to share.
pub struct ExportEngine {
    catalogue: TemplateCatalogue,
}

impl ExportEngine {
    /// Creates an engine over the standard catalogue.
    ///
    /// Fails fast if any built-in template is defective, so a
    /// configuration error surfaces at startup rather than mid-export.
    pub fn new() -> Result<Self> {
        Ok(ExportEngine {
            catalogue: TemplateCatalogue::standard()?,
        })
    }

    /// Creates an engine over a caller-built catalogue.
    pub fn with_catalogue(catalogue: TemplateCatalogue) -> Self {
        ExportEngine { catalogue }
    }

    /// The engine's catalogue, e.g. for listing templates to a user.
    pub fn catalogue(&self) -> &TemplateCatalogue {
        &self.catalogue
    }

    /// Emits the full payload for every record under the chosen template.
    ///
    /// Either a complete payload covering all input rows is produced or
    /// the call fails; there is no row-level skip, since a partial bank
    /// file is worse than none.
    pub fn export(
        &self,
        records: &[DisbursementRecord],
        template_id: &str,
        ctx: &RunContext,
    ) -> Result<ExportFile> {
        let template = self.catalogue.get(template_id)?;
        let rows = project_all(records, &ctx.reference());
        let payload = emitter::emit(&rows, template)?;

        let file_name = format!(
            "bank-transfer-{}-{}.{}",
            ctx.period_label(),
            template.id,
            template.extension
        );
        debug!(
            "Exported {} rows through '{}' into {} ({} bytes)",
            rows.len(),
            template.id,
            file_name,
            payload.as_bytes().len()
        );

        Ok(ExportFile { file_name, payload })
    }

    /// Renders the first `max_rows` records as text for user verification.
    ///
    /// Line-based templates preview through their own emitter, so the
    /// result equals the head of the export payload. Spreadsheet templates
    /// substitute a tab delimiter and render through the delimited path,
    /// giving a readable stand-in for the binary workbook.
    pub fn preview(
        &self,
        records: &[DisbursementRecord],
        template_id: &str,
        ctx: &RunContext,
        max_rows: usize,
    ) -> Result<String> {
        let template = self.catalogue.get(template_id)?;
        let take = records.len().min(max_rows);
        let rows = project_all(&records[..take], &ctx.reference());
        debug!("Previewing {} of {} rows through '{}'", take, records.len(), template.id);

        match template.format {
            FormatKind::Delimited { delimiter } => delimited::emit(&rows, template, delimiter),
            FormatKind::FixedWidth => fixed_width::emit(&rows, template),
            FormatKind::Spreadsheet => delimited::emit(&rows, template, '\t'),
        }
    }
}

fn project_all(records: &[DisbursementRecord], reference: &str) -> Vec<ProjectedRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| projector::project(record, index, reference))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::money::Money;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn record(employee: &str, first: &str, last: &str, salary: &str) -> DisbursementRecord {
        DisbursementRecord {
            employee_number: employee.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            bank_name: "Bank of Ceylon".to_string(),
            bank_branch: "Colombo".to_string(),
            account_number: "1234567890".to_string(),
            net_salary: Money::from_str(salary).unwrap(),
            epf_number: "EPF123".to_string(),
            national_id: "991234567V".to_string(),
        }
    }

    fn ctx() -> RunContext {
        RunContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_export_file_name() {
        let engine = ExportEngine::new().unwrap();
        let records = vec![record("EMP001", "John", "Doe", "50000")];

        let file = engine.export(&records, "standard_csv", &ctx()).unwrap();
        assert_eq!(file.file_name, "bank-transfer-2024-06-standard_csv.csv");

        let file = engine.export(&records, "payroll_workbook", &ctx()).unwrap();
        assert_eq!(file.file_name, "bank-transfer-2024-06-payroll_workbook.xlsx");
    }

    #[test]
    fn test_unknown_template_is_surfaced() {
        let engine = ExportEngine::new().unwrap();
        let records = vec![record("EMP001", "John", "Doe", "50000")];

        let err = engine.export(&records, "no_such_bank", &ctx()).unwrap_err();
        assert!(matches!(err, ExportError::UnknownTemplate(_)));

        let err = engine
            .preview(&records, "no_such_bank", &ctx(), DEFAULT_PREVIEW_ROWS)
            .unwrap_err();
        assert!(matches!(err, ExportError::UnknownTemplate(_)));
    }

    #[test]
    fn test_preview_is_a_prefix_of_export() {
        let engine = ExportEngine::new().unwrap();
        let records: Vec<_> = (1..=8)
            .map(|i| record(&format!("EMP{:03}", i), "John", "Doe", "50000"))
            .collect();

        for template_id in ["standard_csv", "bank_transfer_simple", "fixed_width_transfer"] {
            let export = engine.export(&records, template_id, &ctx()).unwrap();
            let export_text = export.payload.as_text().unwrap();
            let preview = engine.preview(&records, template_id, &ctx(), 3).unwrap();

            assert!(
                export_text.starts_with(&preview),
                "preview of '{}' is not a prefix of its export",
                template_id
            );
        }
    }

    #[test]
    fn test_preview_caps_rows_but_keeps_header() {
        let engine = ExportEngine::new().unwrap();
        let records: Vec<_> = (1..=8)
            .map(|i| record(&format!("EMP{:03}", i), "John", "Doe", "50000"))
            .collect();

        let preview = engine.preview(&records, "standard_csv", &ctx(), 3).unwrap();
        // header + 3 data lines
        assert_eq!(preview.lines().count(), 4);
    }

    #[test]
    fn test_preview_shorter_input_than_cap() {
        let engine = ExportEngine::new().unwrap();
        let records = vec![record("EMP001", "John", "Doe", "50000")];

        let preview = engine
            .preview(&records, "bank_transfer_simple", &ctx(), DEFAULT_PREVIEW_ROWS)
            .unwrap();
        assert_eq!(preview.lines().count(), 1);
    }

    #[test]
    fn test_spreadsheet_preview_is_tab_separated_text() {
        let engine = ExportEngine::new().unwrap();
        let records = vec![record("EMP001", "John", "Doe", "50000")];

        let preview = engine
            .preview(&records, "payroll_workbook", &ctx(), DEFAULT_PREVIEW_ROWS)
            .unwrap();

        let mut lines = preview.lines();
        let header = lines.next().unwrap();
        assert_eq!(
            header,
            "Employee No\tEmployee Name\tBank Name\tBranch\tAccount Number\tAmount\tEPF No"
        );
        let data = lines.next().unwrap();
        assert_eq!(
            data,
            "EMP001\tJohn Doe\tBank of Ceylon\tColombo\t1234567890\t50000\tEPF123"
        );
    }

    #[test]
    fn test_standard_csv_scenario() {
        let engine = ExportEngine::new().unwrap();
        let records = vec![record("EMP001", "John", "Doe", "50000")];

        let file = engine.export(&records, "standard_csv", &ctx()).unwrap();
        assert_eq!(
            file.payload.as_text().unwrap(),
            "Employee No,Employee Name,Bank Name,Branch,Account Number,Amount\n\
             EMP001,John Doe,Bank of Ceylon,Colombo,1234567890,50000"
        );
    }

    #[test]
    fn test_bank_transfer_simple_scenario() {
        let engine = ExportEngine::new().unwrap();
        let records = vec![record("EMP001", "John", "Doe", "50000")];

        let file = engine
            .export(&records, "bank_transfer_simple", &ctx())
            .unwrap();
        assert_eq!(file.payload.as_text().unwrap(), "1234567890,50000,John Doe");
    }

    #[test]
    fn test_comma_in_name_is_quoted_but_other_cells_are_not() {
        let engine = ExportEngine::new().unwrap();
        let records = vec![record("EMP001", "John", "Doe, Jr.", "50000")];

        let file = engine.export(&records, "standard_csv", &ctx()).unwrap();
        let data_line = file.payload.as_text().unwrap().lines().nth(1).unwrap();
        assert_eq!(
            data_line,
            "EMP001,\"John Doe, Jr.\",Bank of Ceylon,Colombo,1234567890,50000"
        );
    }

    #[test]
    fn test_payment_reference_flows_into_rows() {
        let engine = ExportEngine::new().unwrap();
        let records = vec![record("EMP001", "John", "Doe", "50000")];

        let file = engine
            .export(&records, "commercial_bank_pipe", &ctx())
            .unwrap();
        assert_eq!(
            file.payload.as_text().unwrap(),
            "00001|1234567890|50000.00|John Doe|SAL-202406"
        );

        let custom = RunContext {
            period: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            payment_reference: Some("JUNE-RUN-7".to_string()),
        };
        let file = engine
            .export(&records, "commercial_bank_pipe", &custom)
            .unwrap();
        assert!(file.payload.as_text().unwrap().ends_with("|JUNE-RUN-7"));
    }

    #[test]
    fn test_export_is_idempotent() {
        let engine = ExportEngine::new().unwrap();
        let records: Vec<_> = (1..=3)
            .map(|i| record(&format!("EMP{:03}", i), "John", "Doe", "50000"))
            .collect();

        let first = engine.export(&records, "standard_csv", &ctx()).unwrap();
        let second = engine.export(&records, "standard_csv", &ctx()).unwrap();
        assert_eq!(first.payload.as_bytes(), second.payload.as_bytes());
    }

    #[test]
    fn test_empty_record_list_exports_header_only() {
        let engine = ExportEngine::new().unwrap();

        let file = engine.export(&[], "standard_csv", &ctx()).unwrap();
        assert_eq!(
            file.payload.as_text().unwrap(),
            "Employee No,Employee Name,Bank Name,Branch,Account Number,Amount"
        );

        let file = engine.export(&[], "bank_transfer_simple", &ctx()).unwrap();
        assert_eq!(file.payload.as_text().unwrap(), "");
    }
}
