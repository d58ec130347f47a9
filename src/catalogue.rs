//! The template catalogue: every bank file layout this process can emit.
//!
//! Built once at startup from declarative specs and read-only afterwards,
//! so it is safe to share across threads without synchronization. All
//! template validation happens here; a defective definition fails the
//! process at construction instead of surfacing mid-export.

use crate::error::{ExportError, Result};
use crate::template::{Align, ColumnSpec, FormatKind, OverflowPolicy, Template, TemplateSpec};
use log::debug;

const fn column(id: &'static str, label: &'static str, field: &'static str) -> ColumnSpec {
    ColumnSpec {
        id,
        label,
        field,
        width: None,
        align: Align::Left,
        transform: None,
    }
}

const fn sized(
    id: &'static str,
    label: &'static str,
    field: &'static str,
    width: usize,
    align: Align,
) -> ColumnSpec {
    ColumnSpec {
        id,
        label,
        field,
        width: Some(width),
        align,
        transform: None,
    }
}

const STANDARD_CSV_COLUMNS: &[ColumnSpec] = &[
    column("employee_no", "Employee No", "employee_number"),
    column("employee_name", "Employee Name", "full_name"),
    column("bank_name", "Bank Name", "bank_name"),
    column("branch", "Branch", "bank_branch"),
    column("account_number", "Account Number", "account_number"),
    column("amount", "Amount", "net_salary"),
];

const BANK_TRANSFER_SIMPLE_COLUMNS: &[ColumnSpec] = &[
    column("account", "Account", "account_number"),
    column("amount", "Amount", "net_salary"),
    column("name", "Name", "full_name"),
];

const COMMERCIAL_BANK_PIPE_COLUMNS: &[ColumnSpec] = &[
    column("sequence", "Seq", "sequence_number"),
    column("account", "Account", "account_number"),
    column("amount", "Amount", "amount_formatted"),
    column("name", "Name", "full_name"),
    column("reference", "Reference", "payment_reference"),
];

const FIXED_WIDTH_TRANSFER_COLUMNS: &[ColumnSpec] = &[
    sized("sequence", "Seq", "sequence_number", 5, Align::Left),
    sized("account", "Account", "account_number", 16, Align::Left),
    sized("amount", "Amount", "amount_formatted", 12, Align::Right),
    sized("name", "Name", "full_name", 30, Align::Left),
];

const PAYROLL_WORKBOOK_COLUMNS: &[ColumnSpec] = &[
    sized("employee_no", "Employee No", "employee_number", 14, Align::Left),
    sized("employee_name", "Employee Name", "full_name", 28, Align::Left),
    sized("bank_name", "Bank Name", "bank_name", 24, Align::Left),
    sized("branch", "Branch", "bank_branch", 18, Align::Left),
    sized("account_number", "Account Number", "account_number", 18, Align::Left),
    ColumnSpec {
        id: "amount",
        label: "Amount",
        field: "net_salary",
        width: Some(14),
        align: Align::Right,
        transform: None,
    },
    sized("epf_no", "EPF No", "epf_number", 14, Align::Left),
];

/// The built-in template definitions, in catalogue order.
const BUILTIN: &[TemplateSpec] = &[
    TemplateSpec {
        id: "standard_csv",
        name: "Standard CSV",
        description: "General-purpose comma-separated listing with a header row",
        format: FormatKind::Delimited { delimiter: ',' },
        include_header: true,
        extension: "csv",
        overflow: OverflowPolicy::PassThrough,
        columns: STANDARD_CSV_COLUMNS,
    },
    TemplateSpec {
        id: "bank_transfer_simple",
        name: "Simple Bank Transfer",
        description: "Headerless account/amount/name listing for bulk upload portals",
        format: FormatKind::Delimited { delimiter: ',' },
        include_header: false,
        extension: "csv",
        overflow: OverflowPolicy::PassThrough,
        columns: BANK_TRANSFER_SIMPLE_COLUMNS,
    },
    TemplateSpec {
        id: "commercial_bank_pipe",
        name: "Commercial Bank (pipe)",
        description: "Pipe-delimited transfer file with sequence and payment reference",
        format: FormatKind::Delimited { delimiter: '|' },
        include_header: false,
        extension: "txt",
        overflow: OverflowPolicy::PassThrough,
        columns: COMMERCIAL_BANK_PIPE_COLUMNS,
    },
    TemplateSpec {
        id: "fixed_width_transfer",
        name: "Fixed Width Transfer",
        description: "Space-padded fixed-column transfer file, no header",
        format: FormatKind::FixedWidth,
        include_header: false,
        extension: "txt",
        overflow: OverflowPolicy::PassThrough,
        columns: FIXED_WIDTH_TRANSFER_COLUMNS,
    },
    TemplateSpec {
        id: "payroll_workbook",
        name: "Payroll Workbook",
        description: "Single-sheet XLSX workbook for manual review and upload",
        format: FormatKind::Spreadsheet,
        include_header: true,
        extension: "xlsx",
        overflow: OverflowPolicy::PassThrough,
        columns: PAYROLL_WORKBOOK_COLUMNS,
    },
];

/// An ordered, immutable set of validated templates.
#[derive(Debug)]
pub struct TemplateCatalogue {
    templates: Vec<Template>,
}

impl TemplateCatalogue {
    /// Builds the standard catalogue shipped with the engine.
    pub fn standard() -> Result<Self> {
        Self::from_specs(BUILTIN)
    }

    /// Builds a catalogue from caller-supplied specs, validating each one.
    ///
    /// Duplicate template ids are a configuration error, as the id is the
    /// sole lookup key.
    pub fn from_specs(specs: &[TemplateSpec]) -> Result<Self> {
        let mut templates = Vec::with_capacity(specs.len());

        for spec in specs {
            if templates.iter().any(|t: &Template| t.id == spec.id) {
                return Err(ExportError::Config {
                    template: spec.id.to_string(),
                    detail: "duplicate template id".to_string(),
                });
            }
            let template = Template::from_spec(spec)?;
            debug!(
                "Validated template '{}' ({} columns)",
                template.id,
                template.columns.len()
            );
            templates.push(template);
        }

        Ok(TemplateCatalogue { templates })
    }

    /// All templates, in catalogue order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Looks up a template by id.
    pub fn get(&self, id: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ExportError::UnknownTemplate(id.to_string()))
    }
}
