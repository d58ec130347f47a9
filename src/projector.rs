//! Row projection: the deterministic mapping from one disbursement record
//! plus run context to the flat set of fields a template may reference.

use crate::field::Field;
use crate::money::Money;
use crate::record::DisbursementRecord;
use crate::template::{TemplateColumn, Transform};

/// One cell's value, typed so the spreadsheet emitter can keep numbers
/// native while the text emitters stringify them.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(Money),
}

impl CellValue {
    /// The text rendering used by the delimited and fixed-width emitters.
    /// Numbers render in their plain normalized form.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(amount) => amount.to_string(),
        }
    }
}

/// The projection of one record for one export run.
///
/// Every [`Field`] variant is defined unconditionally, so any template can
/// reference any field regardless of format; `value` is a total match and
/// cannot fail.
#[derive(Debug, Clone)]
pub struct ProjectedRow {
    employee_number: String,
    first_name: String,
    last_name: String,
    full_name: String,
    bank_name: String,
    bank_branch: String,
    account_number: String,
    net_salary: Money,
    sequence_number: String,
    payment_reference: String,
    epf_number: String,
    national_id: String,
}

impl ProjectedRow {
    /// Resolves one field to its cell value.
    pub fn value(&self, field: Field) -> CellValue {
        match field {
            Field::EmployeeNumber => CellValue::Text(self.employee_number.clone()),
            Field::FirstName => CellValue::Text(self.first_name.clone()),
            Field::LastName => CellValue::Text(self.last_name.clone()),
            Field::FullName => CellValue::Text(self.full_name.clone()),
            Field::BankName => CellValue::Text(self.bank_name.clone()),
            Field::BankBranch => CellValue::Text(self.bank_branch.clone()),
            Field::AccountNumber => CellValue::Text(self.account_number.clone()),
            Field::NetSalary => CellValue::Number(self.net_salary),
            Field::AmountFormatted => CellValue::Text(self.net_salary.two_places()),
            Field::SequenceNumber => CellValue::Text(self.sequence_number.clone()),
            Field::PaymentReference => CellValue::Text(self.payment_reference.clone()),
            Field::EpfNumber => CellValue::Text(self.epf_number.clone()),
            Field::NationalId => CellValue::Text(self.national_id.clone()),
        }
    }
}

/// Projects one record at a 0-based position in the run.
///
/// Pure: the same record, index, and reference always produce the same row.
pub fn project(record: &DisbursementRecord, index: usize, reference: &str) -> ProjectedRow {
    ProjectedRow {
        employee_number: record.employee_number.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        full_name: format!("{} {}", record.first_name, record.last_name),
        bank_name: record.bank_name.clone(),
        bank_branch: record.bank_branch.clone(),
        account_number: record.account_number.clone(),
        net_salary: record.net_salary,
        sequence_number: format!("{:05}", index + 1),
        payment_reference: reference.to_string(),
        epf_number: record.epf_number.clone(),
        national_id: record.national_id.clone(),
    }
}

/// Resolves one template column against a projected row, applying the
/// column's transform if it has one.
pub fn column_value(row: &ProjectedRow, column: &TemplateColumn) -> CellValue {
    let value = row.value(column.source);
    match column.transform {
        Some(Transform::TwoDecimalString) => match value {
            CellValue::Number(amount) => CellValue::Text(amount.two_places()),
            text @ CellValue::Text(_) => text,
        },
        None => value,
    }
}
