//! The closed set of fields a template column may reference.
//!
//! Keeping this a tagged enum (rather than free-form strings resolved at
//! emission time) means an unmapped column is a construction-time
//! configuration error instead of a silently empty cell in a bank file.

use std::fmt;

/// Every field a projected row defines, direct or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Employee number as supplied, e.g. `EMP001`
    EmployeeNumber,
    /// First name as supplied
    FirstName,
    /// Last name as supplied
    LastName,
    /// Derived: first and last name joined by a single space
    FullName,
    /// Bank name as supplied
    BankName,
    /// Bank branch as supplied
    BankBranch,
    /// Account number as supplied (not validated here)
    AccountNumber,
    /// Net salary as a native number
    NetSalary,
    /// Derived: net salary rendered with exactly two decimal places
    AmountFormatted,
    /// Derived: 1-based row position, zero-padded to five digits
    SequenceNumber,
    /// Derived: the run's payment reference, shared across all rows
    PaymentReference,
    /// EPF number as supplied
    EpfNumber,
    /// National ID as supplied
    NationalId,
}

impl Field {
    /// All fields, in a stable order.
    pub const ALL: [Field; 13] = [
        Field::EmployeeNumber,
        Field::FirstName,
        Field::LastName,
        Field::FullName,
        Field::BankName,
        Field::BankBranch,
        Field::AccountNumber,
        Field::NetSalary,
        Field::AmountFormatted,
        Field::SequenceNumber,
        Field::PaymentReference,
        Field::EpfNumber,
        Field::NationalId,
    ];

    /// Resolves a template's source field name, used while the catalogue is
    /// validated. Returns `None` for names no projected row can satisfy.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "employee_number" => Some(Field::EmployeeNumber),
            "first_name" => Some(Field::FirstName),
            "last_name" => Some(Field::LastName),
            "full_name" => Some(Field::FullName),
            "bank_name" => Some(Field::BankName),
            "bank_branch" => Some(Field::BankBranch),
            "account_number" => Some(Field::AccountNumber),
            "net_salary" => Some(Field::NetSalary),
            "amount_formatted" => Some(Field::AmountFormatted),
            "sequence_number" => Some(Field::SequenceNumber),
            "payment_reference" => Some(Field::PaymentReference),
            "epf_number" => Some(Field::EpfNumber),
            "national_id" => Some(Field::NationalId),
            _ => None,
        }
    }

    /// The snake_case name templates use to reference this field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::EmployeeNumber => "employee_number",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::FullName => "full_name",
            Field::BankName => "bank_name",
            Field::BankBranch => "bank_branch",
            Field::AccountNumber => "account_number",
            Field::NetSalary => "net_salary",
            Field::AmountFormatted => "amount_formatted",
            Field::SequenceNumber => "sequence_number",
            Field::PaymentReference => "payment_reference",
            Field::EpfNumber => "epf_number",
            Field::NationalId => "national_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
