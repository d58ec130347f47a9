//! Input models: one disbursement record per employee, plus the run-level
//! context shared by every row of an export.

use crate::money::Money;
use chrono::NaiveDate;
use serde::Deserialize;

/// One employee's computed net-pay line item for a pay period.
///
/// Supplied fresh per export call; this subsystem neither stores nor
/// mutates records, and takes the amounts as already computed.
#[derive(Debug, Clone, Deserialize)]
pub struct DisbursementRecord {
    /// Employee number, e.g. `EMP001`
    pub employee_number: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Receiving bank name
    pub bank_name: String,

    /// Receiving bank branch
    pub bank_branch: String,

    /// Account number (passed through unvalidated)
    pub account_number: String,

    /// Net salary for the period
    pub net_salary: Money,

    /// EPF number
    #[serde(default)]
    pub epf_number: String,

    /// National ID
    #[serde(default)]
    pub national_id: String,
}

/// Run-level context for one export or preview invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Any day within the pay month; only year and month are used.
    pub period: NaiveDate,

    /// Free-text payment reference. Defaults to `SAL-<yyyyMM>` when absent.
    pub payment_reference: Option<String>,
}

impl RunContext {
    /// Creates a context for a period with the default payment reference.
    pub fn new(period: NaiveDate) -> Self {
        RunContext {
            period,
            payment_reference: None,
        }
    }

    /// The payment reference shared by every row of the run.
    pub fn reference(&self) -> String {
        match &self.payment_reference {
            Some(reference) => reference.clone(),
            None => format!("SAL-{}", self.period.format("%Y%m")),
        }
    }

    /// The `yyyy-MM` label used in output file names.
    pub fn period_label(&self) -> String {
        self.period.format("%Y-%m").to_string()
    }
}
