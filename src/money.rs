//! Currency amount type for disbursement values.
//!
//! Wraps `rust_decimal::Decimal` so money never passes through floating
//! point on the way from input CSV to an output file. Two renderings are
//! needed by the emitters: the plain form (`50000`, `1250.5`) used when a
//! template passes the amount through verbatim, and the two-decimal form
//! (`50000.00`) used by the formatted-amount field.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A net-salary amount.
///
/// `Display` yields the plain normalized form with trailing zeros dropped,
/// so a record read as `50000` or `50000.00` both render as `50000` in
/// delimited output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a `Money` from a raw decimal.
    pub fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Renders the amount with exactly two decimal places, e.g. `50000.00`.
    pub fn two_places(&self) -> String {
        format!("{:.2}", self.0)
    }

    /// Converts to `f64` for native numeric spreadsheet cells.
    ///
    /// Decimal-to-float conversion is total for `rust_decimal`; the
    /// fallback is unreachable in practice.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_str(&s).map_err(serde::de::Error::custom)
    }
}
