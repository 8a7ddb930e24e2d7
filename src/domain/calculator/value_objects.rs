use derive_more::{Deref, Display};
use serde::Serialize;
use std::fmt;

use crate::domain::errors::{AmountField, ComputationError, ComputationResult};

/// Value Object - non-blank product label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize)]
pub struct ProductName(String);

impl ProductName {
    /// Surrounding whitespace is dropped; a blank name yields `None`.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Value Object - finite quantity typed into one of the numeric fields
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// `Ok(None)` for a blank field, an error for text that is not a finite number.
    pub fn parse(field: AmountField, raw: &str) -> ComputationResult<Option<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(Self(value))),
            _ => Err(ComputationError::InvalidNumber {
                field,
                value: trimmed.to_string(),
            }),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

/// Shortest form; exponent notation (`1e+21`, `1.5e-07`) below `1e-4` and
/// from `1e16` up.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scientific = format!("{:e}", self.0);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return write!(f, "{}", self.0);
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        if self.0 != 0.0 && !(-4..16).contains(&exponent) {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Value Object - share of the daily requirement, shown with one decimal
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize)]
#[display(fmt = "{:.1}%", _0)]
pub struct Percentage(f64);

impl Percentage {
    pub(crate) fn from_finite(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }
}
