use super::value_objects::{Amount, Percentage};
use crate::domain::errors::{ComputationError, ComputationResult};
use crate::domain::logging::LogScope;
use crate::log_trace;

/// Domain service computing a share of the daily requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RdaCalculator;

impl RdaCalculator {
    pub fn new() -> Self {
        Self
    }

    /// `(numerator / denominator) * 100`
    pub fn percentage(&self, numerator: Amount, denominator: Amount) -> ComputationResult<Percentage> {
        if denominator.is_zero() {
            return Err(ComputationError::DivisionByZero);
        }

        let value = (numerator.value() / denominator.value()) * 100.0;
        log_trace!(
            LogScope::Calculator,
            "{} / {} -> {}",
            numerator,
            denominator,
            value
        );
        Percentage::from_finite(value).ok_or(ComputationError::NonFiniteResult)
    }
}
