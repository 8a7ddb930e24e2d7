use derive_more::Display;

/// Which numeric field of the form a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AmountField {
    #[display(fmt = "nutritional value")]
    Numerator,
    #[display(fmt = "daily requirement")]
    Denominator,
}

/// Failure to turn user-supplied values into a percentage.
///
/// Missing fields are not errors: the calculate action simply does nothing.
/// This type covers values that were supplied but could not be computed.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ComputationError {
    #[display(fmt = "float division by zero")]
    DivisionByZero,
    #[display(fmt = "could not convert {} '{}' to a number", field, value)]
    InvalidNumber { field: AmountField, value: String },
    #[display(fmt = "result is too large to represent")]
    NonFiniteResult,
}

impl std::error::Error for ComputationError {}

pub type ComputationResult<T> = Result<T, ComputationError>;
