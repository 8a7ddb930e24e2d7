use serde::Serialize;

use crate::domain::{
    calculator::{CalculationInput, HistoryEntry, HistoryList, Percentage, RdaCalculator},
    errors::ComputationError,
    logging::{self, LogLevel, LogScope},
    time::Clock,
};
use crate::{log_debug, log_warn};

/// Raw text of the three inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub product_name: String,
    pub numerator: String,
    pub denominator: String,
}

impl FormFields {
    pub fn new(product_name: &str, numerator: &str, denominator: &str) -> Self {
        Self {
            product_name: product_name.to_string(),
            numerator: numerator.to_string(),
            denominator: denominator.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.product_name.is_empty() && self.numerator.is_empty() && self.denominator.is_empty()
    }
}

/// What the result area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum ResultDisplay {
    #[default]
    Empty,
    Percentage(Percentage),
    Error(String),
}

impl ResultDisplay {
    fn from_error(error: &ComputationError) -> Self {
        Self::Error(error.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl std::fmt::Display for ResultDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Percentage(pct) => write!(f, "{}", pct),
            Self::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

/// User events the view can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorAction {
    EditProductName(String),
    EditNumerator(String),
    EditDenominator(String),
    Calculate,
    ClearCalculator,
    ClearHistory,
}

/// Outcome of applying an action to a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Nothing to do; the view must not re-render.
    Unchanged,
    Updated(CalculatorState),
}

impl Transition {
    /// The snapshot to render next, falling back to `current`.
    pub fn into_state(self, current: &CalculatorState) -> CalculatorState {
        match self {
            Transition::Unchanged => current.clone(),
            Transition::Updated(next) => next,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Transition::Unchanged)
    }
}

/// Everything the form-and-history view shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculatorState {
    pub form: FormFields,
    pub result: ResultDisplay,
    pub history: HistoryList,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the snapshot that follows `action`. `self` is never modified.
    pub fn apply(&self, action: CalculatorAction, clock: &dyn Clock) -> Transition {
        match action {
            CalculatorAction::EditProductName(text) => self.with_form(|form| form.product_name = text),
            CalculatorAction::EditNumerator(text) => self.with_form(|form| form.numerator = text),
            CalculatorAction::EditDenominator(text) => self.with_form(|form| form.denominator = text),
            CalculatorAction::Calculate => self.calculate(clock),
            CalculatorAction::ClearCalculator => self.clear_calculator(),
            CalculatorAction::ClearHistory => self.clear_history(),
        }
    }

    fn with_form(&self, edit: impl FnOnce(&mut FormFields)) -> Transition {
        let mut next = self.clone();
        edit(&mut next.form);
        if next.form == self.form {
            Transition::Unchanged
        } else {
            Transition::Updated(next)
        }
    }

    fn calculate(&self, clock: &dyn Clock) -> Transition {
        let form = &self.form;
        let parsed = CalculationInput::from_raw(&form.product_name, &form.numerator, &form.denominator)
            .and_then(|input| match input {
                Some(input) => RdaCalculator::new()
                    .percentage(input.numerator, input.denominator)
                    .map(|pct| Some((input, pct))),
                None => Ok(None),
            });

        match parsed {
            Ok(None) => {
                log_debug!(LogScope::Calculator, "Form incomplete, nothing to calculate");
                Transition::Unchanged
            }
            Ok(Some((input, pct))) => {
                let mut next = self.clone();
                next.result = ResultDisplay::Percentage(pct);
                let entry = next.history.record(input, pct, clock.time_of_day());
                log_recorded(entry);
                Transition::Updated(next)
            }
            Err(error) => {
                log_warn!(LogScope::Calculator, "Calculation rejected: {}", error);
                let mut next = self.clone();
                next.result = ResultDisplay::from_error(&error);
                Transition::Updated(next)
            }
        }
    }

    fn clear_calculator(&self) -> Transition {
        Transition::Updated(Self {
            form: FormFields::default(),
            result: ResultDisplay::Empty,
            history: self.history.clone(),
        })
    }

    fn clear_history(&self) -> Transition {
        let mut next = self.clone();
        next.history.clear();
        log_debug!(LogScope::History, "Cleared {} entries", self.history.len());
        Transition::Updated(next)
    }
}

fn log_recorded(entry: &HistoryEntry) {
    logging::emit(LogLevel::Info, LogScope::History, entry.summary(), json_metadata(entry));
}

/// JSON for a log record's metadata. A serialization failure is logged and
/// the record goes out without metadata.
pub(crate) fn json_metadata<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(error) => {
            log_warn!(LogScope::History, "Could not serialize log metadata: {}", error);
            None
        }
    }
}
