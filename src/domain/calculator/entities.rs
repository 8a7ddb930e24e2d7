use serde::Serialize;
use std::collections::VecDeque;

use super::value_objects::{Amount, Percentage, ProductName};
use crate::domain::errors::{AmountField, ComputationResult};
use crate::domain::time::TimeOfDay;

/// Fully populated form values, ready for the calculator service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationInput {
    pub product_name: ProductName,
    pub numerator: Amount,
    pub denominator: Amount,
}

impl CalculationInput {
    /// Builds an input from raw field text.
    ///
    /// Returns `Ok(None)` when any field is blank, before looking at the
    /// numbers, so an incomplete form is never reported as an error.
    pub fn from_raw(product_name: &str, numerator: &str, denominator: &str) -> ComputationResult<Option<Self>> {
        let Some(product_name) = ProductName::new(product_name) else {
            return Ok(None);
        };
        if numerator.trim().is_empty() || denominator.trim().is_empty() {
            return Ok(None);
        }

        let numerator = Amount::parse(AmountField::Numerator, numerator)?;
        let denominator = Amount::parse(AmountField::Denominator, denominator)?;
        Ok(numerator
            .zip(denominator)
            .map(|(numerator, denominator)| Self { product_name, numerator, denominator }))
    }
}

/// One completed calculation, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub product_name: ProductName,
    pub numerator: Amount,
    pub denominator: Amount,
    pub result: Percentage,
    pub timestamp: TimeOfDay,
}

impl HistoryEntry {
    /// `60 / 90 = 66.7% RDA`
    pub fn calculation_text(&self) -> String {
        format!("{} / {} = {} RDA", self.numerator, self.denominator, self.result)
    }

    /// `Vitamin C Tablet: 60 / 90 = 66.7% RDA`
    pub fn summary(&self) -> String {
        format!("{}: {}", self.product_name, self.calculation_text())
    }

    /// `(14:03:09)`
    pub fn time_label(&self) -> String {
        format!("({})", self.timestamp)
    }
}

/// Completed calculations, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoryList {
    entries: VecDeque<HistoryEntry>,
    #[serde(skip)]
    next_id: u64,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a new entry and returns it.
    pub fn record(&mut self, input: CalculationInput, result: Percentage, timestamp: TimeOfDay) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: self.next_id,
            product_name: input.product_name,
            numerator: input.numerator,
            denominator: input.denominator,
            result,
            timestamp,
        };
        self.next_id += 1;
        self.entries.push_front(entry);
        &self.entries[0]
    }

    /// Drops every entry. Ids keep counting so render keys stay unique.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ComputationError;

    #[test]
    fn blank_fields_are_incomplete_not_invalid() {
        assert_eq!(CalculationInput::from_raw("", "abc", "1"), Ok(None));
        assert_eq!(CalculationInput::from_raw("Milk", " ", "abc"), Ok(None));
        assert_eq!(CalculationInput::from_raw("Milk", "abc", ""), Ok(None));
    }

    #[test]
    fn garbage_in_a_filled_field_is_invalid() {
        let err = CalculationInput::from_raw("Milk", "12", "x").unwrap_err();
        assert!(matches!(err, ComputationError::InvalidNumber { field: AmountField::Denominator, .. }));
    }

    #[test]
    fn ids_survive_a_clear() {
        let mut history = HistoryList::new();
        let input = CalculationInput::from_raw("Milk", "1", "2").unwrap().unwrap();
        let result = Percentage::from_finite(50.0).unwrap();
        let at = TimeOfDay::new(8, 0, 0).unwrap();

        history.record(input.clone(), result, at);
        history.clear();
        let id = history.record(input, result, at).id;

        assert_eq!(id, 1);
        assert_eq!(history.len(), 1);
    }
}
