//! State-transition layer between the domain rules and the Leptos view.

pub mod state;

pub use state::{CalculatorAction, CalculatorState, FormFields, ResultDisplay, Transition};
