use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rda_calculator::application::{CalculatorAction, CalculatorState, FormFields, Transition};
use rda_calculator::domain::calculator::{Amount, RdaCalculator};
use rda_calculator::domain::errors::ComputationError;
use rda_calculator::domain::time::{FixedClock, TimeOfDay};

fn clock() -> FixedClock {
    FixedClock(TimeOfDay::new(0, 0, 0).unwrap())
}

#[quickcheck]
fn positive_inputs_format_to_one_decimal(numerator: u32, denominator: u32) -> TestResult {
    if numerator == 0 || denominator == 0 {
        return TestResult::discard();
    }
    let (n, d) = (numerator as f64, denominator as f64);
    let pct = RdaCalculator::new()
        .percentage(Amount::new(n).unwrap(), Amount::new(d).unwrap())
        .unwrap();
    TestResult::from_bool(pct.to_string() == format!("{:.1}%", n / d * 100.0))
}

#[quickcheck]
fn zero_denominator_never_appends(numerator: i32, runs: u8) -> bool {
    let mut state = CalculatorState {
        form: FormFields::new("Base", "1", "3"),
        ..CalculatorState::new()
    };
    for _ in 0..runs % 8 {
        state = state.apply(CalculatorAction::Calculate, &clock()).into_state(&state);
    }
    let before = state.history.clone();
    state.form = FormFields::new("Zero", &numerator.to_string(), "0");

    match state.apply(CalculatorAction::Calculate, &clock()) {
        Transition::Updated(next) => next.result.is_error() && next.history == before,
        Transition::Unchanged => false,
    }
}

#[quickcheck]
fn successful_calculation_grows_history_by_one(numerator: u16, denominator: u16) -> TestResult {
    if denominator == 0 {
        return TestResult::discard();
    }
    let state = CalculatorState {
        form: FormFields::new("Item", &numerator.to_string(), &denominator.to_string()),
        ..CalculatorState::new()
    };
    let state = state.apply(CalculatorAction::Calculate, &clock()).into_state(&state);
    let next = state.apply(CalculatorAction::Calculate, &clock()).into_state(&state);

    TestResult::from_bool(
        next.history.len() == state.history.len() + 1
            && next.history.get(0).map(|e| e.id) == Some(1)
            && next.history.get(1) == state.history.get(0),
    )
}

#[test]
fn decimal_inputs_are_accepted() {
    let pct = RdaCalculator::new()
        .percentage(Amount::new(0.75).unwrap(), Amount::new(2.5).unwrap())
        .unwrap();
    assert_eq!(pct.to_string(), "30.0%");
}

#[test]
fn denominator_zero_reports_division_error() {
    let err = RdaCalculator::new()
        .percentage(Amount::new(100.0).unwrap(), Amount::new(0.0).unwrap())
        .unwrap_err();
    assert_eq!(err, ComputationError::DivisionByZero);
}
