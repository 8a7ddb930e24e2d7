use rda_calculator::application::{CalculatorAction, CalculatorState, FormFields};
use rda_calculator::domain::time::{FixedClock, TimeOfDay};

fn run(state: &CalculatorState, product: &str, numerator: &str, denominator: &str, second: u32) -> CalculatorState {
    let state = CalculatorState {
        form: FormFields::new(product, numerator, denominator),
        ..state.clone()
    };
    let clock = FixedClock(TimeOfDay::from_seconds(12 * 3600 + second));
    state.apply(CalculatorAction::Calculate, &clock).into_state(&state)
}

#[test]
fn newest_entry_comes_first() {
    let state = CalculatorState::new();
    let state = run(&state, "Vitamin C Tablet", "60", "90", 0);
    let state = run(&state, "Calcium Chew", "500", "1000", 1);
    let state = run(&state, "Bad Input", "5", "0", 2);
    let state = run(&state, "Zinc", "5.5", "11", 3);

    let lines: Vec<String> = state
        .history
        .iter()
        .map(|entry| format!("{} {}", entry.summary(), entry.time_label()))
        .collect();

    insta::assert_snapshot!(lines.join("\n"), @r###"
    Zinc: 5.5 / 11 = 50.0% RDA (12:00:03)
    Calcium Chew: 500 / 1000 = 50.0% RDA (12:00:01)
    Vitamin C Tablet: 60 / 90 = 66.7% RDA (12:00:00)
    "###);
}

#[test]
fn huge_and_tiny_amounts_print_in_exponent_form() {
    let state = run(&CalculatorState::new(), "A", "1e21", "1e21", 0);
    let state = run(&state, "B", "0.00002", "0.0001", 1);

    let lines: Vec<String> = state.history.iter().map(|entry| entry.summary()).collect();
    assert_eq!(lines, ["B: 2e-05 / 0.0001 = 20.0% RDA", "A: 1e+21 / 1e+21 = 100.0% RDA"]);
}

#[test]
fn each_success_adds_exactly_one_entry_at_the_front() {
    let mut state = CalculatorState::new();
    for i in 1..=5u32 {
        let before = state.history.len();
        state = run(&state, &format!("Item {i}"), &i.to_string(), "10", i);
        assert_eq!(state.history.len(), before + 1);
        assert_eq!(state.history.get(0).unwrap().product_name.as_str(), format!("Item {i}"));
    }
}

#[test]
fn entry_serializes_for_logging() {
    let state = run(&CalculatorState::new(), "Vitamin C Tablet", "60", "90", 0);
    let entry = state.history.latest().unwrap();

    let json = serde_json::to_string_pretty(entry).unwrap();
    insta::assert_snapshot!(json, @r###"
    {
      "id": 0,
      "product_name": "Vitamin C Tablet",
      "numerator": 60.0,
      "denominator": 90.0,
      "result": 66.66666666666666,
      "timestamp": {
        "hour": 12,
        "minute": 0,
        "second": 0
      }
    }
    "###);
}
