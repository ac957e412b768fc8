//! Property-based tests for the calculator state machine.
//!
//! These tests use proptest to check that the buffer and chain invariants
//! hold across arbitrary sequences of key presses.

use calctty::calculator::{Calculator, ERROR_MARKER};
use calctty::input::Input;
use proptest::prelude::*;

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => (0u8..10).prop_map(|d| Input::digit(d).unwrap()),
        1 => Just(Input::ADD),
        1 => Just(Input::SUBTRACT),
        1 => Just(Input::MULTIPLY),
        1 => Just(Input::DIVIDE),
        1 => Just(Input::EQUALS),
        1 => Just(Input::BACKSPACE),
        1 => Just(Input::CLEAR),
    ]
}

fn press_all(inputs: &[Input]) -> Calculator {
    let mut calc = Calculator::new();
    for input in inputs {
        let _ = calc.handle(*input);
    }
    calc
}

proptest! {
    #[test]
    fn digits_concatenate(digits in prop::collection::vec(0u8..10, 1..20)) {
        let calc = press_all(
            &digits.iter().map(|d| Input::digit(*d).unwrap()).collect::<Vec<_>>(),
        );
        let typed: String = digits.iter().map(|d| d.to_string()).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(calc.buffer(), expected);
    }

    #[test]
    fn buffer_is_always_a_number_or_the_error_marker(
        inputs in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let calc = press_all(&inputs);
        prop_assert!(!calc.buffer().is_empty());
        if calc.is_error() {
            prop_assert_eq!(calc.buffer(), ERROR_MARKER);
        } else {
            let value = calc.buffer().parse::<f64>();
            prop_assert!(value.is_ok_and(f64::is_finite), "buffer {:?}", calc.buffer());
        }
    }

    #[test]
    fn total_is_zero_outside_a_chain(
        inputs in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let calc = press_all(&inputs);
        if calc.pending_operator().is_none() {
            prop_assert_eq!(calc.running_total(), 0.0);
        }
    }

    #[test]
    fn clear_resets_everything(
        inputs in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let mut calc = press_all(&inputs);
        calc.clear();
        prop_assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn backspace_never_empties_the_buffer(
        inputs in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let mut calc = press_all(&inputs);
        // each press removes at least one character
        let presses = calc.buffer().len();
        for _ in 0..presses {
            calc.backspace();
            prop_assert!(!calc.buffer().is_empty());
        }
        prop_assert_eq!(calc.buffer(), "0");
    }

    #[test]
    fn additions_chain_left_to_right(terms in prop::collection::vec(1u32..100_000, 1..8)) {
        let mut calc = Calculator::new();
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                calc.handle(Input::ADD).unwrap();
            }
            for c in term.to_string().chars() {
                let d = c.to_digit(10).unwrap() as u8;
                calc.handle(Input::digit(d).unwrap()).unwrap();
            }
        }
        calc.handle(Input::ADD).unwrap();
        calc.handle(Input::digit(0).unwrap()).unwrap();
        calc.handle(Input::EQUALS).unwrap();

        let sum: u64 = terms.iter().map(|t| u64::from(*t)).sum();
        prop_assert_eq!(calc.buffer(), sum.to_string());
    }
}
