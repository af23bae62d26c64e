//! Property-based tests for the recognizer.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use floatdfa::core::{classify, FloatState, SymbolClass};
use floatdfa::{recognize, Recognizer, TransitionTable};
use proptest::prelude::*;
use regex::Regex;

const LITERAL: &str = r"^([+-]?[0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?$";

prop_compose! {
    fn valid_literal()(
        mantissa in r"[+-]?[0-9]{1,6}(\.[0-9]{1,6})?|\.[0-9]{1,6}",
        exponent in r"([eE][+-]?[0-9]{1,3})?",
    ) -> String {
        format!("{mantissa}{exponent}")
    }
}

prop_compose! {
    fn near_literal()(s in r"[+\-0-9.eE]{0,12}") -> String {
        s
    }
}

fn outside_alphabet() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must be outside the alphabet", |c| {
        classify(*c) == SymbolClass::Invalid
    })
}

proptest! {
    #[test]
    fn generated_literals_are_accepted(input in valid_literal()) {
        prop_assert!(recognize(&input), "{} should be accepted", input);
    }

    #[test]
    fn language_matches_literal_regex(input in near_literal()) {
        let literal = Regex::new(LITERAL).unwrap();
        prop_assert_eq!(recognize(&input), literal.is_match(&input));
    }

    #[test]
    fn recognize_is_idempotent(input in any::<String>()) {
        let recognizer = Recognizer::new();
        prop_assert_eq!(recognizer.recognize(&input), recognizer.recognize(&input));
    }

    #[test]
    fn foreign_character_anywhere_rejects(
        input in valid_literal(),
        foreign in outside_alphabet(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut chars: Vec<char> = input.chars().collect();
        let position = at.index(chars.len() + 1);
        chars.insert(position, foreign);
        let tainted: String = chars.into_iter().collect();

        prop_assert!(!recognize(&tainted), "{:?} should be rejected", tainted);
    }

    #[test]
    fn trace_agrees_with_recognize(input in near_literal()) {
        let recognizer = Recognizer::new();
        let trace = recognizer.trace(&input);
        prop_assert_eq!(trace.accepted(), recognizer.recognize(&input));
    }

    #[test]
    fn trace_never_exceeds_input_length(input in any::<String>()) {
        let trace = Recognizer::new().trace(&input);
        prop_assert!(trace.steps().len() <= input.chars().count());
        prop_assert_eq!(trace.path()[0], FloatState::Start);
    }

    #[test]
    fn loaded_table_recognizes_same_language(input in near_literal()) {
        let json = TransitionTable::FLOATING_POINT.to_json().unwrap();
        let loaded = Recognizer::with_table(TransitionTable::from_json(&json).unwrap());
        prop_assert_eq!(loaded.recognize(&input), recognize(&input));
    }

    #[test]
    fn sign_followed_by_point_is_rejected(
        sign in "[+-]",
        rest in r"[0-9.eE+\-]{0,8}",
    ) {
        let input = format!("{sign}.{rest}");
        prop_assert!(!recognize(&input));
    }
}
