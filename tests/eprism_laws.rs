//! Property-based tests for error-reporting prism laws.
//!
//! 1. **ReverseGet Law**: `eprism.get_option(eprism.reverse_get(a)) == Some(a)`
//! 2. **GetReverse Law**: a miss hands back the source unchanged; a hit
//!    rebuilt with `reverse_get` equals the source
//! 3. **Error consistency**: `get_or_error(s).ok() == get_option(s)`

#![cfg(feature = "laws")]

use proptest::prelude::*;
use scopic::control::Either;
use scopic::optics::{EPPrism, EPrism, EPrismLaws, eprism, either_right_prism, PrismWithError};

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Value {
    IntValue(i64),
    DoubleValue(f64),
    StringValue(String),
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::IntValue),
        (-1.0e6..1.0e6_f64).prop_map(Value::DoubleValue),
        "[a-z]{0,6}".prop_map(Value::StringValue),
    ]
}

fn int_value() -> impl EPrism<String, Value, i64> + Clone {
    eprism(
        |value: &Value| match value {
            Value::IntValue(n) => Ok(*n),
            Value::DoubleValue(_) => Err("Expected IntValue, found DoubleValue".to_string()),
            Value::StringValue(_) => Err("Expected IntValue, found StringValue".to_string()),
        },
        Value::IntValue,
    )
}

fn narrow() -> impl EPrism<String, i64, i32> + Clone {
    eprism(
        |n: &i64| i32::try_from(*n).map_err(|error| format!("{n}: {error}")),
        i64::from,
    )
}

fn narrow_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        value_strategy(),
        any::<i32>().prop_map(|n| Value::IntValue(i64::from(n))),
    ]
}

fn digits() -> impl EPrism<String, String, u32> + Clone {
    eprism(
        |text: &String| text.parse::<u32>().map_err(|error| error.to_string()),
        |n: u32| n.to_string(),
    )
}

// =============================================================================
// Variant prism
// =============================================================================

proptest! {
    #[test]
    fn prop_reverse_get_law_variant(n in any::<i64>()) {
        let law = int_value().reverse_get_law(n);
        prop_assert_eq!(law.lhs, law.rhs);
    }

    #[test]
    fn prop_get_reverse_law_variant(value in value_strategy()) {
        let law = int_value().get_reverse_law(value);
        prop_assert_eq!(law.lhs, law.rhs);
    }

    #[test]
    fn prop_error_consistency_variant(value in value_strategy()) {
        prop_assert!(int_value().error_consistency_law(value).holds());
    }

    #[test]
    fn prop_miss_always_carries_diagnostic(value in value_strategy()) {
        match int_value().get_or_modify_with_error(value.clone()) {
            Either::Right(n) => prop_assert_eq!(value, Value::IntValue(n)),
            Either::Left((error, fallback)) => {
                prop_assert!(error.starts_with("Expected IntValue, found "));
                prop_assert_eq!(fallback, value);
            }
        }
    }
}

// =============================================================================
// Parsing prism
// =============================================================================

proptest! {
    #[test]
    fn prop_reverse_get_law_parse(n in any::<u32>()) {
        prop_assert!(digits().reverse_get_law(n).holds());
    }

    #[test]
    fn prop_error_consistency_parse(text in "[0-9a-z]{0,6}") {
        prop_assert!(digits().error_consistency_law(text).holds());
    }
}

// =============================================================================
// Derived prisms
// =============================================================================

proptest! {
    #[test]
    fn prop_laws_map_error(value in value_strategy(), n in any::<i64>()) {
        let counted = int_value().map_error(|error: String| error.len());
        prop_assert!(counted.reverse_get_law(n).holds());
        prop_assert!(counted.get_reverse_law(value.clone()).holds());
        prop_assert!(counted.error_consistency_law(value).holds());
    }

    #[test]
    fn prop_laws_prism_with_error(
        source in prop_oneof![
            any::<bool>().prop_map(Either::Left),
            any::<i8>().prop_map(Either::Right),
        ],
        n in any::<i8>(),
    ) {
        let right = PrismWithError::new(
            either_right_prism::<bool, i8, i8>(),
            |fallback: &Either<bool, i8>| format!("{fallback:?} is not Right"),
        );
        prop_assert!(right.reverse_get_law(n).holds());
        prop_assert!(right.get_reverse_law(source).holds());
        prop_assert!(right.error_consistency_law(source).holds());
    }
}

// =============================================================================
// Composed prisms
// =============================================================================

proptest! {
    #[test]
    fn prop_laws_compose_eprism(value in narrow_value_strategy(), n in any::<i32>()) {
        let composed = int_value().compose_eprism(narrow());
        prop_assert!(composed.reverse_get_law(n).holds());
        prop_assert!(composed.get_reverse_law(value.clone()).holds());
        prop_assert!(composed.error_consistency_law(value).holds());
    }

    #[test]
    fn prop_laws_compose_eprism_projections(value in narrow_value_strategy(), n in any::<i32>()) {
        let left = int_value().compose_eprism_left(narrow());
        prop_assert!(left.reverse_get_law(n).holds());
        prop_assert!(left.get_reverse_law(value.clone()).holds());
        prop_assert!(left.error_consistency_law(value.clone()).holds());

        let right = int_value().compose_eprism_right(narrow());
        prop_assert!(right.reverse_get_law(n).holds());
        prop_assert!(right.get_reverse_law(value.clone()).holds());
        prop_assert!(right.error_consistency_law(value).holds());
    }

    #[test]
    fn prop_compose_eprism_tags_failing_side(value in narrow_value_strategy()) {
        let composed = int_value().compose_eprism(narrow());
        match (&value, composed.get_or_error(value.clone())) {
            (Value::IntValue(n), Ok(narrowed)) => prop_assert_eq!(*n, i64::from(narrowed)),
            (Value::IntValue(n), Err(error)) => {
                prop_assert!(i32::try_from(*n).is_err());
                prop_assert!(error.is_right());
            }
            (_, outcome) => prop_assert!(outcome.is_err_and(|error| error.is_left())),
        }
    }
}
