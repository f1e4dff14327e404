//! Tests for error-reporting prisms written by hand.

#![cfg(feature = "optics")]

use rstest::rstest;
use scopic::control::Either;
use scopic::optics::{
    EPPrism, EPScope, EPrism, FunctionEPrism, PPrism, PScope, PrismWithError, eprism, some_prism,
};

#[derive(Clone, PartialEq, Debug)]
enum Value {
    IntValue(i64),
    DoubleValue(f64),
    StringValue(String),
}

impl Value {
    const fn kind(&self) -> &'static str {
        match self {
            Self::IntValue(_) => "IntValue",
            Self::DoubleValue(_) => "DoubleValue",
            Self::StringValue(_) => "StringValue",
        }
    }
}

fn int_value() -> impl EPrism<String, Value, i64> + Clone {
    FunctionEPrism::new(
        |value: Value| match value {
            Value::IntValue(n) => Either::Right(n),
            other => Either::Left((format!("Expected IntValue, found {}", other.kind()), other)),
        },
        Value::IntValue,
    )
}

#[derive(Clone, PartialEq, Debug)]
struct Row {
    values: Vec<Value>,
}

fn first_value() -> impl EPrism<String, Row, Value> + Clone {
    eprism(
        |row: &Row| row.values.first().cloned().ok_or_else(|| "empty row".to_string()),
        |value: Value| Row {
            values: vec![value],
        },
    )
}

// =============================================================================
// Diagnostics
// =============================================================================

#[rstest]
#[case(Value::DoubleValue(1.0), "Expected IntValue, found DoubleValue")]
#[case(Value::StringValue("1".to_string()), "Expected IntValue, found StringValue")]
fn test_mismatch_names_expected_and_found(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(int_value().get_or_error(value), Err(expected.to_string()));
}

#[rstest]
fn test_match_returns_payload() {
    assert_eq!(int_value().get_or_error(Value::IntValue(7)), Ok(7));
    assert_eq!(int_value().get_option(Value::IntValue(7)), Some(7));
    assert!(int_value().is_matching(&Value::IntValue(0)));
}

#[rstest]
fn test_modify_or_error_and_set_variants() {
    assert_eq!(
        int_value().modify_or_error(Value::IntValue(1), |n| n * 10),
        Ok(Value::IntValue(10))
    );
    assert_eq!(
        int_value().modify_or_error(Value::DoubleValue(1.0), |n| n * 10),
        Err("Expected IntValue, found DoubleValue".to_string())
    );
    assert_eq!(
        int_value().modify(Value::DoubleValue(1.0), |n| n * 10),
        Value::DoubleValue(1.0)
    );
    assert_eq!(
        int_value().set_or_error(Value::IntValue(1), 2),
        Ok(Value::IntValue(2))
    );
    assert_eq!(int_value().set_option(Value::DoubleValue(1.0), 2), None);
}

#[rstest]
fn test_modify_f_with_result() {
    let checked: Result<Value, &str> =
        int_value().modify_f(Value::IntValue(i64::MAX), |n| n.checked_add(1).ok_or("overflow"));
    assert_eq!(checked, Err("overflow"));

    let untouched: Result<Value, &str> =
        int_value().modify_f(Value::DoubleValue(0.5), |n| n.checked_add(1).ok_or("overflow"));
    assert_eq!(untouched, Ok(Value::DoubleValue(0.5)));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_compose_eprism_reports_which_side_missed() {
    let first_int = first_value().compose_eprism(int_value());

    assert_eq!(
        first_int.get_or_error(Row { values: vec![] }),
        Err(Either::Left("empty row".to_string()))
    );
    assert_eq!(
        first_int.get_or_error(Row {
            values: vec![Value::DoubleValue(2.0)],
        }),
        Err(Either::Right("Expected IntValue, found DoubleValue".to_string()))
    );
    assert_eq!(
        first_int.get_or_error(Row {
            values: vec![Value::IntValue(3)],
        }),
        Ok(3)
    );
    assert_eq!(
        first_int.reverse_get(4),
        Row {
            values: vec![Value::IntValue(4)],
        }
    );
}

#[rstest]
fn test_compose_eprism_left_and_right() {
    let mismatched = Row {
        values: vec![Value::StringValue("s".to_string())],
    };

    let left = first_value().compose_eprism_left(int_value());
    let right = first_value().compose_eprism_right(int_value());

    assert_eq!(left.get_or_error(mismatched.clone()), Err(None));
    assert_eq!(
        right.get_or_error(mismatched),
        Err(Some("Expected IntValue, found StringValue".to_string()))
    );
    assert_eq!(
        left.get_or_error(Row { values: vec![] }),
        Err(Some("empty row".to_string()))
    );
}

#[rstest]
fn test_map_error() {
    let coded = int_value().map_error(|message: String| message.len());

    assert_eq!(coded.get_or_error(Value::IntValue(1)), Ok(1));
    assert_eq!(
        coded.get_or_error(Value::StringValue(String::new())),
        Err("Expected IntValue, found StringValue".len())
    );
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_to_prism_forgets_diagnostic() {
    let plain = int_value().to_prism();

    assert_eq!(plain.get_option(Value::IntValue(5)), Some(5));
    assert_eq!(plain.get_option(Value::DoubleValue(5.0)), None);
    assert_eq!(plain.reverse_get(6), Value::IntValue(6));
}

#[rstest]
fn test_prism_with_error_then_to_prism_round_trips() {
    let reported = PrismWithError::new(some_prism::<u8, u8>(), |_: &Option<u8>| "absent");

    assert_eq!(reported.get_or_error(None), Err("absent"));
    assert_eq!(reported.clone().to_prism().get_option(Some(2)), Some(2));
}

#[rstest]
fn test_to_scope_and_to_escope_build_the_variant() {
    let scope = int_value().to_scope();
    assert_eq!(scope.put(Value::StringValue("x".to_string()), 3), Value::IntValue(3));

    let escope = int_value().to_escope();
    assert_eq!(
        escope.get_or_error(Value::StringValue("x".to_string())),
        Err("Expected IntValue, found StringValue".to_string())
    );
    assert_eq!(escope.put(Value::DoubleValue(0.0), 3), Value::IntValue(3));
}

#[rstest]
fn test_structural_lifts() {
    assert_eq!(
        int_value().first().get_or_error((Value::IntValue(1), 'c')),
        Ok((1, 'c'))
    );
    assert_eq!(
        int_value().second().reverse_get(('c', 2)),
        ('c', Value::IntValue(2))
    );
    assert_eq!(
        int_value().left().get_or_error(Either::<Value, u8>::Right(9)),
        Ok(Either::Right(9))
    );
    assert!(int_value()
        .right()
        .get_or_error(Either::<u8, Value>::Right(Value::DoubleValue(1.0)))
        .is_err());
}
