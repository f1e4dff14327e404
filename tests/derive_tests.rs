//! Tests for the `Lenses`, `Prisms` and `EPrisms` derive macros.

#![cfg(feature = "derive")]

use rstest::rstest;
use scopic::control::Either;
use scopic::optics::{
    EPPrism, LensScopeExtension, PLens, PPrism, PScope, PrismScopeExtension,
};
use scopic_derive::{EPrisms, Lenses, Prisms};

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug, Prisms, EPrisms)]
enum Value {
    IntValue(i64),
    DoubleValue(f64),
    StringValue(String),
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Cell {
    name: String,
    value: Value,
}

#[derive(Clone, PartialEq, Debug, Prisms, EPrisms)]
enum Event {
    Started,
    Moved { x: i32, y: i32 },
    Renamed { title: String },
    Resized(u32, u32),
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Tagged<T> {
    tag: String,
    payload: T,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Reply<T> {
    Done(T),
    Pending,
}

// =============================================================================
// Lenses
// =============================================================================

#[rstest]
fn test_lenses_get_and_set() {
    let cell = Cell {
        name: "a1".to_string(),
        value: Value::IntValue(1),
    };

    assert_eq!(Cell::name_lens().get(&cell), "a1");
    assert_eq!(
        Cell::value_lens().set(cell, Value::DoubleValue(2.5)).value,
        Value::DoubleValue(2.5)
    );
}

#[rstest]
fn test_generic_lens() {
    let tagged = Tagged {
        tag: "x".to_string(),
        payload: vec![1, 2],
    };

    let modified = Tagged::<Vec<i32>>::payload_lens().modify(tagged, |mut values| {
        values.push(3);
        values
    });

    assert_eq!(modified.payload, vec![1, 2, 3]);
    assert_eq!(Tagged::<Vec<i32>>::tag_lens().get(&modified), "x");
}

// =============================================================================
// Prisms
// =============================================================================

#[rstest]
#[case(Value::IntValue(3), Some(3))]
#[case(Value::DoubleValue(3.0), None)]
#[case(Value::StringValue("3".to_string()), None)]
fn test_variant_prism(#[case] value: Value, #[case] expected: Option<i64>) {
    assert_eq!(Value::int_value_prism().get_option(value), expected);
}

#[rstest]
fn test_struct_and_unit_variants() {
    assert_eq!(
        Event::moved_prism().get_option(Event::Moved { x: 1, y: 2 }),
        Some((1, 2))
    );
    assert_eq!(Event::moved_prism().reverse_get((3, 4)), Event::Moved { x: 3, y: 4 });
    assert_eq!(Event::started_prism().get_option(Event::Started), Some(()));
    assert_eq!(Event::started_prism().reverse_get(()), Event::Started);
    assert_eq!(Event::resized_prism().get_option(Event::Started), None);
}

#[rstest]
fn test_single_field_struct_variant_focuses_the_field() {
    let renamed = Event::Renamed {
        title: "draft".to_string(),
    };

    assert_eq!(
        Event::renamed_prism().get_option(renamed.clone()),
        Some("draft".to_string())
    );
    assert_eq!(Event::renamed_prism().reverse_get("draft".to_string()), renamed);
    assert_eq!(
        Event::renamed_eprism().get_or_error(Event::Started),
        Err("Expected Renamed, found Started".to_string())
    );
}

#[rstest]
fn test_generic_prism() {
    assert_eq!(Reply::<char>::done_prism().get_option(Reply::Done('y')), Some('y'));
    assert_eq!(
        Reply::<char>::done_prism().get_or_modify(Reply::Pending),
        Either::Left(Reply::Pending)
    );
}

// =============================================================================
// EPrisms
// =============================================================================

#[rstest]
#[case(Value::DoubleValue(1.5), "Expected IntValue, found DoubleValue")]
#[case(Value::StringValue("x".to_string()), "Expected IntValue, found StringValue")]
fn test_eprism_diagnostic_names_both_variants(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(
        Value::int_value_eprism().get_or_error(value),
        Err(expected.to_string())
    );
}

#[rstest]
fn test_eprism_match_and_fallback() {
    assert_eq!(Value::int_value_eprism().get_or_error(Value::IntValue(4)), Ok(4));

    match Event::resized_eprism().get_or_modify_with_error(Event::Moved { x: 0, y: 0 }) {
        Either::Left((error, fallback)) => {
            assert_eq!(error, "Expected Resized, found Moved");
            assert_eq!(fallback, Event::Moved { x: 0, y: 0 });
        }
        Either::Right(payload) => panic!("unexpected match: {payload:?}"),
    }
}

// =============================================================================
// Derived optics composed into scopes
// =============================================================================

#[rstest]
fn test_lens_prism_scope_from_derived_optics() {
    let text = Cell::value_lens().compose_scope(Value::string_value_prism().to_scope());
    let cell = Cell {
        name: "b2".to_string(),
        value: Value::IntValue(0),
    };

    assert_eq!(text.get_option(cell.clone()), None);

    let written = text.put(cell, "hello".to_string());
    assert_eq!(written.value, Value::StringValue("hello".to_string()));
    assert_eq!(written.name, "b2");
}

#[rstest]
fn test_lens_eprism_escope_from_derived_optics() {
    use scopic::optics::EPScope;

    let number = Cell::value_lens().compose_escope(Value::int_value_eprism().to_escope());
    let cell = Cell {
        name: "c3".to_string(),
        value: Value::StringValue("x".to_string()),
    };

    assert_eq!(
        number.get_or_error(cell.clone()),
        Err("Expected IntValue, found StringValue".to_string())
    );
    assert_eq!(number.put(cell, 9).value, Value::IntValue(9));
}
