//! Structural matcher
//!
//! Compares a pattern document against an attribute tree. Type mismatches
//! are a plain `false`, never an error.

use super::range::parse_range;
use crate::types::{AttributeTree, Numeric, PatternDocument, PatternObject};

/// Match any pattern node against any tree node
pub fn matches(pattern: &PatternDocument, data: &AttributeTree) -> bool {
    match pattern {
        PatternDocument::Object(object) => matches_object(object, data),
        PatternDocument::Array(elements) => match data {
            AttributeTree::List(items) => matches_array(elements, items),
            _ => false,
        },
        scalar => matches_scalar(scalar, data),
    }
}

/// Match an object pattern against a compound
///
/// Every pattern key constrains the compound; `null` requires the key to be
/// absent. Keys the pattern does not mention are unconstrained.
pub fn matches_object(pattern: &PatternObject, data: &AttributeTree) -> bool {
    let compound = match data {
        AttributeTree::Compound(map) => map,
        _ => return false,
    };

    pattern.iter().all(|(key, expected)| match (expected, compound.get(key)) {
        (PatternDocument::Null, found) => found.is_none(),
        (_, None) => false,
        (_, Some(child)) => matches(expected, child),
    })
}

/// Every pattern element must match at least one list element
fn matches_array(elements: &[PatternDocument], items: &[AttributeTree]) -> bool {
    elements
        .iter()
        .all(|element| items.iter().any(|item| matches(element, item)))
}

fn matches_scalar(pattern: &PatternDocument, data: &AttributeTree) -> bool {
    if let AttributeTree::String(actual) = data {
        return matches!(pattern, PatternDocument::String(expected) if expected == actual);
    }

    let numeric = match data.numeric() {
        Some(n) => n,
        None => return false,
    };

    match (pattern, numeric) {
        (PatternDocument::Bool(expected), Numeric::Integral(value)) => (value != 0) == *expected,
        (PatternDocument::Number(expected), Numeric::Integral(value)) => match expected.as_i64() {
            Some(expected) => expected == value,
            // `3.0` is stored as a float but still names an integer
            None => expected
                .as_f64()
                .map_or(false, |expected| expected.fract() == 0.0 && expected == value as f64),
        },
        (PatternDocument::Number(expected), Numeric::Floating(value)) => {
            expected.as_f64() == Some(value)
        }
        (PatternDocument::String(text), Numeric::Integral(value)) => match parse_range::<i64>(text) {
            Ok(range) => range.contains(value),
            Err(e) => {
                log::debug!("{}, treating as mismatch", e);
                false
            }
        },
        (PatternDocument::String(text), Numeric::Floating(value)) => match parse_range::<f64>(text) {
            Ok(range) => range.contains(value),
            Err(e) => {
                log::debug!("{}, treating as mismatch", e);
                false
            }
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(entries: Vec<(&str, AttributeTree)>) -> AttributeTree {
        AttributeTree::compound(entries)
    }

    fn ints(values: &[i32]) -> AttributeTree {
        AttributeTree::list(values.iter().map(|v| AttributeTree::Int(*v)))
    }

    #[test]
    fn test_integral_float_pattern_matches_integer_data() {
        let pattern: PatternDocument = serde_json::from_str("3.0").unwrap();
        assert!(matches(&pattern, &AttributeTree::Int(3)));
        assert!(matches(&pattern, &AttributeTree::Short(3)));
        assert!(!matches(&pattern, &AttributeTree::Int(4)));

        let fractional: PatternDocument = serde_json::from_str("3.5").unwrap();
        assert!(!matches(&fractional, &AttributeTree::Int(3)));

        let damage: PatternDocument = serde_json::from_str(r#"{"Damage": 3.0}"#).unwrap();
        assert!(matches(&damage, &tree(vec![("Damage", AttributeTree::Int(3))])));
    }

    #[test]
    fn test_null_means_absent() {
        assert!(matches(&json!({"a": null}), &tree(vec![])));
        assert!(!matches(&json!({"a": null}), &tree(vec![("a", AttributeTree::Int(1))])));
    }

    #[test]
    fn test_empty_object_matches_any_compound() {
        assert!(matches(&json!({}), &tree(vec![("x", AttributeTree::Int(1))])));
        assert!(matches(&json!({}), &tree(vec![])));
    }

    #[test]
    fn test_object_requires_compound() {
        assert!(!matches(&json!({}), &AttributeTree::Int(1)));
        assert!(!matches(&json!({"a": 1}), &ints(&[1])));
    }

    #[test]
    fn test_missing_key_fails() {
        assert!(!matches(&json!({"a": 1}), &tree(vec![("b", AttributeTree::Int(1))])));
    }

    #[test]
    fn test_nested_object() {
        let data = tree(vec![(
            "display",
            tree(vec![("Name", AttributeTree::from("Excalibur")), ("Color", AttributeTree::Int(5))]),
        )]);
        assert!(matches(&json!({"display": {"Name": "Excalibur"}}), &data));
        assert!(!matches(&json!({"display": {"Name": "Durendal"}}), &data));
        assert!(!matches(&json!({"display": {"Lore": null, "Color": 6}}), &data));
    }

    #[test]
    fn test_array_semantics() {
        assert!(matches(&json!([1, 2]), &ints(&[2, 1, 3])));
        assert!(!matches(&json!([1, 4]), &ints(&[1, 2, 3])));
        assert!(matches(&json!([]), &ints(&[])));
        assert!(matches(&json!([]), &ints(&[7])));
        assert!(matches(&json!([1, 1]), &ints(&[1])));
        assert!(!matches(&json!([1]), &ints(&[])));
        assert!(!matches(&json!([1]), &AttributeTree::Int(1)));
    }

    #[test]
    fn test_array_of_objects() {
        let enchantments = AttributeTree::list([
            tree(vec![("id", AttributeTree::from("minecraft:sharpness")), ("lvl", AttributeTree::Short(5))]),
            tree(vec![("id", AttributeTree::from("minecraft:unbreaking")), ("lvl", AttributeTree::Short(3))]),
        ]);
        assert!(matches(&json!([{"id": "minecraft:unbreaking", "lvl": ">=2"}]), &enchantments));
        assert!(!matches(&json!([{"id": "minecraft:unbreaking", "lvl": ">=4"}]), &enchantments));
    }

    #[test]
    fn test_boolean_against_integral() {
        assert!(matches(&json!(true), &AttributeTree::Byte(1)));
        assert!(matches(&json!(true), &AttributeTree::Int(2)));
        assert!(matches(&json!(false), &AttributeTree::Byte(0)));
        assert!(!matches(&json!(false), &AttributeTree::Byte(1)));
        assert!(!matches(&json!(true), &AttributeTree::Double(1.0)));
        assert!(!matches(&json!(true), &AttributeTree::from("true")));
    }

    #[test]
    fn test_number_equality() {
        assert!(matches(&json!(3), &AttributeTree::Long(3)));
        assert!(matches(&json!(3), &AttributeTree::Short(3)));
        assert!(!matches(&json!(4), &AttributeTree::Int(3)));
        assert!(matches(&json!(2.5), &AttributeTree::Double(2.5)));
        assert!(matches(&json!(2), &AttributeTree::Double(2.0)));
        assert!(matches(&json!(0.5), &AttributeTree::Float(0.5)));
        assert!(!matches(&json!(2.5), &AttributeTree::Int(2)));
        assert!(!matches(&json!(1), &AttributeTree::from("1")));
    }

    #[test]
    fn test_string_equality() {
        assert!(matches(&json!("abc"), &AttributeTree::from("abc")));
        assert!(!matches(&json!("abc"), &AttributeTree::from("abd")));
        assert!(!matches(&json!("1..3"), &AttributeTree::from("2")));
    }

    #[test]
    fn test_range_text_against_numbers() {
        assert!(matches(&json!("1..3"), &AttributeTree::Int(2)));
        assert!(matches(&json!("1..3"), &AttributeTree::Double(2.0)));
        assert!(matches(&json!("[0..1)"), &AttributeTree::Float(0.5)));
        assert!(!matches(&json!("1..3"), &AttributeTree::Int(4)));
        assert!(matches(&json!("7"), &AttributeTree::Byte(7)));
        assert!(!matches(&json!("1.5"), &AttributeTree::Int(1)));
        assert!(!matches(&json!("abc"), &AttributeTree::Int(1)));
    }

    #[test]
    fn test_null_scalar_never_matches() {
        assert!(!matches(&json!(null), &AttributeTree::Int(0)));
    }

    #[test]
    fn test_inputs_untouched() {
        let pattern = json!({"a": [1, {"b": "0..2"}], "c": null});
        let data = tree(vec![("a", AttributeTree::list([AttributeTree::Int(1), tree(vec![("b", AttributeTree::Int(1))])]))]);
        let (p, d) = (pattern.clone(), data.clone());

        let first = matches(&pattern, &data);
        let second = matches(&pattern, &data);

        assert!(first);
        assert_eq!(first, second);
        assert_eq!(pattern, p);
        assert_eq!(data, d);
    }
}
