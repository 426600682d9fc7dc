//! Tagged view over a raw store value.
//!
//! Example: "445" => Node::Reference { index: 445, raw: "445" }
//!
//! Every all-digit string is treated as a reference. The producer emits
//! literal strings by reference too, so a numeric-looking literal cannot be
//! told apart from a pointer here.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'v> {
    /// Digit-string pointer into the store. `index` saturates at `usize::MAX`
    /// so oversized indices are simply out of bounds.
    Reference { index: usize, raw: &'v str },
    Mapping(&'v Map<String, Value>),
    Sequence(&'v [Value]),
    Literal(&'v Value),
}

impl<'v> Node<'v> {
    pub fn classify(value: &'v Value) -> Self {
        match value {
            Value::String(s) if is_reference(s) => Node::Reference {
                index: s.parse().unwrap_or(usize::MAX),
                raw: s,
            },
            Value::Object(map) => Node::Mapping(map),
            Value::Array(items) => Node::Sequence(items),
            other => Node::Literal(other),
        }
    }
}

/// True for a non-empty string made only of ASCII digits.
pub fn is_reference(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Whether a value carries content: null, false, zero, and empty
/// strings/arrays/objects do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn digit_strings_are_references() {
        let v = json!("445");
        assert_eq!(
            Node::classify(&v),
            Node::Reference {
                index: 445,
                raw: "445"
            }
        );

        let padded = json!("007");
        assert_eq!(
            Node::classify(&padded),
            Node::Reference { index: 7, raw: "007" }
        );
    }

    #[test]
    fn non_digit_strings_and_scalars_are_literals() {
        for v in [
            json!(""),
            json!("12a"),
            json!("-3"),
            json!("1.5"),
            json!(" 4"),
            json!(42),
            json!(true),
            json!(null),
        ] {
            assert!(matches!(Node::classify(&v), Node::Literal(_)), "{v}");
        }
    }

    #[test]
    fn containers_keep_their_shape() {
        let m = json!({"a": "1"});
        assert!(matches!(Node::classify(&m), Node::Mapping(map) if map.len() == 1));

        let s = json!(["1", 2]);
        assert!(matches!(Node::classify(&s), Node::Sequence(items) if items.len() == 2));
    }

    #[test]
    fn truthiness() {
        for v in [json!("x"), json!(1), json!(-0.5), json!(true), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&v), "{v}");
        }
        for v in [json!(""), json!(0), json!(0.0), json!(false), json!([]), json!({}), json!(null)] {
            assert!(!is_truthy(&v), "{v}");
        }
    }

    #[test]
    fn oversized_index_saturates() {
        let v = json!("999999999999999999999999999999");
        assert!(matches!(
            Node::classify(&v),
            Node::Reference { index: usize::MAX, .. }
        ));
    }
}
