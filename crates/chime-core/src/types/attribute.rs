//! Attribute trees
//!
//! The `AttributeTree` enum mirrors the host's tag format: compounds, lists
//! and typed scalars. Numeric scalars keep their exact width, but the matcher
//! only cares whether a number is integral or floating, see [`Numeric`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime state tree read from the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeTree {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    /// Ordered sequence, homogeneous by convention only
    List(Vec<AttributeTree>),
    /// Named children
    Compound(HashMap<String, AttributeTree>),
}

/// A numeric scalar widened to its comparison class
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integral(i64),
    Floating(f64),
}

impl AttributeTree {
    /// Build a compound from key/value pairs
    pub fn compound<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AttributeTree)>,
    {
        AttributeTree::Compound(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list from values
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = AttributeTree>,
    {
        AttributeTree::List(items.into_iter().collect())
    }

    /// The numeric class of this node, if it is a numeric scalar
    pub fn numeric(&self) -> Option<Numeric> {
        match self {
            AttributeTree::Byte(v) => Some(Numeric::Integral(i64::from(*v))),
            AttributeTree::Short(v) => Some(Numeric::Integral(i64::from(*v))),
            AttributeTree::Int(v) => Some(Numeric::Integral(i64::from(*v))),
            AttributeTree::Long(v) => Some(Numeric::Integral(*v)),
            AttributeTree::Float(v) => Some(Numeric::Floating(f64::from(*v))),
            AttributeTree::Double(v) => Some(Numeric::Floating(*v)),
            _ => None,
        }
    }

    pub fn is_integral(&self) -> bool {
        matches!(self.numeric(), Some(Numeric::Integral(_)))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeTree::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&HashMap<String, AttributeTree>> {
        match self {
            AttributeTree::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttributeTree]> {
        match self {
            AttributeTree::List(items) => Some(items),
            _ => None,
        }
    }

    /// Child of a compound by name
    pub fn get(&self, key: &str) -> Option<&AttributeTree> {
        self.as_compound().and_then(|map| map.get(key))
    }

    /// Whether this is a compound holding `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl From<i8> for AttributeTree {
    fn from(v: i8) -> Self {
        AttributeTree::Byte(v)
    }
}

impl From<i16> for AttributeTree {
    fn from(v: i16) -> Self {
        AttributeTree::Short(v)
    }
}

impl From<i32> for AttributeTree {
    fn from(v: i32) -> Self {
        AttributeTree::Int(v)
    }
}

impl From<i64> for AttributeTree {
    fn from(v: i64) -> Self {
        AttributeTree::Long(v)
    }
}

impl From<f32> for AttributeTree {
    fn from(v: f32) -> Self {
        AttributeTree::Float(v)
    }
}

impl From<f64> for AttributeTree {
    fn from(v: f64) -> Self {
        AttributeTree::Double(v)
    }
}

impl From<String> for AttributeTree {
    fn from(v: String) -> Self {
        AttributeTree::String(v)
    }
}

impl From<&str> for AttributeTree {
    fn from(v: &str) -> Self {
        AttributeTree::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_class() {
        assert_eq!(AttributeTree::Byte(1).numeric(), Some(Numeric::Integral(1)));
        assert_eq!(AttributeTree::Short(-2).numeric(), Some(Numeric::Integral(-2)));
        assert_eq!(AttributeTree::Long(1 << 40).numeric(), Some(Numeric::Integral(1 << 40)));
        assert_eq!(AttributeTree::Float(0.5).numeric(), Some(Numeric::Floating(0.5)));
        assert_eq!(AttributeTree::Double(2.0).numeric(), Some(Numeric::Floating(2.0)));
        assert_eq!(AttributeTree::from("x").numeric(), None);
        assert_eq!(AttributeTree::List(vec![]).numeric(), None);
    }

    #[test]
    fn test_compound_access() {
        let tree = AttributeTree::compound([
            ("Damage", AttributeTree::Int(3)),
            ("display", AttributeTree::compound([("Name", AttributeTree::from("Sword"))])),
        ]);

        assert!(tree.contains_key("Damage"));
        assert!(!tree.contains_key("Unbreakable"));
        assert_eq!(
            tree.get("display").and_then(|d| d.get("Name")).and_then(|n| n.as_str()),
            Some("Sword")
        );
        assert!(AttributeTree::Int(1).get("Damage").is_none());
    }

    #[test]
    fn test_is_integral() {
        assert!(AttributeTree::Int(0).is_integral());
        assert!(!AttributeTree::Double(0.0).is_integral());
        assert!(!AttributeTree::from("0").is_integral());
    }
}
