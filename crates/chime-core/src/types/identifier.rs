//! Namespaced identifiers (`namespace:path`)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace assumed when the text carries none
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// An opaque namespaced name such as `minecraft:overworld`
///
/// Parsing never fails; the text is split on the first `:` and nothing else
/// is checked. Whether the name refers to anything is up to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Create an identifier from its parts
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Parse `namespace:path`, defaulting the namespace
    pub fn parse(text: &str) -> Self {
        match text.split_once(':') {
            Some((namespace, path)) if !namespace.is_empty() => Self::new(namespace, path),
            Some((_, path)) => Self::new(DEFAULT_NAMESPACE, path),
            None => Self::new(DEFAULT_NAMESPACE, text),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Identifier {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}
