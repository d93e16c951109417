//! Namespaced resource keys.
//!
//! Every tab, symbol file and live list is addressed by an `Identifier` of the
//! form `namespace:path`. Identifiers follow the resource-pack rules: lowercase
//! ASCII, digits, `_`, `.`, `-`, plus `/` inside the path. A bare path uses the
//! default namespace.

use crate::error::IdentifierError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Namespace used when a string carries no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A validated `namespace:path` pair.
///
/// Ordering is namespace first, then path, both lexical. Tabs sharing an
/// `order` value fall back to this ordering.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Build an identifier from its two parts, validating both.
    pub fn new(namespace: &str, path: &str) -> Result<Self, IdentifierError> {
        validate_namespace(namespace)?;
        validate_path(path)?;
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Parse `namespace:path`, or a bare `path` in the default namespace.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        match raw.split_once(':') {
            Some(("", path)) => Self::new(DEFAULT_NAMESPACE, path),
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, raw),
        }
    }

    // Only for compile-time constants that are covered by tests.
    pub(crate) fn from_static(namespace: &'static str, path: &'static str) -> Self {
        debug_assert!(validate_namespace(namespace).is_ok() && validate_path(path).is_ok());
        Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        }
    }

    // `<directory>/<path><extension>`; callers pass path-safe constants.
    pub(crate) fn wrap_path(&self, directory: &str, extension: &str) -> Self {
        Self {
            namespace: self.namespace.clone(),
            path: format!("{directory}/{}{extension}", self.path),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Same namespace, different path. The new path is validated.
    pub fn with_path(&self, path: &str) -> Result<Self, IdentifierError> {
        Self::new(&self.namespace, path)
    }
}

fn validate_namespace(namespace: &str) -> Result<(), IdentifierError> {
    if namespace.is_empty() {
        return Err(IdentifierError::EmptyNamespace);
    }
    if let Some(bad) = namespace.chars().find(|c| !is_namespace_char(*c)) {
        return Err(IdentifierError::InvalidNamespace {
            namespace: namespace.to_string(),
            character: bad,
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<(), IdentifierError> {
    if path.is_empty() {
        return Err(IdentifierError::EmptyPath);
    }
    if let Some(bad) = path.chars().find(|c| !is_path_char(*c)) {
        return Err(IdentifierError::InvalidPath {
            path: path.to_string(),
            character: bad,
        });
    }
    Ok(())
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
