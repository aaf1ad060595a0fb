//! The design-token bundle consumed by the style registry.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::name::TokenName;
use super::validate::matches_kind;
use crate::style::{SlotName, StyleError};

/// A single token value as it appears in a theme file.
///
/// Sizes are bare numbers; everything else is a CSS string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

impl From<i32> for TokenValue {
    fn from(n: i32) -> Self {
        TokenValue::Number(f64::from(n))
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Text(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Text(s)
    }
}

/// A read-only mapping from token name to value.
///
/// Bundles are plain data: they may hold names the registry does not
/// recognize, and they may be missing names it does. Nothing is checked
/// until a registry is built, at which point every token a slot references
/// must be present and well-formed.
///
/// Entries are kept sorted by name so two bundles with the same content
/// compare and serialize identically regardless of insertion order.
///
/// # Example
///
/// ```rust
/// use sidebar_styles::{TokenBundle, TokenName};
///
/// let bundle = TokenBundle::new()
///     .set(TokenName::BorderRadius, 8)
///     .set(TokenName::ColorText, "#000");
///
/// assert!(bundle.contains(TokenName::BorderRadius));
/// assert!(!bundle.contains(TokenName::FontFamily));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenBundle {
    values: BTreeMap<String, TokenValue>,
}

impl TokenBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a recognized token, returning the updated bundle for chaining.
    pub fn set<V: Into<TokenValue>>(self, name: TokenName, value: V) -> Self {
        self.set_raw(name.as_str(), value)
    }

    /// Sets a token by wire name, recognized or not.
    pub fn set_raw<V: Into<TokenValue>>(mut self, name: &str, value: V) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Returns the raw value stored for a recognized token.
    pub fn get(&self, name: TokenName) -> Option<&TokenValue> {
        self.values.get(name.as_str())
    }

    /// Returns `true` if the bundle holds a value for `name`.
    pub fn contains(&self, name: TokenName) -> bool {
        self.values.contains_key(name.as_str())
    }

    /// Number of entries, including unrecognized names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a new bundle with `overrides` layered on top of `self`.
    ///
    /// Entries in `overrides` win. Neither input is modified.
    pub fn merged(&self, overrides: &TokenBundle) -> TokenBundle {
        let mut values = self.values.clone();
        for (name, value) in &overrides.values {
            values.insert(name.clone(), value.clone());
        }
        TokenBundle { values }
    }

    /// Returns the value of `name` after checking it has the expected shape.
    ///
    /// `slot` is the slot that needs the token; it is carried into the error
    /// so a broken bundle can be traced back to the rule that tripped on it.
    ///
    /// # Errors
    ///
    /// [`StyleError::MissingToken`] if the bundle has no entry for `name`,
    /// [`StyleError::MalformedToken`] if the entry has the wrong shape.
    pub fn require(&self, name: TokenName, slot: SlotName) -> Result<&TokenValue, StyleError> {
        let value = self
            .get(name)
            .ok_or(StyleError::MissingToken { token: name, slot })?;

        if !matches_kind(name.kind(), value) {
            return Err(StyleError::MalformedToken {
                token: name,
                slot,
                expected: name.kind(),
                found: value.to_string(),
            });
        }

        Ok(value)
    }
}

impl<K: Into<String>, V: Into<TokenValue>> FromIterator<(K, V)> for TokenBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TokenBundle {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
