//! Mapping from slots to the class names emitted in CSS.

use crate::style::{SlotName, StyleError};
use crate::token::validate::is_identifier;

/// Decides which CSS class each slot is rendered under.
///
/// Without a prefix, a slot renders under its own class name (`menuPage`).
/// With a prefix, names become `{prefix}-{class}` (`chat-menuPage`), which
/// keeps several registries on one page from colliding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    prefix: Option<String>,
}

impl ClassNames {
    /// Class names equal to the slot names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Class names prefixed with `prefix-`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidClassPrefix`] if `prefix` is not a CSS
    /// identifier.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, StyleError> {
        let prefix = prefix.into();
        if !is_identifier(&prefix) {
            return Err(StyleError::InvalidClassPrefix { prefix });
        }
        Ok(Self {
            prefix: Some(prefix),
        })
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The class emitted for `slot`.
    pub fn class_for(&self, slot: SlotName) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}-{}", prefix, slot.class_name()),
            None => slot.class_name().to_string(),
        }
    }
}
