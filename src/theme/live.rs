//! A swappable handle on the registry currently in use.

use std::sync::{Arc, PoisonError, RwLock};

use super::choice::TokenChoice;
use crate::style::{StyleError, StyleRegistry};

/// Holds the registry consumers should render with, and replaces it whole
/// when the theme changes.
///
/// Readers take a snapshot with [`LiveStyles::current`] and keep using it for
/// as long as they like; a switch never changes a registry someone already
/// holds. A new registry is fully built before it is published, and a failed
/// build leaves the previous one in place.
///
/// # Example
///
/// ```rust
/// use sidebar_styles::{LiveStyles, TokenBundle, TokenChoice};
///
/// let light = TokenBundle::default_light();
/// let dark = TokenBundle::default_dark();
///
/// let live = LiveStyles::new(TokenChoice::from(&light)).unwrap();
/// let before = live.current();
///
/// live.switch(TokenChoice::from(&dark)).unwrap();
///
/// // The old snapshot is untouched; new readers see the dark registry.
/// assert_ne!(before, live.current());
/// ```
#[derive(Debug)]
pub struct LiveStyles {
    current: RwLock<Arc<StyleRegistry>>,
}

impl LiveStyles {
    /// Builds the initial registry.
    pub fn new(tokens: TokenChoice<'_>) -> Result<Self, StyleError> {
        let registry = StyleRegistry::build(tokens.resolve())?;
        Ok(Self::from_registry(registry))
    }

    /// Wraps an already built registry.
    pub fn from_registry(registry: StyleRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// A snapshot of the registry in use right now.
    pub fn current(&self) -> Arc<StyleRegistry> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Builds a registry from `tokens` and publishes it, returning the one it
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns the build error and keeps the current registry if `tokens`
    /// is missing or has malformed entries.
    pub fn switch(&self, tokens: TokenChoice<'_>) -> Result<Arc<StyleRegistry>, StyleError> {
        let next = match StyleRegistry::build(tokens.resolve()) {
            Ok(registry) => Arc::new(registry),
            Err(err) => {
                tracing::warn!(error = %err, "rejected theme switch; keeping current styles");
                return Err(err);
            }
        };

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        tracing::debug!(changed = previous != *guard, "switched style registry");
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SlotName;
    use crate::token::{TokenBundle, TokenName};

    #[test]
    fn test_switch_publishes_new_registry() {
        let light = TokenBundle::default_light();
        let dark = TokenBundle::default_dark();
        let live = LiveStyles::new(TokenChoice::from(&light)).unwrap();

        let previous = live.switch(TokenChoice::from(&dark)).unwrap();

        assert_eq!(
            previous.get(SlotName::MenuPage).base().get("background-color"),
            Some("#ffffff")
        );
        assert_eq!(
            live.current()
                .get(SlotName::MenuPage)
                .base()
                .get("background-color"),
            Some("#141414")
        );
    }

    #[test]
    fn test_snapshot_survives_switch() {
        let light = TokenBundle::default_light();
        let dark = TokenBundle::default_dark();
        let live = LiveStyles::new(TokenChoice::from(&light)).unwrap();

        let snapshot = live.current();
        live.switch(TokenChoice::from(&dark)).unwrap();

        assert_eq!(*snapshot, StyleRegistry::build(&light).unwrap());
    }

    #[test]
    fn test_failed_switch_keeps_current() {
        let light = TokenBundle::default_light();
        let live = LiveStyles::new(TokenChoice::from(&light)).unwrap();
        let before = live.current();

        let broken = light.merged(&TokenBundle::new().set(TokenName::ColorPrimary, "blurple"));
        let err = live.switch(TokenChoice::from(&broken)).unwrap_err();

        assert!(matches!(
            err,
            StyleError::MalformedToken {
                token: TokenName::ColorPrimary,
                ..
            }
        ));
        assert!(Arc::ptr_eq(&before, &live.current()));
    }

    #[test]
    fn test_new_fails_fast() {
        let empty = TokenBundle::new();
        assert!(LiveStyles::new(TokenChoice::from(&empty)).is_err());
    }
}
