//! Token selection for registry construction.

use super::adaptive::AdaptiveTokens;
use crate::token::TokenBundle;

/// Reference to either a fixed bundle or an adaptive light/dark pair.
///
/// This lets callers build registries from either without caring which one
/// they were handed.
#[derive(Debug, Clone, Copy)]
pub enum TokenChoice<'a> {
    /// A bundle that doesn't change with color mode.
    Fixed(&'a TokenBundle),
    /// A pair that selects light/dark based on the detected mode.
    Adaptive(&'a AdaptiveTokens),
}

impl<'a> TokenChoice<'a> {
    /// Resolves to a concrete bundle.
    ///
    /// For adaptive pairs, detects the current color mode each call.
    pub fn resolve(&self) -> &'a TokenBundle {
        match *self {
            TokenChoice::Fixed(bundle) => bundle,
            TokenChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a TokenBundle> for TokenChoice<'a> {
    fn from(bundle: &'a TokenBundle) -> Self {
        TokenChoice::Fixed(bundle)
    }
}

impl<'a> From<&'a AdaptiveTokens> for TokenChoice<'a> {
    fn from(adaptive: &'a AdaptiveTokens) -> Self {
        TokenChoice::Adaptive(adaptive)
    }
}
