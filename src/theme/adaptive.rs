//! Token bundles that respond to the system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use crate::token::TokenBundle;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A pair of token bundles, one per color mode.
///
/// # Example
///
/// ```rust
/// use sidebar_styles::{AdaptiveTokens, ColorMode, TokenBundle};
///
/// let adaptive = AdaptiveTokens::new(TokenBundle::default_light(), TokenBundle::default_dark());
/// assert_eq!(adaptive.for_mode(ColorMode::Dark), &TokenBundle::default_dark());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveTokens {
    light: TokenBundle,
    dark: TokenBundle,
}

impl AdaptiveTokens {
    /// Creates an adaptive pair with separate light and dark bundles.
    pub fn new(light: TokenBundle, dark: TokenBundle) -> Self {
        Self { light, dark }
    }

    /// The documented light and dark defaults, each with `overrides` layered
    /// on top.
    pub fn with_defaults(overrides: &TokenBundle) -> Self {
        Self {
            light: TokenBundle::default_light().merged(overrides),
            dark: TokenBundle::default_dark().merged(overrides),
        }
    }

    /// The bundle for an explicit mode.
    pub fn for_mode(&self, mode: ColorMode) -> &TokenBundle {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// The bundle for the currently detected mode.
    pub(crate) fn resolve(&self) -> &TokenBundle {
        self.for_mode(detect_color_mode())
    }
}

impl Default for AdaptiveTokens {
    fn default() -> Self {
        Self::new(TokenBundle::default_light(), TokenBundle::default_dark())
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine whether the user prefers a light
/// or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// The color mode reported by the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{TokenName, TokenValue};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_adaptive_tokens_use_detector() {
        let adaptive = AdaptiveTokens::default();

        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(
            adaptive.resolve().get(TokenName::ColorBgContainer),
            Some(&TokenValue::Text("#141414".into()))
        );

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(
            adaptive.resolve().get(TokenName::ColorBgContainer),
            Some(&TokenValue::Text("#ffffff".into()))
        );
    }

    #[test]
    fn test_with_defaults_layers_overrides_on_both_modes() {
        let overrides = TokenBundle::new().set(TokenName::BorderRadius, 8);
        let adaptive = AdaptiveTokens::with_defaults(&overrides);

        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(
                adaptive.for_mode(mode).get(TokenName::BorderRadius),
                Some(&TokenValue::Number(8.0))
            );
        }
        assert_ne!(
            adaptive.for_mode(ColorMode::Light).get(TokenName::ColorText),
            adaptive.for_mode(ColorMode::Dark).get(TokenName::ColorText)
        );
    }
}
