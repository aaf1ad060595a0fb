//! Documented default bundles.
//!
//! Values match the seed tokens of the component library the sidebar is
//! built on, for its default (light) and dark algorithms. They are never
//! applied implicitly: callers layer their own bundle on top with
//! [`TokenBundle::merged`].

use super::bundle::TokenBundle;
use super::name::TokenName;

const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
'Helvetica Neue', Arial, 'Noto Sans', sans-serif, 'Apple Color Emoji', \
'Segoe UI Emoji', 'Segoe UI Symbol', 'Noto Color Emoji'";

const BOX_SHADOW_SECONDARY: &str = "0 6px 16px 0 rgba(0, 0, 0, 0.08), \
0 3px 6px -4px rgba(0, 0, 0, 0.12), 0 9px 28px 8px rgba(0, 0, 0, 0.05)";

impl TokenBundle {
    /// Light-mode defaults for every recognized token.
    ///
    /// | Token | Value |
    /// |-------|-------|
    /// | `borderRadius` | `6` |
    /// | `colorBgContainer` | `#ffffff` |
    /// | `colorBgLayout` | `#f5f5f5` |
    /// | `colorBgTextHover` | `rgba(0, 0, 0, 0.06)` |
    /// | `colorPrimary` | `#1677ff` |
    /// | `colorPrimaryBg` | `#e6f4ff` |
    /// | `colorText` | `rgba(0, 0, 0, 0.88)` |
    /// | `colorBorderSecondary` | `#f0f0f0` |
    /// | `fontFamily` | system UI stack ending in emoji fallbacks |
    /// | `boxShadowSecondary` | three-layer drop shadow |
    pub fn default_light() -> Self {
        TokenBundle::new()
            .set(TokenName::BorderRadius, 6)
            .set(TokenName::ColorBgContainer, "#ffffff")
            .set(TokenName::ColorBgLayout, "#f5f5f5")
            .set(TokenName::ColorBgTextHover, "rgba(0, 0, 0, 0.06)")
            .set(TokenName::ColorPrimary, "#1677ff")
            .set(TokenName::ColorPrimaryBg, "#e6f4ff")
            .set(TokenName::ColorText, "rgba(0, 0, 0, 0.88)")
            .set(TokenName::ColorBorderSecondary, "#f0f0f0")
            .set(TokenName::FontFamily, FONT_FAMILY)
            .set(TokenName::BoxShadowSecondary, BOX_SHADOW_SECONDARY)
    }

    /// Dark-mode defaults for every recognized token.
    ///
    /// Shares radius, font stack and shadow with [`TokenBundle::default_light`];
    /// only the colors change.
    pub fn default_dark() -> Self {
        TokenBundle::default_light()
            .set(TokenName::ColorBgContainer, "#141414")
            .set(TokenName::ColorBgLayout, "#000000")
            .set(TokenName::ColorBgTextHover, "rgba(255, 255, 255, 0.12)")
            .set(TokenName::ColorPrimary, "#1668dc")
            .set(TokenName::ColorPrimaryBg, "#111a2c")
            .set(TokenName::ColorText, "rgba(255, 255, 255, 0.85)")
            .set(TokenName::ColorBorderSecondary, "#303030")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SlotName;

    #[test]
    fn test_defaults_cover_every_token() {
        for bundle in [TokenBundle::default_light(), TokenBundle::default_dark()] {
            for token in TokenName::ALL {
                assert!(
                    bundle.require(token, SlotName::Layout).is_ok(),
                    "default bundle rejected {}",
                    token
                );
            }
        }
    }

    #[test]
    fn test_dark_differs_only_in_colors() {
        let light = TokenBundle::default_light();
        let dark = TokenBundle::default_dark();
        assert_eq!(light.get(TokenName::BorderRadius), dark.get(TokenName::BorderRadius));
        assert_eq!(light.get(TokenName::FontFamily), dark.get(TokenName::FontFamily));
        assert_ne!(light.get(TokenName::ColorBgContainer), dark.get(TokenName::ColorBgContainer));
    }
}
