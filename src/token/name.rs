//! Recognized design-token names and the value shape each one expects.

use std::fmt;

/// The shape a token value must have to be usable by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A non-negative pixel size, given as a bare number (`8` becomes `8px`).
    Size,
    /// A CSS color: hex, named keyword, or an `rgb()`/`hsl()` style function.
    Color,
    /// A comma-separated font stack.
    FontFamily,
    /// A `box-shadow` value.
    Shadow,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TokenKind::Size => "pixel size",
            TokenKind::Color => "color",
            TokenKind::FontFamily => "font stack",
            TokenKind::Shadow => "shadow",
        };
        f.write_str(label)
    }
}

/// A token the style registry knows how to consume.
///
/// Wire names follow the camelCase convention of the component library the
/// token bundles come from (`borderRadius`, `colorBgContainer`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenName {
    BorderRadius,
    ColorBgContainer,
    ColorBgLayout,
    ColorBgTextHover,
    ColorPrimary,
    ColorPrimaryBg,
    ColorText,
    ColorBorderSecondary,
    FontFamily,
    BoxShadowSecondary,
}

impl TokenName {
    /// Every recognized token, in declaration order.
    pub const ALL: [TokenName; 10] = [
        TokenName::BorderRadius,
        TokenName::ColorBgContainer,
        TokenName::ColorBgLayout,
        TokenName::ColorBgTextHover,
        TokenName::ColorPrimary,
        TokenName::ColorPrimaryBg,
        TokenName::ColorText,
        TokenName::ColorBorderSecondary,
        TokenName::FontFamily,
        TokenName::BoxShadowSecondary,
    ];

    /// The key this token is stored under in a bundle.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenName::BorderRadius => "borderRadius",
            TokenName::ColorBgContainer => "colorBgContainer",
            TokenName::ColorBgLayout => "colorBgLayout",
            TokenName::ColorBgTextHover => "colorBgTextHover",
            TokenName::ColorPrimary => "colorPrimary",
            TokenName::ColorPrimaryBg => "colorPrimaryBg",
            TokenName::ColorText => "colorText",
            TokenName::ColorBorderSecondary => "colorBorderSecondary",
            TokenName::FontFamily => "fontFamily",
            TokenName::BoxShadowSecondary => "boxShadowSecondary",
        }
    }

    /// The value shape this token must have.
    pub fn kind(self) -> TokenKind {
        match self {
            TokenName::BorderRadius => TokenKind::Size,
            TokenName::FontFamily => TokenKind::FontFamily,
            TokenName::BoxShadowSecondary => TokenKind::Shadow,
            _ => TokenKind::Color,
        }
    }

    /// Looks up a token by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.as_str() == name)
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_token() {
        for token in TokenName::ALL {
            assert_eq!(TokenName::from_name(token.as_str()), Some(token));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(TokenName::from_name("colorWarning"), None);
        assert_eq!(TokenName::from_name("BorderRadius"), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(TokenName::BorderRadius.kind(), TokenKind::Size);
        assert_eq!(TokenName::ColorPrimaryBg.kind(), TokenKind::Color);
        assert_eq!(TokenName::FontFamily.kind(), TokenKind::FontFamily);
        assert_eq!(TokenName::BoxShadowSecondary.kind(), TokenKind::Shadow);
    }
}
