//! # Sidebar Styles
//!
//! Token-driven style registry for a chat application's sidebar,
//! conversation list and paged menu panels.
//!
//! A [`TokenBundle`] (colors, border radius, font stack, shadow) goes in; a
//! [`StyleRegistry`] comes out, holding one immutable [`StyleSlot`] per
//! [`SlotName`]. Views attach the slot's class to their element and toggle
//! the `active` marker; the registry only produces the rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use sidebar_styles::{ClassNames, SlotName, StyleRegistry, TokenBundle, TokenName};
//!
//! let overrides = TokenBundle::new()
//!     .set(TokenName::BorderRadius, 8)
//!     .set(TokenName::ColorText, "#000")
//!     .set(TokenName::FontFamily, "Arial");
//! let tokens = TokenBundle::default_light().merged(&overrides);
//!
//! let registry = StyleRegistry::build(&tokens).unwrap();
//! let layout = registry.get(SlotName::Layout);
//! assert_eq!(layout.base().get("border-radius"), Some("8px"));
//! assert_eq!(layout.base().get("font-family"), Some("AlibabaPuHuiTi, Arial, sans-serif"));
//!
//! let css = registry.to_css(&ClassNames::new());
//! assert!(css.contains(".menuPage.active {"));
//! ```
//!
//! ## Missing tokens
//!
//! Construction fails fast. A bundle that lacks a token some slot needs, or
//! holds a value of the wrong shape, yields a [`StyleError`] naming both the
//! token and the slot. Defaults are never filled in silently; layer your
//! bundle over [`TokenBundle::default_light`] or
//! [`TokenBundle::default_dark`] when you want them.
//!
//! ## Theme switching
//!
//! Registries are immutable. [`LiveStyles`] holds the one in use and swaps
//! in a freshly built registry on theme change; [`AdaptiveTokens`] picks the
//! light or dark bundle from the OS preference.

pub mod render;
pub mod style;
pub mod theme;
pub mod token;
mod util;

pub use render::{render_slot, render_stylesheet, ClassNames};
pub use style::{
    Declaration, Modifier, RuleSet, SlotName, StyleError, StyleRegistry, StyleSlot, SubRule,
    Target,
};
pub use theme::{
    detect_color_mode, set_mode_detector, AdaptiveTokens, ColorMode, LiveStyles, TokenChoice,
};
pub use token::{TokenBundle, TokenKind, TokenLoadError, TokenName, TokenValue};
pub use util::half_alpha;
