//! Theme handling: choosing token bundles and swapping registries.
//!
//! This module provides:
//!
//! - [`AdaptiveTokens`]: light/dark bundle pairs with OS detection
//! - [`TokenChoice`]: reference type for selecting a bundle at build time
//! - [`ColorMode`]: light or dark color mode enum
//! - [`LiveStyles`]: the registry in use, replaced whole on theme change

mod adaptive;
mod choice;
mod live;

pub use adaptive::{detect_color_mode, set_mode_detector, AdaptiveTokens, ColorMode};
pub use choice::TokenChoice;
pub use live::LiveStyles;
