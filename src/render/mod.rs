//! Rendering registries to CSS text.

mod class_names;
mod css;

pub use class_names::ClassNames;
pub use css::{render_slot, render_stylesheet};
