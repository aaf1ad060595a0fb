//! Design tokens: the input side of the style registry.
//!
//! - [`TokenName`]: the recognized token names and their [`TokenKind`]
//! - [`TokenBundle`]: a read-only name → value mapping, with documented
//!   light and dark defaults
//! - [`TokenLoadError`]: errors from reading bundles out of JSON/YAML files

mod bundle;
mod defaults;
mod load;
mod name;
pub(crate) mod validate;

pub use bundle::{TokenBundle, TokenValue};
pub use load::TokenLoadError;
pub use name::{TokenKind, TokenName};
