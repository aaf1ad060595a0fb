//! Style system: slots, rule sets and the registry that resolves them.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleRegistry`]: every slot resolved from one token bundle
//! - [`StyleSlot`]: the base rules and nested sub-rules for one [`SlotName`]
//! - [`RuleSet`] / [`SubRule`]: ordered declarations, optionally scoped to a
//!   descendant or a [`Modifier`] state
//! - [`StyleError`]: errors from registry construction

mod definitions;
mod error;
mod registry;
mod rule;
mod slot;

pub use error::StyleError;
pub use registry::StyleRegistry;
pub use rule::{Declaration, Modifier, RuleSet, SubRule, Target};
pub use slot::{SlotName, StyleSlot};
