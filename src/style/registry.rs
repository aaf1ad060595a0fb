//! The style registry: every slot, resolved from one token bundle.
//!
//! # Design
//!
//! Construction is a single pure pass over [`SlotName::ALL`]:
//!
//! 1. **Resolve**: each slot reads the tokens it needs, validating shape
//! 2. **Freeze**: the resolved slots are stored and never mutated again
//!
//! The first missing or malformed token aborts the whole build, so a
//! registry either exists with every slot fully resolved, or not at all.
//! Changing themes means building a new registry (see
//! [`LiveStyles`](crate::LiveStyles)); there is no way to edit one in place.
//!
//! # Example
//!
//! ```rust
//! use sidebar_styles::{Modifier, SlotName, StyleRegistry, TokenBundle};
//!
//! let registry = StyleRegistry::build(&TokenBundle::default_light()).unwrap();
//!
//! let page = registry.get(SlotName::MenuPage);
//! assert_eq!(page.base().get("display"), Some("none"));
//! assert_eq!(page.modifier(Modifier::Active).unwrap().get("display"), Some("block"));
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::definitions::build_slot;
use super::error::StyleError;
use super::slot::{SlotName, StyleSlot};
use crate::token::{TokenBundle, TokenName};

/// The complete set of resolved style slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleRegistry {
    /// Indexed by [`SlotName::index`].
    slots: Vec<StyleSlot>,
}

impl StyleRegistry {
    /// Resolves every slot against `tokens`.
    ///
    /// The bundle is only read. Building twice from equal bundles yields
    /// equal registries.
    ///
    /// # Errors
    ///
    /// Returns the first [`StyleError::MissingToken`] or
    /// [`StyleError::MalformedToken`] encountered, in slot order.
    pub fn build(tokens: &TokenBundle) -> Result<Self, StyleError> {
        let slots = SlotName::ALL
            .iter()
            .map(|&name| -> Result<StyleSlot, StyleError> {
                let slot = build_slot(name, tokens)?;
                tracing::trace!(
                    slot = %name,
                    declarations = slot.base().len(),
                    nested = slot.sub_rules().len(),
                    "resolved style slot"
                );
                Ok(slot)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(slots = slots.len(), tokens = tokens.len(), "built style registry");
        Ok(Self { slots })
    }

    /// Returns the resolved slot for `name`.
    pub fn get(&self, name: SlotName) -> &StyleSlot {
        &self.slots[name.index()]
    }

    /// Looks up a slot by its class name (`"menuPage"`, `"layout"`, ...).
    pub fn find(&self, class_name: &str) -> Option<&StyleSlot> {
        SlotName::from_class_name(class_name).map(|name| self.get(name))
    }

    /// Iterates over all slots in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleSlot> {
        self.slots.iter()
    }

    /// Number of slots (always [`SlotName::ALL`]`.len()`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots whose rules were resolved from `token`.
    pub fn slots_referencing(&self, token: TokenName) -> impl Iterator<Item = &StyleSlot> {
        self.slots.iter().filter(move |slot| slot.references(token))
    }
}

impl<'a> IntoIterator for &'a StyleRegistry {
    type Item = &'a StyleSlot;
    type IntoIter = std::slice::Iter<'a, StyleSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for StyleRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for slot in &self.slots {
            map.serialize_entry(slot.name().class_name(), slot)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Modifier;

    fn light() -> StyleRegistry {
        StyleRegistry::build(&TokenBundle::default_light()).unwrap()
    }

    #[test]
    fn test_build_has_every_slot_in_order() {
        let registry = light();
        assert_eq!(registry.len(), SlotName::ALL.len());
        for (slot, name) in registry.iter().zip(SlotName::ALL) {
            assert_eq!(slot.name(), name);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(light(), light());
    }

    #[test]
    fn test_build_does_not_modify_bundle() {
        let bundle = TokenBundle::default_dark();
        let before = bundle.clone();
        StyleRegistry::build(&bundle).unwrap();
        assert_eq!(bundle, before);
    }

    #[test]
    fn test_build_fails_on_empty_bundle() {
        let err = StyleRegistry::build(&TokenBundle::new()).unwrap_err();
        // Layout is the first slot that reads a token.
        assert_eq!(
            err,
            StyleError::MissingToken {
                token: TokenName::BorderRadius,
                slot: SlotName::Layout,
            }
        );
    }

    #[test]
    fn test_find_by_class_name() {
        let registry = light();
        assert_eq!(
            registry.find("collapsedMenuBtn").map(|s| s.name()),
            Some(SlotName::CollapsedMenuBtn)
        );
        assert!(registry.find("sidebar").is_none());
    }

    #[test]
    fn test_slots_referencing_box_shadow() {
        let registry = light();
        let names: Vec<SlotName> = registry
            .slots_referencing(TokenName::BoxShadowSecondary)
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec![SlotName::CollapsedMenuBtn]);
    }

    #[test]
    fn test_collapsed_menu_button_hover_scales() {
        let registry = light();
        let button = registry.get(SlotName::CollapsedMenuBtn);
        assert_eq!(button.base().get("transform"), Some("scale(1)"));
        assert_eq!(
            button.modifier(Modifier::Hover).and_then(|r| r.get("transform")),
            Some("scale(1.05)")
        );
    }

    #[test]
    fn test_serializes_keyed_by_class_name() {
        let json = serde_json::to_value(light()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), SlotName::ALL.len());
        assert_eq!(json["layout"]["base"]["border-radius"], "6px");
        assert_eq!(json["pageContainer"]["nested"][0]["selector"], "&.active");
        assert_eq!(json["menuPage"]["tokens"][0], "colorBgContainer");
    }
}
