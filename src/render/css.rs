//! CSS text output for slots and whole registries.

use super::class_names::ClassNames;
use crate::style::{RuleSet, StyleRegistry, StyleSlot};

/// Renders one slot as CSS blocks: the base rules first, then each sub-rule
/// in declaration order.
///
/// # Example
///
/// ```rust
/// use sidebar_styles::{render_slot, ClassNames, SlotName, StyleRegistry, TokenBundle};
///
/// let registry = StyleRegistry::build(&TokenBundle::default_light()).unwrap();
/// let css = render_slot(registry.get(SlotName::PageContainer), &ClassNames::new());
///
/// assert!(css.starts_with(".pageContainer {\n  flex: 1;\n"));
/// assert!(css.contains(".pageContainer.active {\n  display: flex;\n"));
/// ```
pub fn render_slot(slot: &StyleSlot, names: &ClassNames) -> String {
    let class = names.class_for(slot.name());
    let mut out = String::new();

    write_block(&mut out, &format!(".{}", class), slot.base());
    for sub_rule in slot.sub_rules() {
        out.push('\n');
        write_block(&mut out, &sub_rule.selector(&class), &sub_rule.rules);
    }
    out
}

/// Renders every slot in the registry, separated by blank lines.
pub fn render_stylesheet(registry: &StyleRegistry, names: &ClassNames) -> String {
    let blocks: Vec<String> = registry
        .iter()
        .map(|slot| render_slot(slot, names))
        .collect();
    blocks.join("\n")
}

impl StyleRegistry {
    /// Renders the registry as a stylesheet. See [`render_stylesheet`].
    pub fn to_css(&self, names: &ClassNames) -> String {
        render_stylesheet(self, names)
    }
}

fn write_block(out: &mut String, selector: &str, rules: &RuleSet) {
    out.push_str(&format!("{} {{\n", selector));
    for decl in rules {
        out.push_str(&format!("  {}: {};\n", decl.property, decl.value));
    }
    out.push_str("}\n");
}
