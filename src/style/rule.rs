//! Declarations, rule sets and the sub-rules nested under a slot.

use std::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

/// An ordered list of declarations.
///
/// Order is preserved exactly as declared so rendered CSS is stable.
/// Serializes as a JSON object in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuleSet {
    declarations: Vec<Declaration>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration, returning the updated rule set for chaining.
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property,
            value: value.into(),
        });
        self
    }

    /// Returns the value of `property`. If declared more than once, the last
    /// declaration wins, as it would in a browser.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Iterates over declarations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Computes the effective rules when `over` is applied after `self` on
    /// the same element.
    ///
    /// Properties in `over` replace those in `self` in place; properties only
    /// in `over` are appended. Neither input changes.
    pub fn layered(&self, over: &RuleSet) -> RuleSet {
        let mut declarations = self.declarations.clone();
        for decl in &over.declarations {
            match declarations.iter_mut().find(|d| d.property == decl.property) {
                Some(existing) => existing.value = decl.value.clone(),
                None => declarations.push(decl.clone()),
            }
        }
        RuleSet { declarations }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for decl in &self.declarations {
            map.serialize_entry(decl.property, &decl.value)?;
        }
        map.end()
    }
}

/// A state the consuming view toggles on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Pointer hover, matched with the `:hover` pseudo-class.
    Hover,
    /// Application-selected state, matched with an `active` class.
    Active,
}

impl Modifier {
    /// The selector fragment appended to the element the state applies to.
    pub fn selector_suffix(self) -> &'static str {
        match self {
            Modifier::Hover => ":hover",
            Modifier::Active => ".active",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Hover => f.write_str("hover"),
            Modifier::Active => f.write_str("active"),
        }
    }
}

/// Which element a sub-rule applies to, relative to the slot's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The slot's own element.
    Element,
    /// Descendants matching a simple selector (`img`, `.anticon`, ...).
    Descendant(&'static str),
}

/// A rule set nested under a slot: a state of the element itself, a
/// descendant, or a state of a descendant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubRule {
    pub target: Target,
    pub state: Option<Modifier>,
    pub rules: RuleSet,
}

impl SubRule {
    /// The selector for this sub-rule with `&` standing for the slot element,
    /// e.g. `&:hover`, `& img`, `& .ant-x-conversations-item.active`.
    pub fn relative_selector(&self) -> String {
        self.selector_for("&")
    }

    /// The full selector when the slot element is matched by `.class`.
    pub fn selector(&self, class: &str) -> String {
        self.selector_for(&format!(".{}", class))
    }

    fn selector_for(&self, element: &str) -> String {
        let mut selector = match self.target {
            Target::Element => element.to_string(),
            Target::Descendant(descendant) => format!("{} {}", element, descendant),
        };
        if let Some(state) = self.state {
            selector.push_str(state.selector_suffix());
        }
        selector
    }
}

impl Serialize for SubRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SubRule", 2)?;
        s.serialize_field("selector", &self.relative_selector())?;
        s.serialize_field("rules", &self.rules)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_set_preserves_order() {
        let rules = RuleSet::new()
            .with("position", "absolute")
            .with("right", "30px")
            .with("top", "10px");

        let props: Vec<&str> = rules.iter().map(|d| d.property).collect();
        assert_eq!(props, vec!["position", "right", "top"]);
    }

    #[test]
    fn test_get_last_declaration_wins() {
        let rules = RuleSet::new().with("opacity", "0").with("opacity", "1");
        assert_eq!(rules.get("opacity"), Some("1"));
        assert_eq!(rules.get("width"), None);
    }

    #[test]
    fn test_layered_replaces_in_place_and_appends() {
        let base = RuleSet::new()
            .with("width", "280px")
            .with("padding", "0 16px")
            .with("display", "flex");
        let over = RuleSet::new()
            .with("width", "0")
            .with("opacity", "0");

        let effective = base.layered(&over);

        let props: Vec<(&str, &str)> = effective
            .iter()
            .map(|d| (d.property, d.value.as_str()))
            .collect();
        assert_eq!(
            props,
            vec![
                ("width", "0"),
                ("padding", "0 16px"),
                ("display", "flex"),
                ("opacity", "0"),
            ]
        );
        assert_eq!(base.get("width"), Some("280px"));
    }

    #[test]
    fn test_sub_rule_selectors() {
        let hover = SubRule {
            target: Target::Element,
            state: Some(Modifier::Hover),
            rules: RuleSet::new(),
        };
        let img = SubRule {
            target: Target::Descendant("img"),
            state: None,
            rules: RuleSet::new(),
        };
        let item_active = SubRule {
            target: Target::Descendant(".ant-x-conversations-item"),
            state: Some(Modifier::Active),
            rules: RuleSet::new(),
        };

        assert_eq!(hover.relative_selector(), "&:hover");
        assert_eq!(hover.selector("collapsedMenuBtn"), ".collapsedMenuBtn:hover");
        assert_eq!(img.selector("logo"), ".logo img");
        assert_eq!(
            item_active.selector("conversations"),
            ".conversations .ant-x-conversations-item.active"
        );
    }

    #[test]
    fn test_rule_set_serializes_as_ordered_object() {
        let rules = RuleSet::new().with("flex", "1").with("display", "none");
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(json, r#"{"flex":"1","display":"none"}"#);
    }
}
