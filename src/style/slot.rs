//! Slot names and the immutable rule sets attached to them.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::rule::{Modifier, RuleSet, SubRule, Target};
use crate::token::TokenName;

/// A named UI region or element class the registry produces rules for.
///
/// Declaration order is the order slots render in a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotName {
    /// Overlay anchored to the top-right corner for external links.
    TopLinkWrapper,
    /// Overlay anchored to the bottom-left corner for external links.
    BottomLinkWrapper,
    /// Root flex container holding menu and content.
    Layout,
    /// The collapsible primary menu panel.
    Menu,
    /// Override layered onto [`SlotName::Menu`] while collapsed.
    MenuCollapsed,
    /// Model chooser block at the top of the menu.
    ChooseModel,
    /// Scrollable conversation list; items carry hover and `active` states.
    Conversations,
    /// Fixed page footer bar.
    Footer,
    /// Logo image and title.
    Logo,
    /// Accent styling for the "add" button.
    AddBtn,
    /// User avatar row.
    UserProfile,
    /// The "new chat" button.
    NewChatBtn,
    /// Vertical list of function-menu entries.
    FunctionMenu,
    /// A single function-menu entry with hover state.
    FunctionMenuItem,
    /// Outer container wrapping the conversation list.
    ConversationsContainer,
    /// Floating round button that re-expands a collapsed menu.
    CollapsedMenuBtn,
    /// Content page, hidden unless marked `active`.
    PageContainer,
    /// Stacking context for the paged menu.
    MenuPagesContainer,
    /// One absolutely positioned menu page, hidden unless marked `active`.
    MenuPage,
}

impl SlotName {
    /// Every slot, in render order.
    pub const ALL: [SlotName; 19] = [
        SlotName::TopLinkWrapper,
        SlotName::BottomLinkWrapper,
        SlotName::Layout,
        SlotName::Menu,
        SlotName::MenuCollapsed,
        SlotName::ChooseModel,
        SlotName::Conversations,
        SlotName::Footer,
        SlotName::Logo,
        SlotName::AddBtn,
        SlotName::UserProfile,
        SlotName::NewChatBtn,
        SlotName::FunctionMenu,
        SlotName::FunctionMenuItem,
        SlotName::ConversationsContainer,
        SlotName::CollapsedMenuBtn,
        SlotName::PageContainer,
        SlotName::MenuPagesContainer,
        SlotName::MenuPage,
    ];

    /// The class name consuming views attach to their elements.
    pub fn class_name(self) -> &'static str {
        match self {
            SlotName::TopLinkWrapper => "topLinkWrapper",
            SlotName::BottomLinkWrapper => "bottomLinkWrapper",
            SlotName::Layout => "layout",
            SlotName::Menu => "menu",
            SlotName::MenuCollapsed => "menuCollapsed",
            SlotName::ChooseModel => "chooseModel",
            SlotName::Conversations => "conversations",
            SlotName::Footer => "footer",
            SlotName::Logo => "logo",
            SlotName::AddBtn => "addBtn",
            SlotName::UserProfile => "userProfile",
            SlotName::NewChatBtn => "newChatBtn",
            SlotName::FunctionMenu => "functionMenu",
            SlotName::FunctionMenuItem => "functionMenuItem",
            SlotName::ConversationsContainer => "conversationsContainer",
            SlotName::CollapsedMenuBtn => "collapsedMenuBtn",
            SlotName::PageContainer => "pageContainer",
            SlotName::MenuPagesContainer => "menuPagesContainer",
            SlotName::MenuPage => "menuPage",
        }
    }

    /// Looks up a slot by class name.
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.class_name() == name)
    }

    /// Position of this slot in [`SlotName::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// The resolved rules for one slot.
///
/// A slot pairs a base rule set with zero or more sub-rules. Sub-rules that
/// target the element itself with a [`Modifier`] are the slot's modifier
/// states; the consuming view decides when the marker is present.
///
/// | Slot | Pairing |
/// |------|---------|
/// | `conversations` | item base + item `:hover` + item `.active` |
/// | `functionMenuItem` | base + `:hover` |
/// | `collapsedMenuBtn` | base + `:hover` |
/// | `pageContainer` | base + `.active` |
/// | `menuPage` | base + `.active` |
/// | `menu` | base, with `menuCollapsed` as a separate override slot |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleSlot {
    name: SlotName,
    base: RuleSet,
    sub_rules: Vec<SubRule>,
    tokens: Vec<TokenName>,
}

impl StyleSlot {
    pub(crate) fn new(
        name: SlotName,
        base: RuleSet,
        sub_rules: Vec<SubRule>,
        tokens: Vec<TokenName>,
    ) -> Self {
        Self {
            name,
            base,
            sub_rules,
            tokens,
        }
    }

    pub fn name(&self) -> SlotName {
        self.name
    }

    /// Rules applied to the element unconditionally.
    pub fn base(&self) -> &RuleSet {
        &self.base
    }

    /// All nested rules in declaration order.
    pub fn sub_rules(&self) -> &[SubRule] {
        &self.sub_rules
    }

    /// Rules for the element itself in the given state, if the slot has any.
    pub fn modifier(&self, state: Modifier) -> Option<&RuleSet> {
        self.find(Target::Element, Some(state))
    }

    /// Rules for descendants matching `selector` in their default state.
    pub fn descendant(&self, selector: &str) -> Option<&RuleSet> {
        self.sub_rules
            .iter()
            .find(|r| r.state.is_none() && matches!(r.target, Target::Descendant(s) if s == selector))
            .map(|r| &r.rules)
    }

    /// Rules for descendants matching `selector` in the given state.
    pub fn descendant_modifier(&self, selector: &str, state: Modifier) -> Option<&RuleSet> {
        self.sub_rules
            .iter()
            .find(|r| {
                r.state == Some(state)
                    && matches!(r.target, Target::Descendant(s) if s == selector)
            })
            .map(|r| &r.rules)
    }

    /// States declared anywhere in this slot, on the element or a descendant.
    pub fn modifiers(&self) -> Vec<Modifier> {
        let mut states: Vec<Modifier> = self.sub_rules.iter().filter_map(|r| r.state).collect();
        states.sort();
        states.dedup();
        states
    }

    /// Tokens this slot's rules were resolved from, sorted.
    pub fn tokens(&self) -> &[TokenName] {
        &self.tokens
    }

    /// Returns `true` if any rule in this slot was resolved from `token`.
    pub fn references(&self, token: TokenName) -> bool {
        self.tokens.contains(&token)
    }

    fn find(&self, target: Target, state: Option<Modifier>) -> Option<&RuleSet> {
        self.sub_rules
            .iter()
            .find(|r| r.target == target && r.state == state)
            .map(|r| &r.rules)
    }
}

impl Serialize for StyleSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tokens: Vec<&str> = self.tokens.iter().map(|t| t.as_str()).collect();
        let mut s = serializer.serialize_struct("StyleSlot", 3)?;
        s.serialize_field("base", &self.base)?;
        s.serialize_field("nested", &self.sub_rules)?;
        s.serialize_field("tokens", &tokens)?;
        s.end()
    }
}
