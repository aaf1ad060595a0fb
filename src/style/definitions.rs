//! The rule declarations for every slot.
//!
//! Each slot has one function that reads the tokens it needs through a
//! [`Resolver`] and returns its base rules plus nested sub-rules. The
//! resolver records which tokens were read, so every slot knows exactly
//! which parts of a bundle it depends on.

use std::collections::BTreeSet;

use super::error::StyleError;
use super::rule::{Modifier, RuleSet, SubRule, Target};
use super::slot::{SlotName, StyleSlot};
use crate::token::{TokenBundle, TokenName};
use crate::util::half_alpha;

type Parts = (RuleSet, Vec<SubRule>);

/// Reads validated tokens on behalf of one slot.
struct Resolver<'a> {
    bundle: &'a TokenBundle,
    slot: SlotName,
    used: BTreeSet<TokenName>,
}

impl<'a> Resolver<'a> {
    fn new(bundle: &'a TokenBundle, slot: SlotName) -> Self {
        Self {
            bundle,
            slot,
            used: BTreeSet::new(),
        }
    }

    /// The token's value as CSS text.
    fn value(&mut self, name: TokenName) -> Result<String, StyleError> {
        let value = self.bundle.require(name, self.slot)?;
        self.used.insert(name);
        Ok(value.to_string())
    }

    /// A size token with a `px` unit.
    fn px(&mut self, name: TokenName) -> Result<String, StyleError> {
        Ok(format!("{}px", self.value(name)?))
    }
}

fn when(state: Modifier, rules: RuleSet) -> SubRule {
    SubRule {
        target: Target::Element,
        state: Some(state),
        rules,
    }
}

fn inside(selector: &'static str, rules: RuleSet) -> SubRule {
    SubRule {
        target: Target::Descendant(selector),
        state: None,
        rules,
    }
}

fn inside_when(selector: &'static str, state: Modifier, rules: RuleSet) -> SubRule {
    SubRule {
        target: Target::Descendant(selector),
        state: Some(state),
        rules,
    }
}

/// Resolves one slot against `bundle`.
pub(crate) fn build_slot(name: SlotName, bundle: &TokenBundle) -> Result<StyleSlot, StyleError> {
    let mut t = Resolver::new(bundle, name);
    let (base, sub_rules) = match name {
        SlotName::TopLinkWrapper => top_link_wrapper(),
        SlotName::BottomLinkWrapper => bottom_link_wrapper(),
        SlotName::Layout => layout(&mut t)?,
        SlotName::Menu => menu(&mut t)?,
        SlotName::MenuCollapsed => menu_collapsed(),
        SlotName::ChooseModel => choose_model(),
        SlotName::Conversations => conversations(&mut t)?,
        SlotName::Footer => footer(),
        SlotName::Logo => logo(&mut t)?,
        SlotName::AddBtn => add_btn(),
        SlotName::UserProfile => user_profile(&mut t)?,
        SlotName::NewChatBtn => new_chat_btn(),
        SlotName::FunctionMenu => function_menu(&mut t)?,
        SlotName::FunctionMenuItem => function_menu_item(&mut t)?,
        SlotName::ConversationsContainer => conversations_container(),
        SlotName::CollapsedMenuBtn => collapsed_menu_btn(&mut t)?,
        SlotName::PageContainer => page_container(),
        SlotName::MenuPagesContainer => menu_pages_container(),
        SlotName::MenuPage => menu_page(&mut t)?,
    };
    let tokens = t.used.into_iter().collect();
    Ok(StyleSlot::new(name, base, sub_rules, tokens))
}

fn top_link_wrapper() -> Parts {
    let base = RuleSet::new()
        .with("position", "absolute")
        .with("right", "30px")
        .with("top", "10px")
        .with("z-index", "10");
    (base, vec![])
}

fn bottom_link_wrapper() -> Parts {
    let base = RuleSet::new()
        .with("position", "absolute")
        .with("left", "20px")
        .with("bottom", "8px")
        .with("z-index", "10");
    (base, vec![])
}

fn layout(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("width", "100%")
        .with("min-width", "1000px")
        .with("height", "calc(100vh - 56px)")
        .with("border-radius", t.px(TokenName::BorderRadius)?)
        .with("display", "flex")
        .with("background", t.value(TokenName::ColorBgContainer)?)
        .with(
            "font-family",
            format!("AlibabaPuHuiTi, {}, sans-serif", t.value(TokenName::FontFamily)?),
        )
        .with("overflow-x", "hidden")
        .with("position", "relative");

    let prompts = RuleSet::new().with("color", t.value(TokenName::ColorText)?);

    Ok((base, vec![inside(".ant-prompts", prompts)]))
}

fn menu(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("background", half_alpha(&t.value(TokenName::ColorBgLayout)?))
        .with("width", "280px")
        .with("min-width", "280px")
        .with("height", "100%")
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("padding", "0 16px")
        .with("box-sizing", "border-box")
        .with("transform-origin", "left center")
        .with("overflow-y", "auto")
        .with("overflow-x", "hidden");
    Ok((base, vec![]))
}

fn menu_collapsed() -> Parts {
    let base = RuleSet::new()
        .with("width", "0")
        .with("min-width", "0")
        .with("padding", "0")
        .with("opacity", "0")
        .with("transform", "translateX(-100%)");
    (base, vec![])
}

fn choose_model() -> Parts {
    let base = RuleSet::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("color", "rgba(0, 0, 0, 0.88)")
        .with("margin", "16px 0")
        .with("gap", "8px");
    (base, vec![])
}

const CONVERSATION_ITEM: &str = ".ant-x-conversations-item";

fn conversations(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("flex", "1")
        .with("overflow-y", "auto")
        .with("padding", "8px")
        .with("cursor", "pointer");

    let item = RuleSet::new()
        .with("padding", "8px 12px")
        .with("border-radius", t.px(TokenName::BorderRadius)?);
    let item_hover =
        RuleSet::new().with("background-color", t.value(TokenName::ColorBgTextHover)?);
    let item_active = RuleSet::new()
        .with("background-color", t.value(TokenName::ColorPrimaryBg)?)
        .with("color", t.value(TokenName::ColorPrimary)?);

    Ok((
        base,
        vec![
            inside(CONVERSATION_ITEM, item),
            inside_when(CONVERSATION_ITEM, Modifier::Hover, item_hover),
            inside_when(CONVERSATION_ITEM, Modifier::Active, item_active),
        ],
    ))
}

fn footer() -> Parts {
    let base = RuleSet::new()
        .with("position", "fixed")
        .with("left", "0")
        .with("bottom", "0")
        .with("width", "100%")
        .with("text-align", "center")
        .with("padding", "16px 50px")
        .with("color", "rgba(0, 0, 0, 0.45)")
        .with("background-color", "rgba(0, 0, 0, 0.02)")
        .with("border-top", "1px solid rgba(0, 0, 0, 0.06)");
    (base, vec![])
}

fn logo(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("display", "flex")
        .with("height", "72px")
        .with("align-items", "center")
        .with("justify-content", "start")
        .with("padding", "0 24px")
        .with("box-sizing", "border-box");

    let img = RuleSet::new()
        .with("width", "24px")
        .with("height", "24px")
        .with("display", "inline-block");
    let title = RuleSet::new()
        .with("display", "inline-block")
        .with("margin", "0 8px")
        .with("font-weight", "bold")
        .with("color", t.value(TokenName::ColorText)?)
        .with("font-size", "16px");

    Ok((base, vec![inside("img", img), inside("span", title)]))
}

fn add_btn() -> Parts {
    let base = RuleSet::new()
        .with("background", "#1677ff0f")
        .with("border", "1px solid #1677ff34")
        .with("width", "calc(100% - 24px)")
        .with("margin", "0 12px 24px 12px");
    (base, vec![])
}

fn user_profile(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("display", "flex")
        .with("height", "30px")
        .with("width", "100%")
        .with("justify-content", "flex-end")
        .with("gap", "12px")
        .with("align-items", "center")
        .with("padding", "16px 0")
        .with(
            "border-bottom",
            format!("1px solid {}", t.value(TokenName::ColorBorderSecondary)?),
        )
        .with("margin-bottom", "16px");

    let avatar = RuleSet::new()
        .with("padding-top", "4px")
        .with("height", "30px");

    Ok((base, vec![inside("img", avatar)]))
}

fn new_chat_btn() -> Parts {
    let base = RuleSet::new()
        .with("margin-bottom", "16px")
        .with("height", "40px")
        .with("font-size", "15px");
    (base, vec![])
}

fn function_menu(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("width", "100%")
        .with("gap", "8px")
        .with("margin-bottom", "16px")
        .with("padding", "4px 0")
        .with(
            "border-bottom",
            format!("1px solid {}", t.value(TokenName::ColorBorderSecondary)?),
        );
    Ok((base, vec![]))
}

fn function_menu_item(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("padding", "10px 16px")
        .with("cursor", "pointer")
        .with("border-radius", t.px(TokenName::BorderRadius)?);

    let hover = RuleSet::new().with("background-color", t.value(TokenName::ColorBgTextHover)?);
    let icon = RuleSet::new()
        .with("font-size", "18px")
        .with("margin-right", "8px");
    let label = RuleSet::new().with("font-size", "15px");

    Ok((
        base,
        vec![
            when(Modifier::Hover, hover),
            inside(".anticon", icon),
            inside("span", label),
        ],
    ))
}

fn conversations_container() -> Parts {
    let base = RuleSet::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("gap", "8px")
        .with("flex", "1")
        .with("overflow", "hidden");
    (base, vec![])
}

fn collapsed_menu_btn(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("position", "fixed")
        .with("top", "12px")
        .with("left", "12px")
        .with("z-index", "1000")
        .with("border-radius", "50%")
        .with("display", "flex")
        .with("align-items", "center")
        .with("justify-content", "center")
        .with("box-shadow", t.value(TokenName::BoxShadowSecondary)?)
        .with("cursor", "pointer")
        .with("opacity", "1")
        .with("transform", "scale(1)");

    let hover = RuleSet::new().with("transform", "scale(1.05)");

    Ok((base, vec![when(Modifier::Hover, hover)]))
}

fn page_container() -> Parts {
    let base = RuleSet::new()
        .with("flex", "1")
        .with("display", "none")
        .with("opacity", "0");
    let active = RuleSet::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("opacity", "1");
    (base, vec![when(Modifier::Active, active)])
}

fn menu_pages_container() -> Parts {
    let base = RuleSet::new()
        .with("flex", "1")
        .with("position", "relative")
        .with("overflow", "hidden");
    (base, vec![])
}

fn menu_page(t: &mut Resolver<'_>) -> Result<Parts, StyleError> {
    let base = RuleSet::new()
        .with("position", "absolute")
        .with("top", "0")
        .with("left", "0")
        .with("width", "100%")
        .with("height", "100%")
        .with("display", "none")
        .with("opacity", "0")
        .with("background-color", t.value(TokenName::ColorBgContainer)?)
        .with("overflow-y", "auto");
    let active = RuleSet::new()
        .with("display", "block")
        .with("opacity", "1");
    Ok((base, vec![when(Modifier::Active, active)]))
}
