//! Color helpers shared by the slot definitions.

use crate::token::validate::is_hex_digits;

/// Returns `color` at roughly 50% opacity.
///
/// Hex colors without an alpha channel get an `80` alpha byte appended
/// (`#f5f5f5` → `#f5f5f580`, `#abc` → `#aabbcc80`). Any other color form is
/// wrapped in `color-mix()` so the result is still valid CSS.
///
/// # Example
///
/// ```rust
/// use sidebar_styles::half_alpha;
///
/// assert_eq!(half_alpha("#f5f5f5"), "#f5f5f580");
/// assert_eq!(half_alpha("#abc"), "#aabbcc80");
/// assert_eq!(half_alpha("white"), "color-mix(in srgb, white 50%, transparent)");
/// ```
pub fn half_alpha(color: &str) -> String {
    let trimmed = color.trim();
    if let Some(body) = trimmed.strip_prefix('#') {
        if is_hex_digits(body) {
            match body.len() {
                6 => return format!("#{}80", body),
                3 => {
                    let expanded: String = body.chars().flat_map(|c| [c, c]).collect();
                    return format!("#{}80", expanded);
                }
                _ => {}
            }
        }
    }
    format!("color-mix(in srgb, {} 50%, transparent)", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_alpha_six_digit() {
        assert_eq!(half_alpha("#f5f5f5"), "#f5f5f580");
        assert_eq!(half_alpha("#000000"), "#00000080");
    }

    #[test]
    fn test_half_alpha_three_digit() {
        assert_eq!(half_alpha("#fff"), "#ffffff80");
    }

    #[test]
    fn test_half_alpha_existing_alpha_uses_color_mix() {
        assert_eq!(
            half_alpha("#f5f5f5cc"),
            "color-mix(in srgb, #f5f5f5cc 50%, transparent)"
        );
    }

    #[test]
    fn test_half_alpha_functional_color() {
        assert_eq!(
            half_alpha("rgba(0, 0, 0, 0.5)"),
            "color-mix(in srgb, rgba(0, 0, 0, 0.5) 50%, transparent)"
        );
    }
}
