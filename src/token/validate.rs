//! Shape checks for token values, built on the `cssparser` tokenizer.
//!
//! These checks are deliberately shallow: they confirm a value tokenizes as
//! the kind of CSS value its token promises, so a typo in a bundle surfaces as
//! a configuration error instead of a silently dropped declaration.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::bundle::TokenValue;
use super::name::TokenKind;

const COLOR_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla"];

const COLOR_KEYWORDS: &[&str] = &[
    "transparent", "currentcolor", "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure",
    "beige", "bisque", "black", "blanchedalmond", "blue", "blueviolet", "brown", "burlywood",
    "cadetblue", "chartreuse", "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson",
    "cyan", "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey",
    "darkkhaki", "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred",
    "darksalmon", "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey",
    "darkturquoise", "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey",
    "dodgerblue", "firebrick", "floralwhite", "forestgreen", "fuchsia", "gainsboro",
    "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow", "grey", "honeydew",
    "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender", "lavenderblush",
    "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink",
    "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey",
    "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon",
    "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise", "mediumvioletred",
    "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite", "navy", "oldlace",
    "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod", "palegreen",
    "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink", "plum",
    "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue", "saddlebrown",
    "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue",
    "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan", "teal",
    "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow",
    "yellowgreen",
];

/// Returns `true` if `value` has the shape required by `kind`.
///
/// Text containing a comment delimiter is always rejected: the tokenizer skips
/// comments, but the raw text is pasted into the stylesheet where an open
/// `/*` swallows every rule after it.
pub(crate) fn matches_kind(kind: TokenKind, value: &TokenValue) -> bool {
    if let TokenValue::Text(text) = value {
        if has_comment_delimiter(text) {
            return false;
        }
    }
    match (kind, value) {
        (TokenKind::Size, TokenValue::Number(n)) => n.is_finite() && *n >= 0.0,
        (TokenKind::Size, TokenValue::Text(_)) => false,
        (_, TokenValue::Number(_)) => false,
        (TokenKind::Color, TokenValue::Text(text)) => is_color(text),
        (TokenKind::FontFamily, TokenValue::Text(text)) => is_font_stack(text),
        (TokenKind::Shadow, TokenValue::Text(text)) => is_shadow(text),
    }
}

fn has_comment_delimiter(text: &str) -> bool {
    text.contains("/*") || text.contains("*/")
}

/// Returns `true` for a 3, 4, 6 or 8 digit hex color body (without `#`).
pub(crate) fn is_hex_digits(body: &str) -> bool {
    matches!(body.len(), 3 | 4 | 6 | 8) && body.bytes().all(|b| b.is_ascii_hexdigit())
}

pub(crate) fn is_color(text: &str) -> bool {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);

    let token = match parser.next() {
        Ok(token) => token.clone(),
        Err(_) => return false,
    };

    let recognized = match token {
        Token::Hash(ref body) | Token::IDHash(ref body) => is_hex_digits(body),
        Token::Ident(ref ident) => {
            let lower = ident.to_ascii_lowercase();
            COLOR_KEYWORDS.contains(&lower.as_str())
        }
        Token::Function(ref name) => {
            let lower = name.to_ascii_lowercase();
            COLOR_FUNCTIONS.contains(&lower.as_str())
                && matches!(parser.parse_nested_block(color_arguments), Ok(n) if n > 0)
        }
        _ => false,
    };

    recognized && parser.is_exhausted()
}

pub(crate) fn is_font_stack(text: &str) -> bool {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser.parse_comma_separated(font_family).is_ok() && parser.is_exhausted()
}

pub(crate) fn is_shadow(text: &str) -> bool {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    matches!(balanced_value(&mut parser), Ok(n) if n > 0)
}

/// Returns `true` if `text` is a single CSS identifier.
pub(crate) fn is_identifier(text: &str) -> bool {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser.expect_ident().is_ok() && parser.is_exhausted()
}

fn color_arguments<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<usize, ParseError<'i, ()>> {
    let mut count = 0;
    while !parser.is_exhausted() {
        let token = parser.next()?.clone();
        match token {
            Token::Number { .. }
            | Token::Percentage { .. }
            | Token::Dimension { .. }
            | Token::Comma
            | Token::Delim('/') => count += 1,
            _ => return Err(parser.new_custom_error(())),
        }
    }
    Ok(count)
}

fn font_family<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
    if parser.try_parse(|p| p.expect_string_cloned()).is_ok() {
        return Ok(());
    }
    parser.expect_ident()?;
    while parser.try_parse(|p| p.expect_ident_cloned()).is_ok() {}
    Ok(())
}

fn balanced_value<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<usize, ParseError<'i, ()>> {
    let mut count = 0;
    while !parser.is_exhausted() {
        let token = parser.next()?.clone();
        match token {
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                parser.parse_nested_block(balanced_value)?;
            }
            Token::BadString(_)
            | Token::BadUrl(_)
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::CloseCurlyBracket
            | Token::CurlyBracketBlock
            | Token::Semicolon => return Err(parser.new_custom_error(())),
            _ => {}
        }
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert!(is_color("#000"));
        assert!(is_color("#1677ff"));
        assert!(is_color("#1677ff0f"));
        assert!(is_color("#FFF8"));
        assert!(!is_color("#12345"));
        assert!(!is_color("#ggg"));
        assert!(!is_color("#1677ff extra"));
    }

    #[test]
    fn test_named_and_functional_colors() {
        assert!(is_color("white"));
        assert!(is_color("Transparent"));
        assert!(is_color("rgba(0, 0, 0, 0.88)"));
        assert!(is_color("rgb(22 119 255 / 50%)"));
        assert!(is_color("hsl(215deg, 100%, 54%)"));
        assert!(!is_color("notacolor"));
        assert!(!is_color("rgba()"));
        assert!(!is_color("calc(1px + 2px)"));
        assert!(!is_color(""));
    }

    #[test]
    fn test_font_stacks() {
        assert!(is_font_stack("Arial"));
        assert!(is_font_stack("-apple-system, 'Segoe UI', Helvetica Neue, sans-serif"));
        assert!(!is_font_stack(""));
        assert!(!is_font_stack("Arial,"));
        assert!(!is_font_stack("Arial, 12px"));
    }

    #[test]
    fn test_shadows() {
        assert!(is_shadow("0 6px 16px 0 rgba(0, 0, 0, 0.08)"));
        assert!(is_shadow("none"));
        assert!(!is_shadow(""));
        assert!(!is_shadow("0 1px 2px black; color: red"));
        assert!(!is_shadow("0 1px 2px)"));
    }

    #[test]
    fn test_matches_kind_rejects_wrong_variant() {
        assert!(matches_kind(TokenKind::Size, &TokenValue::Number(8.0)));
        assert!(matches_kind(TokenKind::Size, &TokenValue::Number(0.0)));
        assert!(!matches_kind(TokenKind::Size, &TokenValue::Number(-1.0)));
        assert!(!matches_kind(TokenKind::Size, &TokenValue::Number(f64::NAN)));
        assert!(!matches_kind(TokenKind::Size, &TokenValue::Text("8px".into())));
        assert!(!matches_kind(TokenKind::Color, &TokenValue::Number(0.0)));
    }

    #[test]
    fn test_comments_are_rejected() {
        let text = |s: &str| TokenValue::Text(s.to_string());
        assert!(!matches_kind(TokenKind::FontFamily, &text("Arial /*")));
        assert!(!matches_kind(TokenKind::Color, &text("red /*")));
        assert!(!matches_kind(TokenKind::Color, &text("white/*")));
        assert!(!matches_kind(TokenKind::Shadow, &text("0 0 2px red /*")));
        assert!(!matches_kind(TokenKind::Shadow, &text("0 0 2px red /* x */")));
        assert!(!matches_kind(TokenKind::Color, &text("red */")));
        assert!(matches_kind(TokenKind::Color, &text("red")));
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("chat"));
        assert!(is_identifier("x-sidebar"));
        assert!(!is_identifier("1chat"));
        assert!(!is_identifier("chat sidebar"));
        assert!(!is_identifier(""));
    }
}
