//! Style construction errors.

use crate::style::SlotName;
use crate::token::{TokenKind, TokenName};

/// Error returned when a registry cannot be built from a token bundle.
///
/// Construction is all-or-nothing: any of these aborts the build and no
/// partially resolved registry is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A slot references a token the bundle does not define.
    #[error("slot '{slot}' requires token '{token}', which is missing from the token bundle")]
    MissingToken { token: TokenName, slot: SlotName },

    /// A referenced token is present but has the wrong shape.
    #[error("token '{token}' required by slot '{slot}' is not a valid {expected}: '{found}'")]
    MalformedToken {
        token: TokenName,
        slot: SlotName,
        expected: TokenKind,
        found: String,
    },

    /// A class-name prefix is not a CSS identifier.
    #[error("class prefix '{prefix}' is not a valid CSS identifier")]
    InvalidClassPrefix { prefix: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_error_display() {
        let err = StyleError::MissingToken {
            token: TokenName::ColorPrimaryBg,
            slot: SlotName::Conversations,
        };
        let msg = err.to_string();
        assert!(msg.contains("colorPrimaryBg"));
        assert!(msg.contains("conversations"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_malformed_token_error_display() {
        let err = StyleError::MalformedToken {
            token: TokenName::BorderRadius,
            slot: SlotName::FunctionMenuItem,
            expected: TokenKind::Size,
            found: "large".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("borderRadius"));
        assert!(msg.contains("functionMenuItem"));
        assert!(msg.contains("pixel size"));
        assert!(msg.contains("'large'"));
    }

    #[test]
    fn test_invalid_prefix_error_display() {
        let err = StyleError::InvalidClassPrefix {
            prefix: "9lives".to_string(),
        };
        assert!(err.to_string().contains("9lives"));
    }
}
