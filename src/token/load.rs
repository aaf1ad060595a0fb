//! Loading token bundles from JSON and YAML theme files.

use std::path::{Path, PathBuf};

use super::bundle::TokenBundle;

/// Error returned when a token bundle cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum TokenLoadError {
    /// The file could not be read.
    #[error("failed to read token file \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a JSON object of numbers and strings.
    #[error("invalid JSON token bundle: {0}")]
    Json(#[from] serde_json::Error),

    /// The content is not a YAML mapping of numbers and strings.
    #[error("invalid YAML token bundle: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not one of `.json`, `.yaml` or `.yml`.
    #[error("unsupported token file format \"{}\" (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl TokenBundle {
    /// Parses a bundle from a JSON object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sidebar_styles::{TokenBundle, TokenName, TokenValue};
    ///
    /// let bundle = TokenBundle::from_json_str(r##"{"borderRadius": 8, "colorText": "#000"}"##).unwrap();
    /// assert_eq!(bundle.get(TokenName::BorderRadius), Some(&TokenValue::Number(8.0)));
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self, TokenLoadError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a bundle from a YAML mapping.
    pub fn from_yaml_str(content: &str) -> Result<Self, TokenLoadError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reads a bundle from disk, choosing the parser from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`TokenLoadError::UnsupportedFormat`] before touching the
    /// filesystem if the extension is not recognized.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TokenLoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<TokenBundle, TokenLoadError> = match extension.as_deref() {
            Some("json") => TokenBundle::from_json_str,
            Some("yaml") | Some("yml") => TokenBundle::from_yaml_str,
            _ => {
                return Err(TokenLoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| TokenLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let bundle = parse(&content)?;
        tracing::debug!(path = %path.display(), entries = bundle.len(), "loaded token bundle");
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{TokenName, TokenValue};

    #[test]
    fn test_from_json_str() {
        let bundle = TokenBundle::from_json_str(
            r##"{"borderRadius": 8, "colorText": "#000", "fontFamily": "Arial"}"##,
        )
        .unwrap();

        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.get(TokenName::BorderRadius), Some(&TokenValue::Number(8.0)));
        assert_eq!(
            bundle.get(TokenName::FontFamily),
            Some(&TokenValue::Text("Arial".into()))
        );
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = "borderRadius: 4\ncolorPrimary: \"#1677ff\"\n";
        let bundle = TokenBundle::from_yaml_str(yaml).unwrap();

        assert_eq!(bundle.get(TokenName::BorderRadius), Some(&TokenValue::Number(4.0)));
        assert_eq!(
            bundle.get(TokenName::ColorPrimary),
            Some(&TokenValue::Text("#1677ff".into()))
        );
    }

    #[test]
    fn test_json_rejects_nested_values() {
        let result = TokenBundle::from_json_str(r##"{"colorText": {"light": "#000"}}"##);
        assert!(matches!(result, Err(TokenLoadError::Json(_))));
    }

    #[test]
    fn test_json_rejects_non_object() {
        let result = TokenBundle::from_json_str("[1, 2, 3]");
        assert!(matches!(result, Err(TokenLoadError::Json(_))));
    }

    #[test]
    fn test_from_path_unsupported_extension() {
        let result = TokenBundle::from_path("/nonexistent/theme.toml");
        match result {
            Err(TokenLoadError::UnsupportedFormat { path }) => {
                assert!(path.ends_with("theme.toml"));
            }
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = TokenBundle::from_path("/nonexistent/theme.json");
        assert!(matches!(result, Err(TokenLoadError::Io { .. })));
    }
}
