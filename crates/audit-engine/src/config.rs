//! Engine configuration
//!
//! The sanctioned font identifiers and the token namespace are owned by the
//! design-token stylesheet; the host hands them over as JSON, or relies on
//! the defaults baked in here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to parse audit config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Font identifiers the computed-font check accepts: the two brand
    /// families, the icon font, and the system fallbacks
    #[serde(default = "default_approved_fonts")]
    pub approved_fonts: Vec<String>,
    /// Prefix of the sanctioned token namespace
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
}

fn default_approved_fonts() -> Vec<String> {
    ["Archivo", "Lora", "Remix Icon", "system-ui", "sans-serif"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_token_prefix() -> String {
    "ds-".to_string()
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            approved_fonts: default_approved_fonts(),
            token_prefix: default_token_prefix(),
        }
    }
}

impl AuditConfig {
    /// Parse configuration from a JSON string; missing fields fall back to
    /// the defaults
    pub fn from_json(s: &str) -> Result<Self, AuditError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Whether a resolved font-family stack contains any sanctioned
    /// identifier (case-insensitive substring match)
    pub fn font_is_approved(&self, family: &str) -> bool {
        let family_lower = family.to_lowercase();
        self.approved_fonts
            .iter()
            .any(|approved| family_lower.contains(&approved.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = AuditConfig::from_json("{}").unwrap();
        assert_eq!(config.token_prefix, "ds-");
        assert!(config.font_is_approved("Archivo, sans-serif"));
    }

    #[test]
    fn test_partial_json_overrides_one_field() {
        let config = AuditConfig::from_json(r#"{"token_prefix": "tk-"}"#).unwrap();
        assert_eq!(config.token_prefix, "tk-");
        assert!(config.font_is_approved("Lora, serif"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AuditConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_font_approval_is_case_insensitive_substring() {
        let config = AuditConfig::default();
        assert!(config.font_is_approved("\"archivo\", system-ui"));
        assert!(config.font_is_approved("Helvetica, sans-serif"));
        assert!(!config.font_is_approved("Arial"));
        assert!(!config.font_is_approved("Comic Sans MS, cursive"));
    }
}
