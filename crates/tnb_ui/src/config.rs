//! Library-wide defaults shared through Leptos context.
//!
//! Components read [`UiConfig`] with [`use_ui_config`]; when an application
//! never calls [`provide_ui_config`], the built-in defaults apply.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Defaults applied when a component prop is omitted.
pub struct UiConfig {
    /// Id of the element select menus mount into.
    pub dropdown_root_id: String,
    /// Placeholder for an empty select.
    pub select_placeholder: String,
    /// Placeholder for an empty text field.
    pub text_field_placeholder: String,
    /// QR module colors.
    pub qr: QrColors,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dropdown_root_id: "dropdown-root".to_string(),
            select_placeholder: "Select".to_string(),
            text_field_placeholder: "Enter".to_string(),
            qr: QrColors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Hex colors for QR modules.
pub struct QrColors {
    /// Dark module color.
    pub dark: String,
    /// Light module and quiet-zone color.
    pub light: String,
}

impl Default for QrColors {
    fn default() -> Self {
        Self {
            dark: "#000000".to_string(),
            light: "#ffffff".to_string(),
        }
    }
}

impl UiConfig {
    /// Parses a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`UiConfig::from_json`], but logs the failure and keeps defaults.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            logging::warn!("{err}; using default ui config");
            Self::default()
        })
    }
}

/// Makes `config` visible to every component below the current owner.
pub fn provide_ui_config(config: UiConfig) {
    provide_context(config);
}

/// Reads the nearest provided [`UiConfig`], or the defaults.
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
