//! Closed option sets mapped to class-name modifiers or native attributes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedValue;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button color scheme.
pub enum ButtonColor {
    /// Main brand color.
    #[default]
    Primary,
    /// Secondary color.
    Secondary,
    /// Tertiary color.
    Tertiary,
}

impl ButtonColor {
    /// Class modifier token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

impl FromStr for ButtonColor {
    type Err = UnsupportedValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "tertiary" => Ok(Self::Tertiary),
            other => Err(UnsupportedValue::new("button color", other)),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button fill style.
pub enum ButtonVariant {
    /// Filled background.
    #[default]
    Contained,
    /// Text-only, link styled.
    Link,
}

impl ButtonVariant {
    /// Class modifier token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Contained => "contained",
            Self::Link => "link",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = UnsupportedValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "contained" => Ok(Self::Contained),
            "link" => Ok(Self::Link),
            other => Err(UnsupportedValue::new("button variant", other)),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Native `type` of a `<button>`.
pub enum ButtonType {
    /// Plain button, no form behavior.
    #[default]
    Button,
    /// Resets the owning form.
    Reset,
    /// Submits the owning form.
    Submit,
}

impl ButtonType {
    /// Value for the `type` attribute.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Reset => "reset",
            Self::Submit => "submit",
        }
    }
}

impl FromStr for ButtonType {
    type Err = UnsupportedValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "button" => Ok(Self::Button),
            "reset" => Ok(Self::Reset),
            "submit" => Ok(Self::Submit),
            other => Err(UnsupportedValue::new("button type", other)),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Native `type` of a text field `<input>`.
pub enum TextFieldType {
    /// Free text.
    #[default]
    Text,
    /// Numeric entry.
    Number,
}

impl TextFieldType {
    /// Value for the `type` attribute.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
        }
    }
}

impl FromStr for TextFieldType {
    type Err = UnsupportedValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            other => Err(UnsupportedValue::new("text field type", other)),
        }
    }
}

/// Parses `token`, falling back to the type's default for unsupported values.
///
/// The fallback is reported through `debug_warn!` so misconfigured callers
/// show up in development builds.
pub fn parse_or_default<T>(token: &str) -> T
where
    T: FromStr<Err = UnsupportedValue> + Default,
{
    match token.parse() {
        Ok(value) => value,
        Err(err) => {
            leptos::logging::debug_warn!("{err}; using default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(ButtonColor::default().token(), "primary");
        assert_eq!(ButtonVariant::default().token(), "contained");
        assert_eq!(ButtonType::default().attribute(), "button");
        assert_eq!(TextFieldType::default().attribute(), "text");
    }

    #[test]
    fn every_button_type_maps_to_its_native_attribute() {
        for (ty, attr) in [
            (ButtonType::Button, "button"),
            (ButtonType::Reset, "reset"),
            (ButtonType::Submit, "submit"),
        ] {
            assert_eq!(ty.attribute(), attr);
            assert_eq!(attr.parse::<ButtonType>(), Ok(ty));
        }
    }

    #[test]
    fn unsupported_tokens_are_reported() {
        let err = "quaternary".parse::<ButtonColor>().unwrap_err();

        assert_eq!(err.kind, "button color");
        assert_eq!(err.to_string(), "unsupported button color value `quaternary`");
    }

    #[test]
    fn parse_or_default_falls_back() {
        assert_eq!(parse_or_default::<ButtonVariant>("link"), ButtonVariant::Link);
        assert_eq!(parse_or_default::<ButtonVariant>("outline"), ButtonVariant::Contained);
        assert_eq!(parse_or_default::<TextFieldType>("email"), TextFieldType::Text);
    }

    #[test]
    fn serde_uses_tokens() {
        let json = serde_json::to_string(&ButtonColor::Tertiary).expect("serialize");
        assert_eq!(json, "\"tertiary\"");

        let ty: TextFieldType = serde_json::from_str("\"number\"").expect("deserialize");
        assert_eq!(ty, TextFieldType::Number);
    }
}
