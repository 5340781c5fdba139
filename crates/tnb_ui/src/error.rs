//! Error types for the component library.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A token that does not name any value of a closed enumeration.
#[error("unsupported {kind} value `{value}`")]
pub struct UnsupportedValue {
    /// Enumeration being parsed, for example `button color`.
    pub kind: &'static str,
    /// Token that failed to parse.
    pub value: String,
}

impl UnsupportedValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Error)]
/// Failures while turning text into a QR image.
pub enum QrError {
    /// The encoder rejected the payload (for example, data too long).
    #[error("qr encode failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    /// Requested output width was zero.
    #[error("qr width must be greater than zero")]
    InvalidWidth,
    /// The quiet zone does not fit in the image coordinate space.
    #[error("qr margin {0} is too large")]
    InvalidMargin(u32),
    /// A module color was not a `#rrggbb` or `#rrggbbaa` hex string.
    #[error("invalid qr color `{0}`")]
    InvalidColor(String),
}

#[derive(Debug, Error)]
/// Failures while loading library configuration.
pub enum ConfigError {
    /// The configuration document was not valid JSON for [`crate::UiConfig`].
    #[error("ui config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
