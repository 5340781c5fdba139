//! QR-code image component.
//!
//! Text is encoded with the `qrcode` crate and drawn as an SVG, delivered to an
//! `<img>` as a base64 data URL. Encoding runs as a spawned task after every
//! change to text, width or margin; a [`RequestGeneration`] ticket drops
//! results that finish after a newer request started.

use std::cell::Cell;
use std::rc::Rc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use leptos::*;
use qrcode::{Color, QrCode};

use crate::class::resolve_class;
use crate::config::{use_ui_config, QrColors};
use crate::error::QrError;

/// Image edge in pixels when the caller passes no width.
pub const DEFAULT_QR_WIDTH: u32 = 140;

/// Prefix of every generated image source.
pub const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything that determines a QR image.
pub struct QrRequest {
    /// Encoded content.
    pub text: String,
    /// Image edge in pixels.
    pub width: u32,
    /// Quiet zone in modules on each side.
    pub margin: u32,
    /// Module colors.
    pub colors: QrColors,
}

impl QrRequest {
    /// Request with default width, no margin and default colors.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: DEFAULT_QR_WIDTH,
            margin: 0,
            colors: QrColors::default(),
        }
    }

    /// Renders the SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::InvalidWidth`] for a zero width,
    /// [`QrError::InvalidColor`] for a color that is not hex,
    /// [`QrError::Encode`] when the text does not fit in a QR code, and
    /// [`QrError::InvalidMargin`] when the quiet zone overflows.
    pub fn to_svg(&self) -> Result<String, QrError> {
        if self.width == 0 {
            return Err(QrError::InvalidWidth);
        }
        validate_color(&self.colors.dark)?;
        validate_color(&self.colors.light)?;

        let code = QrCode::new(self.text.as_bytes())?;
        let modules = code.width();
        let margin = self.margin;
        let extent = u32::try_from(modules)
            .ok()
            .and_then(|modules| margin.checked_mul(2)?.checked_add(modules))
            .ok_or(QrError::InvalidMargin(margin))?;

        // Coordinates stay below `extent`, so they fit in u32.
        let path: String = code
            .to_colors()
            .into_iter()
            .enumerate()
            .filter(|(_, color)| *color == Color::Dark)
            .map(|(index, _)| {
                let x = (index % modules) as u32 + margin;
                let y = (index / modules) as u32 + margin;
                format!("M{x} {y}h1v1h-1z")
            })
            .collect();

        Ok(format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{width}" "#,
                r#"viewBox="0 0 {extent} {extent}" shape-rendering="crispEdges">"#,
                r#"<rect width="{extent}" height="{extent}" fill="{light}"/>"#,
                r#"<path fill="{dark}" d="{path}"/></svg>"#
            ),
            width = self.width,
            extent = extent,
            light = self.colors.light,
            dark = self.colors.dark,
            path = path,
        ))
    }

    /// Renders the image as a `data:` URL.
    ///
    /// # Errors
    ///
    /// Same as [`QrRequest::to_svg`].
    pub fn to_data_url(&self) -> Result<String, QrError> {
        let svg = self.to_svg()?;
        Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(svg)))
    }
}

fn validate_color(color: &str) -> Result<(), QrError> {
    let valid = color
        .strip_prefix('#')
        .filter(|hex| matches!(hex.len(), 6 | 8))
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(QrError::InvalidColor(color.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
/// Monotonic request counter shared between a component and its pending encodes.
pub struct RequestGeneration(Rc<Cell<u64>>);

impl RequestGeneration {
    /// Starts a request, superseding all earlier ones. Returns its ticket.
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Whether `ticket` belongs to the latest request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[component]
/// QR image for `text`. Renders nothing until the first encode finishes.
///
/// A failed encode is logged and removes any previous image.
pub fn Qr(
    /// Content to encode.
    #[prop(into)]
    text: MaybeSignal<String>,
    /// Extra class on the `<img>`.
    #[prop(optional, into)]
    class_name: Option<String>,
    /// Quiet zone in modules.
    #[prop(default = MaybeSignal::Static(0), into)]
    margin: MaybeSignal<u32>,
    /// Image edge in pixels.
    #[prop(default = MaybeSignal::Static(DEFAULT_QR_WIDTH), into)]
    width: MaybeSignal<u32>,
) -> impl IntoView {
    let colors = use_ui_config().qr;
    let class = resolve_class("Qr", class_name.as_deref(), &[]);
    let generation = RequestGeneration::default();
    let (src, set_src) = create_signal(None::<String>);

    create_effect(move |_| {
        let request = QrRequest {
            text: text.get(),
            width: width.get(),
            margin: margin.get(),
            colors: colors.clone(),
        };
        let ticket = generation.begin();
        let generation = generation.clone();
        spawn_local(async move {
            let result = request.to_data_url();
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(url) => set_src.set(Some(url)),
                Err(err) => {
                    logging::warn!("qr image generation failed: {err}");
                    set_src.set(None);
                }
            }
        });
    });

    move || {
        src.get().map(|src| {
            view! { <img alt="QR Code" class=class.clone() data-testid="Qr" src=src /> }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn hello() -> QrRequest {
        QrRequest::new("Hello World")
    }

    fn decode(url: &str) -> String {
        let payload = url.strip_prefix(DATA_URL_PREFIX).expect("data url prefix");
        String::from_utf8(STANDARD.decode(payload).expect("base64")).expect("utf8")
    }

    #[test]
    fn hello_world_is_a_well_formed_svg_data_url() {
        let url = hello().to_data_url().expect("encode");
        let svg = decode(&url);

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="140" height="140""#));
        assert!(svg.contains(r##"fill="#000000""##));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn same_inputs_give_the_same_url() {
        assert_eq!(hello().to_data_url().expect("a"), hello().to_data_url().expect("b"));
    }

    #[test]
    fn url_changes_with_text_width_and_margin() {
        let base = hello().to_data_url().expect("base");

        let other_text = QrRequest::new("Hello World!").to_data_url().expect("text");
        let wider = QrRequest { width: 200, ..hello() }.to_data_url().expect("width");
        let padded = QrRequest { margin: 4, ..hello() }.to_data_url().expect("margin");

        assert_ne!(base, other_text);
        assert_ne!(base, wider);
        assert_ne!(base, padded);
    }

    #[test]
    fn margin_grows_the_view_box() {
        let tight = decode(&hello().to_data_url().expect("tight"));
        let padded = decode(&QrRequest { margin: 2, ..hello() }.to_data_url().expect("padded"));

        // "Hello World" fits a version 1 code: 21 modules per side.
        assert!(tight.contains(r#"viewBox="0 0 21 21""#));
        assert!(padded.contains(r#"viewBox="0 0 25 25""#));
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = QrRequest { width: 0, ..hello() }.to_svg().unwrap_err();
        assert!(matches!(err, QrError::InvalidWidth));
    }

    #[test]
    fn non_hex_colors_are_rejected() {
        let mut request = hello();
        request.colors.dark = "black".to_string();

        let err = request.to_svg().unwrap_err();
        assert_eq!(err.to_string(), "invalid qr color `black`");
    }

    #[test]
    fn overflowing_margin_is_rejected() {
        let err = QrRequest { margin: u32::MAX, ..hello() }.to_svg().unwrap_err();
        assert!(matches!(err, QrError::InvalidMargin(u32::MAX)));
    }

    #[test]
    fn oversized_payload_reports_encode_error() {
        let err = QrRequest::new("x".repeat(8000)).to_svg().unwrap_err();
        assert!(matches!(err, QrError::Encode(_)));
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let generation = RequestGeneration::default();
        let first = generation.begin();
        let pending = generation.clone();
        let second = generation.begin();

        assert!(!pending.is_current(first));
        assert!(pending.is_current(second));
    }
}
