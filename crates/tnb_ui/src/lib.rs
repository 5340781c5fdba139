//! Presentational Leptos components: icon, button, select, text field and QR image.
//!
//! Each component maps typed props to markup and class names. The shared
//! pieces are pure functions re-evaluated on every reactive update:
//! [`resolve_class`] for BEM-style class lists, [`resolve_box`] for icon box
//! sizing, [`InteractionGate`] for click/keyboard forwarding and tab order,
//! and the option enums in [`variant`] for closed prop sets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod class;
mod config;
mod error;
mod focus;
mod icon;
mod interaction;
mod qr;
mod select;
mod text_field;
pub mod variant;

pub use button::{button_class, Button};
pub use class::resolve_class;
pub use config::{provide_ui_config, use_ui_config, QrColors, UiConfig};
pub use error::{ConfigError, QrError, UnsupportedValue};
pub use icon::{resolve_box, BoxSize, Glyph, Icon, IconKind, TotalSize, DEFAULT_TOTAL_SIZE};
pub use interaction::{AriaRole, ClickCapability, InteractionGate, ACTIVATION_KEY};
pub use qr::{Qr, QrRequest, RequestGeneration, DATA_URL_PREFIX, DEFAULT_QR_WIDTH};
pub use select::{
    default_filter, menu_entries, FilterOption, FormatOptionLabel, MenuCommand, MenuEntry,
    MenuKey, MenuState, OptionLabelContext, Select, SelectAction, SelectChange, SelectOption,
    ValueSource,
};
pub use text_field::TextField;
pub use variant::{parse_or_default, ButtonColor, ButtonType, ButtonVariant, TextFieldType};

/// Convenience imports for applications consuming the component set.
pub mod prelude {
    pub use crate::{
        provide_ui_config, Button, ButtonColor, ButtonType, ButtonVariant, Icon, IconKind, Qr,
        Select, SelectChange, SelectOption, TextField, TextFieldType, TotalSize, UiConfig,
    };
}
