//! Icon catalog and the `Icon` component.
//!
//! Kinds map to glyphs through a static table (see [`Glyph`]), so adding an
//! icon is a new enum variant plus one table row. The component wraps the SVG
//! in a sized box and becomes an interactive button when given `on_click`.

use std::str::FromStr;

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::class::{bool_token, resolve_class};
use crate::error::UnsupportedValue;
use crate::interaction::InteractionGate;

mod glyphs;
mod size;

pub use glyphs::Glyph;
pub use size::{resolve_box, BoxSize, TotalSize, DEFAULT_TOTAL_SIZE};

use glyphs::GLYPHS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Icon identifiers, named after Material Design Icons.
pub enum IconKind {
    /// Warning triangle.
    Alert,
    /// Outlined circle with exclamation mark.
    AlertCircleOutline,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Notification bell.
    Bell,
    /// Filled circle.
    CheckboxBlankCircle,
    /// Circle outline.
    CheckboxBlankCircleOutline,
    /// Empty checkbox.
    CheckboxBlankOutline,
    /// Checked checkbox.
    CheckboxMarked,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Close cross.
    Close,
    /// Copy to clipboard.
    ContentCopy,
    /// DEV community logo.
    DevTo,
    /// Vertical ellipsis menu.
    DotsVertical,
    /// Download tray.
    Download,
    /// Visible.
    Eye,
    /// Hidden.
    EyeOff,
    /// Network connected.
    LanConnect,
    /// Network disconnected.
    LanDisconnect,
    /// Hyperlink.
    Link,
    /// Spinner arc.
    Loading,
    /// Edit pencil.
    Pencil,
    /// Play triangle.
    Play,
    /// Plus sign.
    Plus,
    /// Unselected radio.
    RadioboxBlank,
    /// Selected radio.
    RadioboxMarked,
    /// Refresh arrow.
    Refresh,
    /// Sync arrows.
    Sync,
    /// Thumbs up.
    ThumbsUp,
    /// Brand mark.
    Tnb,
}

impl IconKind {
    /// Every kind, in table order.
    pub const ALL: [Self; 31] = [
        Self::Alert,
        Self::AlertCircleOutline,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::Bell,
        Self::CheckboxBlankCircle,
        Self::CheckboxBlankCircleOutline,
        Self::CheckboxBlankOutline,
        Self::CheckboxMarked,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::Close,
        Self::ContentCopy,
        Self::DevTo,
        Self::DotsVertical,
        Self::Download,
        Self::Eye,
        Self::EyeOff,
        Self::LanConnect,
        Self::LanDisconnect,
        Self::Link,
        Self::Loading,
        Self::Pencil,
        Self::Play,
        Self::Plus,
        Self::RadioboxBlank,
        Self::RadioboxMarked,
        Self::Refresh,
        Self::Sync,
        Self::ThumbsUp,
        Self::Tnb,
    ];

    /// Table row for this kind.
    pub fn glyph(self) -> &'static Glyph {
        &GLYPHS[self as usize]
    }

    /// Stable token used for parsing and the `data-icon` hook.
    pub fn token(self) -> &'static str {
        self.glyph().token
    }

    /// Rendered size when the caller passes none.
    pub fn default_size(self) -> u32 {
        self.glyph().default_size
    }

    /// Glyph size for a caller `size`. Zero counts as unset.
    pub fn glyph_size(self, size: Option<u32>) -> u32 {
        size.filter(|px| *px > 0).unwrap_or_else(|| self.default_size())
    }
}

impl FromStr for IconKind {
    type Err = UnsupportedValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == value)
            .ok_or_else(|| UnsupportedValue::new("icon", value))
    }
}

#[component]
/// Icon with optional click behavior.
///
/// Without `on_click` the root is a presentational image outside the tab
/// order. With it, the root acts as a button: focusable unless `disabled` or
/// `unfocusable`, and activated by click or Enter unless `disabled`.
pub fn Icon(
    /// Glyph to render.
    icon: IconKind,
    /// Extra class, also suffixed with `--disabled` / `--button`.
    #[prop(optional, into)]
    class_name: Option<String>,
    /// Suppresses click activation and removes the icon from tab order.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Click handler; its presence makes the icon interactive.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Key-down handler, called for every key.
    #[prop(optional)]
    on_key_down: Option<Callback<KeyboardEvent>>,
    /// Glyph size in pixels. Defaults per kind.
    #[prop(optional)]
    size: Option<u32>,
    /// Outer box size, or [`TotalSize::Unset`].
    #[prop(optional, into)]
    total_size: TotalSize,
    /// Keeps an interactive icon out of the tab order.
    #[prop(optional)]
    unfocusable: bool,
    /// Reference to the root element.
    #[prop(optional)]
    node_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let has_click = on_click.is_some();
    let disabled = Signal::derive(move || disabled.get());
    let gate = move || InteractionGate::new(has_click, disabled.get(), unfocusable);
    let class = move || {
        resolve_class(
            "Icon",
            class_name.as_deref(),
            &[("button", has_click), ("disabled", disabled.get())],
        )
    };
    let style = resolve_box(size, total_size).map(BoxSize::style);
    let glyph_px = icon.glyph_size(size).to_string();

    let forward_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    view! {
        <div
            class=class
            data-testid="Icon"
            data-icon=icon.token()
            role=move || gate().role().token()
            tabindex=move || gate().tab_index()
            aria-disabled=move || has_click.then(|| bool_token(disabled.get()))
            style=style
            node_ref=node_ref
            on:click=move |ev| {
                gate().click(ev, &forward_click);
            }
            on:keydown=move |ev: KeyboardEvent| {
                let key = ev.key();
                gate()
                    .key_down(
                        &key,
                        ev,
                        |ev| {
                            if let Some(on_key_down) = on_key_down.as_ref() {
                                on_key_down.call(ev);
                            }
                        },
                        || {
                            // Route through a native click so `on_click` gets a real event.
                            if let Some(root) = node_ref.get_untracked() {
                                root.click();
                            }
                        },
                    );
            }
        >
            <svg
                class="Icon__svg"
                data-testid="Icon__svg"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                width=glyph_px.clone()
                height=glyph_px
                fill="currentColor"
                focusable="false"
                aria-hidden="true"
            >
                <path d=icon.glyph().path></path>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn table_rows_line_up_with_kinds() {
        for (index, kind) in IconKind::ALL.into_iter().enumerate() {
            assert_eq!(kind as usize, index);
            let token = serde_json::to_value(kind).expect("serialize");
            assert_eq!(token, kind.token(), "{kind:?}");
        }
    }

    #[test]
    fn tokens_are_unique_and_parse_back() {
        let tokens: HashSet<_> = IconKind::ALL.into_iter().map(IconKind::token).collect();
        assert_eq!(tokens.len(), IconKind::ALL.len());

        for kind in IconKind::ALL {
            assert_eq!(kind.token().parse::<IconKind>(), Ok(kind));
        }
    }

    #[test]
    fn alert_defaults_to_24px() {
        assert_eq!(IconKind::Alert.default_size(), 24);
    }

    #[test]
    fn zero_size_falls_back_to_kind_default() {
        assert_eq!(IconKind::Bell.glyph_size(Some(0)), 22);
        assert_eq!(IconKind::Bell.glyph_size(None), 22);
        assert_eq!(IconKind::Bell.glyph_size(Some(40)), 40);
    }

    #[test]
    fn documented_per_kind_default_sizes() {
        for kind in [IconKind::Bell, IconKind::ContentCopy, IconKind::Eye, IconKind::EyeOff] {
            assert_eq!(kind.default_size(), 22, "{kind:?}");
        }
        assert_eq!(IconKind::ThumbsUp.default_size(), 20);
        assert_eq!(IconKind::Tnb.default_size(), 24);
    }

    #[test]
    fn unknown_icon_token_is_unsupported() {
        let err = "unicorn".parse::<IconKind>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported icon value `unicorn`");
    }

    #[test]
    fn every_glyph_has_path_data() {
        for kind in IconKind::ALL {
            assert!(kind.glyph().path.starts_with('M'), "{kind:?}");
        }
    }
}
