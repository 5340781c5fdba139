//! Text input with error styling and config-driven placeholder.

use leptos::ev::FocusEvent;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::class::resolve_class;
use crate::config::use_ui_config;
use crate::focus::focus_deferred;
use crate::variant::TextFieldType;

#[component]
/// Single-line `<input>` with an error outline state.
///
/// Pair `value` with `on_input`/`on_change` for a controlled field; a static
/// `value` only seeds the initial text.
pub fn TextField(
    /// Extra class, also suffixed with `--error`.
    #[prop(optional, into)]
    class_name: Option<String>,
    /// Disables the input.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Adds the `--error` modifier.
    #[prop(optional, into)]
    error: MaybeSignal<bool>,
    /// Focus the input after mount.
    #[prop(optional)]
    focused: bool,
    /// Form field name.
    #[prop(optional, into)]
    name: Option<String>,
    /// Placeholder. Defaults to the configured text-field placeholder.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Native input type.
    #[prop(optional)]
    field_type: TextFieldType,
    /// Current value.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    /// Blur handler.
    #[prop(optional)]
    on_blur: Option<Callback<FocusEvent>>,
    /// Change handler (fires on commit).
    #[prop(optional)]
    on_change: Option<Callback<web_sys::Event>>,
    /// Input handler (fires on every edit).
    #[prop(optional)]
    on_input: Option<Callback<web_sys::Event>>,
    /// Reference to the `<input>` element.
    #[prop(optional)]
    node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| use_ui_config().text_field_placeholder);

    if focused {
        node_ref.on_load(move |input| {
            focus_deferred(input.unchecked_ref::<web_sys::HtmlElement>().clone());
        });
    }

    view! {
        <input
            class=move || resolve_class("TextField", class_name.as_deref(), &[("error", error.get())])
            data-testid="TextField"
            type=field_type.attribute()
            name=name
            placeholder=placeholder
            prop:value=move || value.get()
            disabled=move || disabled.get()
            node_ref=node_ref
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}
