//! Native `<button>` with color, variant and type options.

use leptos::ev::{FocusEvent, MouseEvent};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::class::resolve_class;
use crate::focus::focus_deferred;
use crate::interaction::InteractionGate;
use crate::variant::{ButtonColor, ButtonType, ButtonVariant};

/// Class for a button root.
///
/// Variant and color modifiers are always present; `disabled` adds the
/// `--disabled` modifier.
pub fn button_class(
    class_name: Option<&str>,
    variant: ButtonVariant,
    color: ButtonColor,
    disabled: bool,
) -> String {
    resolve_class(
        "Button",
        class_name,
        &[(variant.token(), true), (color.token(), true), ("disabled", disabled)],
    )
}

#[component]
/// Button primitive.
///
/// `disabled` sets the native attribute, which also drops the button from the
/// tab order, and suppresses `on_click`. `focused` focuses the button once it
/// is mounted, unless it is disabled.
pub fn Button(
    /// Button label and content.
    children: Children,
    /// Extra class, also suffixed with each modifier.
    #[prop(optional, into)]
    class_name: Option<String>,
    /// Color scheme.
    #[prop(optional)]
    color: ButtonColor,
    /// Fill style.
    #[prop(optional)]
    variant: ButtonVariant,
    /// Native `type` attribute.
    #[prop(optional)]
    button_type: ButtonType,
    /// Disables the button.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Focus the button after mount.
    #[prop(optional)]
    focused: bool,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Blur handler.
    #[prop(optional)]
    on_blur: Option<Callback<FocusEvent>>,
    /// Mouse-down handler.
    #[prop(optional)]
    on_mouse_down: Option<Callback<MouseEvent>>,
    /// Reference to the `<button>` element.
    #[prop(optional)]
    node_ref: NodeRef<html::Button>,
) -> impl IntoView {
    let disabled = Signal::derive(move || disabled.get());
    let has_click = on_click.is_some();

    if focused {
        node_ref.on_load(move |button| {
            if !disabled.get_untracked() {
                focus_deferred(button.unchecked_ref::<web_sys::HtmlElement>().clone());
            }
        });
    }

    let forward_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    view! {
        <button
            class=move || button_class(class_name.as_deref(), variant, color, disabled.get())
            data-testid="Button"
            type=button_type.attribute()
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |ev| {
                InteractionGate::new(has_click, disabled.get_untracked(), false)
                    .click(ev, &forward_click);
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
            on:mousedown=move |ev| {
                if let Some(on_mouse_down) = on_mouse_down.as_ref() {
                    on_mouse_down.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn classes(class: &str) -> Vec<&str> {
        class.split(' ').collect()
    }

    #[test]
    fn default_class_has_contained_and_primary() {
        let class = button_class(None, ButtonVariant::default(), ButtonColor::default(), false);

        assert_eq!(classes(&class), vec!["Button", "Button--contained", "Button--primary"]);
    }

    #[test]
    fn caller_class_gets_every_modifier() {
        let class = button_class(
            Some("test"),
            ButtonVariant::default(),
            ButtonColor::default(),
            false,
        );
        let classes = classes(&class);

        for expected in ["test", "test--contained", "test--primary"] {
            assert!(classes.contains(&expected), "{expected} missing from {class}");
        }
    }

    #[test]
    fn disabled_adds_modifier_for_base_and_caller() {
        let class = button_class(Some("test"), ButtonVariant::Link, ButtonColor::Tertiary, true);

        assert!(class.contains("Button--disabled"));
        assert!(class.contains("test--disabled"));
        assert!(class.contains("Button--link"));
        assert!(class.contains("Button--tertiary"));
    }

    #[test]
    fn each_color_selects_one_modifier() {
        for color in [ButtonColor::Primary, ButtonColor::Secondary, ButtonColor::Tertiary] {
            let class = button_class(None, ButtonVariant::Contained, color, false);
            let color_modifiers = ["primary", "secondary", "tertiary"]
                .into_iter()
                .filter(|token| class.contains(&format!("Button--{token}")))
                .count();

            assert_eq!(color_modifiers, 1, "{class}");
            assert!(class.contains(&format!("Button--{}", color.token())));
        }
    }
}
