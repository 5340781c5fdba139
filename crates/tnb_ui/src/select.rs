//! Searchable dropdown select.
//!
//! The control renders the current value and a search input. The open menu is
//! mounted into the configured portal element when it exists, otherwise
//! directly under the control. Inner parts use the `Select__` prefix.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::class::resolve_class;
use crate::config::use_ui_config;
use crate::focus::focus_deferred;
use crate::icon::{Icon, IconKind, TotalSize};

mod menu;

pub use menu::{
    default_filter, menu_entries, MenuCommand, MenuEntry, MenuKey, MenuState, SelectAction,
    SelectChange, SelectOption, ValueSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where an option label is being rendered.
pub enum OptionLabelContext {
    /// A row in the open menu.
    Menu,
    /// The selected value in the control.
    Value,
}

/// Caller filter: `(option, query) -> keep`.
pub type FilterOption = Callback<(SelectOption, String), bool>;

/// Caller label renderer.
pub type FormatOptionLabel = Callback<(SelectOption, OptionLabelContext), View>;

/// Turns the right-pointing chevron into a downward arrow.
const DROPDOWN_INDICATOR_STYLE: &str = "display: flex; transform: rotate(90deg);";

fn option_class(focused: bool, selected: bool, disabled: bool) -> String {
    resolve_class(
        "Select__option",
        None,
        &[("is-focused", focused), ("is-selected", selected), ("is-disabled", disabled)],
    )
}

#[component]
/// Dropdown select with optional search, clear and create.
pub fn Select(
    /// Options to choose from.
    #[prop(into)]
    options: MaybeSignal<Vec<SelectOption>>,
    /// Extra class, also suffixed with `--error`.
    #[prop(optional, into)]
    class_name: Option<String>,
    /// Shows a control that clears the value.
    #[prop(optional)]
    clearable: bool,
    /// Offers the typed query as a new option.
    #[prop(optional)]
    creatable: bool,
    /// Disables the whole control.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Adds the `--error` modifier.
    #[prop(optional, into)]
    error: MaybeSignal<bool>,
    /// Focus the search input after mount.
    #[prop(optional)]
    focused: bool,
    /// Id of the element the menu mounts into. Defaults to the configured dropdown root.
    #[prop(optional, into)]
    menu_portal_target: Option<String>,
    /// Form field name, submitted through a hidden input.
    #[prop(optional, into)]
    name: Option<String>,
    /// Placeholder. Defaults to the configured select placeholder.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Allows typing to filter. Defaults to `true`.
    #[prop(default = true)]
    searchable: bool,
    /// Selected option. When given, the control shows only this value and
    /// reports choices through `on_change`; without it the select keeps its
    /// own selection.
    #[prop(optional, into)]
    value: Option<MaybeSignal<Option<SelectOption>>>,
    /// Replaces [`default_filter`].
    #[prop(optional)]
    filter_option: Option<FilterOption>,
    /// Custom label rendering.
    #[prop(optional)]
    format_option_label: Option<FormatOptionLabel>,
    /// Blur handler for the search input.
    #[prop(optional)]
    on_blur: Option<Callback<FocusEvent>>,
    /// Change handler.
    #[prop(optional)]
    on_change: Option<Callback<SelectChange>>,
) -> impl IntoView {
    let config = use_ui_config();
    let placeholder = placeholder.unwrap_or(config.select_placeholder);
    let portal_id = menu_portal_target.unwrap_or(config.dropdown_root_id);

    let options = Signal::derive(move || options.get());
    let disabled = Signal::derive(move || disabled.get());
    let filter_option = store_value(filter_option);
    let format_option_label = store_value(format_option_label);
    let on_change = store_value(on_change);
    let on_blur = store_value(on_blur);

    let source = ValueSource::from_prop(value.is_some());
    let selected = create_rw_signal(None::<SelectOption>);
    if let Some(value) = value {
        create_effect(move |_| selected.set(value.get()));
    }

    let menu = create_rw_signal(MenuState::default());
    let control_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let compute_entries = move |query: &str| {
        options.with(|options| {
            filter_option.with_value(|filter| {
                menu_entries(options, query, creatable, |option, query| match filter {
                    Some(filter) => filter.call((option.clone(), query.to_string())),
                    None => default_filter(option, query),
                })
            })
        })
    };
    let entries = Signal::derive(move || menu.with(|state| compute_entries(&state.query)));

    let emit = move |command: MenuCommand| {
        let Some(change) = command.into_change() else {
            return;
        };
        selected.update(|shown| source.apply(shown, &change));
        on_change.with_value(|on_change| {
            if let Some(on_change) = on_change {
                on_change.call(change);
            }
        });
    };

    let render_label = move |option: SelectOption, context: OptionLabelContext| -> View {
        format_option_label.with_value(|format| match format {
            Some(format) => format.call((option.clone(), context)),
            None => option.display_label().to_string().into_view(),
        })
    };

    if focused {
        input_ref.on_load(move |input| {
            focus_deferred(input.unchecked_ref::<web_sys::HtmlElement>().clone());
        });
    }

    let on_control_mousedown = move |ev: MouseEvent| {
        if disabled.get_untracked() {
            return;
        }
        let input = input_ref.get_untracked();
        let on_input = match (input.as_deref(), ev.target()) {
            (Some(input), Some(target)) => {
                AsRef::<JsValue>::as_ref(input) == AsRef::<JsValue>::as_ref(&target)
            }
            _ => false,
        };
        if !on_input {
            ev.prevent_default();
            if let Some(input) = input {
                let _ = input.focus();
            }
        }
        let rows = entries.get_untracked();
        menu.update(|state| state.press_control(on_input, &rows));
    };

    let on_input_keydown = move |ev: KeyboardEvent| {
        if disabled.get_untracked() {
            return;
        }
        let key = MenuKey::from_key(&ev.key());
        let open = menu.with_untracked(|state| state.open);
        if matches!(key, MenuKey::Down | MenuKey::Up) || (open && key == MenuKey::Enter) {
            ev.prevent_default();
        }
        let rows = entries.get_untracked();
        let command = menu
            .try_update(|state| state.handle_key(key, &rows))
            .unwrap_or(MenuCommand::None);
        emit(command);
    };

    let on_input = move |ev: web_sys::Event| {
        if !searchable {
            return;
        }
        let query = event_target_value(&ev);
        let rows = compute_entries(&query);
        menu.update(|state| state.set_query(query, &rows));
    };

    let on_input_blur = move |ev: FocusEvent| {
        menu.update(MenuState::close);
        on_blur.with_value(|on_blur| {
            if let Some(on_blur) = on_blur {
                on_blur.call(ev);
            }
        });
    };

    let on_clear = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !disabled.get_untracked() {
            emit(MenuCommand::Clear);
        }
    };

    let menu_style = move || {
        control_ref.get_untracked().map(|control| {
            let rect = control.get_bounding_client_rect();
            format!(
                "position: fixed; top: {}px; left: {}px; width: {}px;",
                rect.bottom(),
                rect.left(),
                rect.width()
            )
        })
    };

    let menu_list = move || {
        view! {
            <div class="Select__menu" role="listbox" style=menu_style>
                {move || {
                    let rows = entries.get();
                    if rows.is_empty() {
                        return view! { <div class="Select__menu-notice">"No options"</div> }
                            .into_view();
                    }
                    let highlighted = menu.with(|state| state.highlighted);
                    let current = selected.get();
                    rows.into_iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let (label, is_selected, is_disabled) = match &entry {
                                MenuEntry::Option(option) => (
                                    render_label(option.clone(), OptionLabelContext::Menu),
                                    current.as_ref() == Some(option),
                                    option.disabled,
                                ),
                                MenuEntry::Create(query) => (query.clone().into_view(), false, false),
                            };
                            let is_focused = highlighted == Some(index);
                            view! {
                                <div
                                    class=option_class(is_focused, is_selected, is_disabled)
                                    role="option"
                                    aria-selected=is_selected.to_string()
                                    aria-disabled=is_disabled.to_string()
                                    on:mousedown=move |ev: MouseEvent| {
                                        ev.prevent_default();
                                        let command = menu
                                            .try_update(|state| state.choose(&entry))
                                            .unwrap_or(MenuCommand::None);
                                        emit(command);
                                    }
                                >
                                    {label}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        }
    };

    let portal_target = document().get_element_by_id(&portal_id);
    if portal_target.is_none() {
        logging::debug_warn!("select menu portal `#{portal_id}` not found; rendering inline");
    }
    let menu_view = move || {
        if !menu.with(|state| state.open) {
            return ().into_view();
        }
        match portal_target.clone() {
            Some(target) => view! { <Portal mount=target>{menu_list}</Portal> }.into_view(),
            None => menu_list().into_view(),
        }
    };

    let root_class = move || resolve_class("Select", class_name.as_deref(), &[("error", error.get())]);
    let placeholder = store_value(placeholder);

    view! {
        <div class=root_class data-testid="Select" aria-disabled=move || disabled.get().to_string()>
            <div class="Select__control" node_ref=control_ref on:mousedown=on_control_mousedown>
                <div class="Select__value-container">
                    {move || {
                        if menu.with(|state| !state.query.is_empty()) {
                            return ().into_view();
                        }
                        match selected.get() {
                            Some(option) => view! {
                                <div class="Select__single-value">
                                    {render_label(option, OptionLabelContext::Value)}
                                </div>
                            }
                            .into_view(),
                            None => view! {
                                <div class="Select__placeholder">{placeholder.get_value()}</div>
                            }
                            .into_view(),
                        }
                    }}
                    <input
                        class="Select__input"
                        node_ref=input_ref
                        autocomplete="off"
                        readonly=!searchable
                        disabled=move || disabled.get()
                        prop:value=move || menu.with(|state| state.query.clone())
                        on:input=on_input
                        on:keydown=on_input_keydown
                        on:blur=on_input_blur
                    />
                </div>
                <div class="Select__indicators">
                    {move || {
                        (clearable && selected.with(Option::is_some)).then(|| {
                            view! {
                                <div
                                    class="Select__clear-indicator"
                                    aria-label="Clear"
                                    on:mousedown=on_clear
                                >
                                    <Icon icon=IconKind::Close size=16 total_size=TotalSize::Unset />
                                </div>
                            }
                        })
                    }}
                    <div
                        class="Select__dropdown-indicator"
                        style=DROPDOWN_INDICATOR_STYLE
                        aria-hidden="true"
                    >
                        <Icon icon=IconKind::ChevronRight size=16 total_size=TotalSize::Unset />
                    </div>
                </div>
            </div>
            {name.map(|name| {
                view! {
                    <input
                        type="hidden"
                        name=name
                        prop:value=move || selected.with(|option| {
                            option.as_ref().map(|option| option.value.clone()).unwrap_or_default()
                        })
                    />
                }
            })}
            {menu_view}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn option_class_marks_each_state() {
        assert_eq!(option_class(false, false, false), "Select__option");
        assert_eq!(
            option_class(true, true, true),
            "Select__option Select__option--is-focused Select__option--is-selected \
             Select__option--is-disabled"
        );
    }

    #[test]
    fn dropdown_indicator_points_down() {
        assert!(DROPDOWN_INDICATOR_STYLE.contains("rotate(90deg)"));
    }

    #[test]
    fn error_flag_suffixes_root_and_caller_class() {
        assert_eq!(
            resolve_class("Select", Some("picker"), &[("error", true)]),
            "Select picker Select--error picker--error"
        );
    }
}
