//! Click/keyboard gating for elements whose interactivity depends on an optional callback.

/// Key that activates the click path from the keyboard.
pub const ACTIVATION_KEY: &str = "Enter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether an element is clickable, derived from callback presence and the disabled flag.
pub enum ClickCapability {
    /// No click callback registered; the element is presentational.
    None,
    /// Callback registered and accepting activations.
    Enabled,
    /// Callback registered but suppressed.
    Disabled,
}

impl ClickCapability {
    /// Derives the capability from raw component props.
    pub const fn from_props(has_callback: bool, disabled: bool) -> Self {
        match (has_callback, disabled) {
            (false, _) => Self::None,
            (true, false) => Self::Enabled,
            (true, true) => Self::Disabled,
        }
    }

    /// Whether a callback is registered, regardless of disabled state.
    pub const fn has_callback(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Accessibility role for gated elements.
pub enum AriaRole {
    /// Interactive element.
    Button,
    /// Presentational image.
    Img,
}

impl AriaRole {
    /// Value for the `role` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Img => "img",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Decides which interactions reach the caller's callbacks.
pub struct InteractionGate {
    capability: ClickCapability,
    unfocusable: bool,
}

impl InteractionGate {
    /// Builds a gate from the current props.
    pub const fn new(has_callback: bool, disabled: bool, unfocusable: bool) -> Self {
        Self {
            capability: ClickCapability::from_props(has_callback, disabled),
            unfocusable,
        }
    }

    /// Current click capability.
    pub const fn capability(self) -> ClickCapability {
        self.capability
    }

    /// `Some(0)` when the element belongs in the tab order, `None` to omit `tabindex`.
    pub const fn tab_index(self) -> Option<i32> {
        match self.capability {
            ClickCapability::Enabled if !self.unfocusable => Some(0),
            _ => None,
        }
    }

    /// Role implied by callback presence.
    pub const fn role(self) -> AriaRole {
        if self.capability.has_callback() {
            AriaRole::Button
        } else {
            AriaRole::Img
        }
    }

    /// Forwards a click to `forward` when the gate is enabled. Returns whether it was forwarded.
    pub fn click<E>(self, event: E, forward: impl FnOnce(E)) -> bool {
        if self.capability != ClickCapability::Enabled {
            return false;
        }
        forward(event);
        true
    }

    /// Handles a key-down.
    ///
    /// The raw event always reaches `on_key_down`. When `key` is
    /// [`ACTIVATION_KEY`] and the gate is enabled, `on_activate` runs afterwards,
    /// giving click-only elements keyboard activation. Returns whether activation ran.
    pub fn key_down<E>(
        self,
        key: &str,
        event: E,
        on_key_down: impl FnOnce(E),
        on_activate: impl FnOnce(),
    ) -> bool {
        on_key_down(event);
        if key == ACTIVATION_KEY && self.capability == ClickCapability::Enabled {
            on_activate();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn capability_is_tri_state() {
        assert_eq!(ClickCapability::from_props(false, false), ClickCapability::None);
        assert_eq!(ClickCapability::from_props(false, true), ClickCapability::None);
        assert_eq!(ClickCapability::from_props(true, false), ClickCapability::Enabled);
        assert_eq!(ClickCapability::from_props(true, true), ClickCapability::Disabled);
    }

    #[test]
    fn tab_order_requires_callback_enabled_and_focusable() {
        for has_callback in [false, true] {
            for disabled in [false, true] {
                for unfocusable in [false, true] {
                    let gate = InteractionGate::new(has_callback, disabled, unfocusable);
                    let expected = (has_callback && !disabled && !unfocusable).then_some(0);
                    assert_eq!(
                        gate.tab_index(),
                        expected,
                        "callback={has_callback} disabled={disabled} unfocusable={unfocusable}"
                    );
                }
            }
        }
    }

    #[test]
    fn role_follows_callback_presence_only() {
        assert_eq!(InteractionGate::new(true, true, true).role(), AriaRole::Button);
        assert_eq!(InteractionGate::new(false, false, false).role(), AriaRole::Img);
        assert_eq!(AriaRole::Img.token(), "img");
    }

    #[test]
    fn disabled_gate_never_forwards_click_or_enter() {
        let calls = RefCell::new(Vec::new());
        let gate = InteractionGate::new(true, true, false);

        assert!(!gate.click("click", |ev| calls.borrow_mut().push(ev)));
        let activated = gate.key_down(
            "Enter",
            "key",
            |_| {},
            || calls.borrow_mut().push("activate"),
        );

        assert!(!activated);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn enabled_gate_forwards_click_event() {
        let calls = RefCell::new(Vec::new());
        let gate = InteractionGate::new(true, false, true);

        assert!(gate.click(7, |ev| calls.borrow_mut().push(ev)));
        assert_eq!(*calls.borrow(), vec![7]);
    }

    #[test]
    fn enter_runs_key_handler_then_click_exactly_once() {
        let calls = RefCell::new(Vec::new());
        let gate = InteractionGate::new(true, false, false);

        gate.key_down(
            "Enter",
            (),
            |_| calls.borrow_mut().push("key"),
            || calls.borrow_mut().push("click"),
        );

        assert_eq!(*calls.borrow(), vec!["key", "click"]);
    }

    #[test]
    fn key_handler_sees_every_key_even_when_disabled() {
        let calls = RefCell::new(Vec::new());
        let gate = InteractionGate::new(true, true, false);

        gate.key_down("Up", "Up", |key| calls.borrow_mut().push(key), || {});
        gate.key_down("Enter", "Enter", |key| calls.borrow_mut().push(key), || {});

        assert_eq!(*calls.borrow(), vec!["Up", "Enter"]);
    }

    #[test]
    fn non_enter_keys_do_not_activate() {
        let gate = InteractionGate::new(true, false, false);
        assert!(!gate.key_down(" ", (), |_| {}, || panic!("activated")));
    }
}
