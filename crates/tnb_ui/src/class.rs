//! Class-name composition shared by every component.
//!
//! Each component owns a base class (`Icon`, `Button`, ...) and may receive a
//! caller class. State flags add BEM-style `--modifier` variants of both.

/// Builds the final `class` attribute for a component root.
///
/// The result always starts with `base`, followed by `caller_class` when it is
/// present and non-blank. Every flag whose value is `true` then appends
/// `{base}--{flag}` and, with a caller class, `{caller}--{flag}`, in the order
/// the flags are given.
pub fn resolve_class(base: &str, caller_class: Option<&str>, flags: &[(&str, bool)]) -> String {
    let caller = caller_class.map(str::trim).filter(|caller| !caller.is_empty());

    let mut classes = vec![base.to_string()];
    if let Some(caller) = caller {
        classes.push(caller.to_string());
    }
    for (flag, _) in flags.iter().filter(|(_, on)| *on) {
        classes.push(modifier(base, flag));
        if let Some(caller) = caller {
            classes.push(modifier(caller, flag));
        }
    }
    classes.join(" ")
}

fn modifier(block: &str, flag: &str) -> String {
    format!("{block}--{flag}")
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
