//! Dropdown menu model: filtering, highlight movement and change emission.
//!
//! Everything here is plain data so the keyboard and filtering rules can be
//! exercised without a DOM.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One choice offered by a select.
pub struct SelectOption {
    /// Text shown for the option. Falls back to `value` when absent or empty.
    #[serde(default)]
    pub label: Option<String>,
    /// Submitted value.
    pub value: String,
    /// Shown but not choosable.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Option whose label is its value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
            disabled: false,
        }
    }

    /// Option with a distinct label.
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
            disabled: false,
        }
    }

    /// Marks the option as not choosable.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Label when present and non-empty, otherwise the value.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.value,
        }
    }
}

/// Case-insensitive substring match over label and value. An empty query matches everything.
pub fn default_filter(option: &SelectOption, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    option.display_label().to_lowercase().contains(&query)
        || option.value.to_lowercase().contains(&query)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A row in the open menu.
pub enum MenuEntry {
    /// Existing option.
    Option(SelectOption),
    /// Offer to create an option from the typed query.
    Create(String),
}

impl MenuEntry {
    /// Whether the row can be chosen.
    pub fn is_selectable(&self) -> bool {
        match self {
            Self::Option(option) => !option.disabled,
            Self::Create(_) => true,
        }
    }
}

/// Rows for the menu given the current query.
///
/// With `creatable`, a non-blank query that equals no option's label or value
/// (ignoring case) appends a [`MenuEntry::Create`] row.
pub fn menu_entries(
    options: &[SelectOption],
    query: &str,
    creatable: bool,
    filter: impl Fn(&SelectOption, &str) -> bool,
) -> Vec<MenuEntry> {
    let mut entries: Vec<_> = options
        .iter()
        .filter(|option| filter(option, query))
        .cloned()
        .map(MenuEntry::Option)
        .collect();

    let query = query.trim();
    if creatable && !query.is_empty() {
        let needle = query.to_lowercase();
        let exists = options.iter().any(|option| {
            option.display_label().to_lowercase() == needle || option.value.to_lowercase() == needle
        });
        if !exists {
            entries.push(MenuEntry::Create(query.to_string()));
        }
    }
    entries
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys the menu reacts to.
pub enum MenuKey {
    /// `ArrowDown`.
    Down,
    /// `ArrowUp`.
    Up,
    /// `Enter`.
    Enter,
    /// `Escape`.
    Escape,
    /// `Backspace`.
    Backspace,
    /// Anything else.
    Other,
}

impl MenuKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Self::Down,
            "ArrowUp" | "Up" => Self::Up,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Backspace" => Self::Backspace,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// What caused a [`SelectChange`].
pub enum SelectAction {
    /// An existing option was chosen.
    Select,
    /// The value was cleared.
    Clear,
    /// A new option was created from the query.
    Create,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload of a select's `on_change`.
pub struct SelectChange {
    /// New value, `None` when cleared.
    pub value: Option<SelectOption>,
    /// Cause of the change.
    pub action: SelectAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a menu interaction.
pub enum MenuCommand {
    /// Nothing to report.
    None,
    /// A row was chosen.
    Choose(MenuEntry),
    /// The value should be cleared.
    Clear,
}

impl MenuCommand {
    /// Converts the command into the change reported to the caller, if any.
    pub fn into_change(self) -> Option<SelectChange> {
        match self {
            Self::None => None,
            Self::Choose(MenuEntry::Option(option)) => Some(SelectChange {
                value: Some(option),
                action: SelectAction::Select,
            }),
            Self::Choose(MenuEntry::Create(query)) => Some(SelectChange {
                value: Some(SelectOption::labeled(query.clone(), query)),
                action: SelectAction::Create,
            }),
            Self::Clear => Some(SelectChange {
                value: None,
                action: SelectAction::Clear,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Who owns the value a select displays.
pub enum ValueSource {
    /// The caller passes `value` and decides what is shown.
    Controlled,
    /// The select keeps its own value.
    Uncontrolled,
}

impl ValueSource {
    /// Controlled iff the caller supplied a `value`.
    pub fn from_prop(has_value: bool) -> Self {
        if has_value {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }

    /// Applies `change` to the locally shown value. A controlled select keeps
    /// showing `shown` until its owner passes the new value back.
    pub fn apply(self, shown: &mut Option<SelectOption>, change: &SelectChange) {
        if self == Self::Uncontrolled {
            *shown = change.value.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Open/closed state, highlighted row and typed query.
pub struct MenuState {
    /// Whether the menu is showing.
    pub open: bool,
    /// Index into the current entries.
    pub highlighted: Option<usize>,
    /// Search text.
    pub query: String,
}

impl MenuState {
    /// Opens the menu with the first choosable row highlighted.
    pub fn open(&mut self, entries: &[MenuEntry]) {
        self.open = true;
        self.highlighted = first_selectable(entries);
    }

    /// Closes the menu and drops the query.
    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
        self.query.clear();
    }

    /// Mouse-down on the control. `on_input` is set when the press landed on
    /// the search input, which never closes an open menu.
    pub fn press_control(&mut self, on_input: bool, entries: &[MenuEntry]) {
        match (self.open, on_input) {
            (true, true) => {}
            (true, false) => self.close(),
            (false, _) => self.open(entries),
        }
    }

    /// Replaces the query; `entries` are the rows for the new query.
    pub fn set_query(&mut self, query: String, entries: &[MenuEntry]) {
        self.query = query;
        self.open(entries);
    }

    /// Chooses `entry` if it is choosable, closing the menu.
    pub fn choose(&mut self, entry: &MenuEntry) -> MenuCommand {
        if !entry.is_selectable() {
            return MenuCommand::None;
        }
        self.close();
        MenuCommand::Choose(entry.clone())
    }

    /// Applies a key press against the current `entries`.
    pub fn handle_key(&mut self, key: MenuKey, entries: &[MenuEntry]) -> MenuCommand {
        match key {
            MenuKey::Down if !self.open => {
                self.open(entries);
                MenuCommand::None
            }
            MenuKey::Up if !self.open => {
                self.open = true;
                self.highlighted = step(entries, None, Direction::Backward);
                MenuCommand::None
            }
            MenuKey::Down => {
                self.highlighted = step(entries, self.highlighted, Direction::Forward);
                MenuCommand::None
            }
            MenuKey::Up => {
                self.highlighted = step(entries, self.highlighted, Direction::Backward);
                MenuCommand::None
            }
            MenuKey::Enter if self.open => match self.highlighted.and_then(|i| entries.get(i)) {
                Some(entry) => self.choose(entry),
                None => MenuCommand::None,
            },
            MenuKey::Escape => {
                self.close();
                MenuCommand::None
            }
            MenuKey::Backspace if self.query.is_empty() => MenuCommand::Clear,
            _ => MenuCommand::None,
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn first_selectable(entries: &[MenuEntry]) -> Option<usize> {
    entries.iter().position(MenuEntry::is_selectable)
}

/// Next choosable index from `from`, wrapping around.
fn step(entries: &[MenuEntry], from: Option<usize>, direction: Direction) -> Option<usize> {
    let len = entries.len();
    if len == 0 {
        return None;
    }
    let start = match (from, direction) {
        (Some(index), _) => index,
        (None, Direction::Forward) => len - 1,
        (None, Direction::Backward) => 0,
    };
    (1..=len)
        .map(|offset| match direction {
            Direction::Forward => (start + offset) % len,
            Direction::Backward => (start + len - offset % len) % len,
        })
        .find(|&index| entries[index].is_selectable())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::labeled("Apple", "apple"),
            SelectOption::labeled("Banana", "banana").with_disabled(true),
            SelectOption::new("cherry"),
        ]
    }

    fn entries(query: &str, creatable: bool) -> Vec<MenuEntry> {
        menu_entries(&fruit(), query, creatable, default_filter)
    }

    #[test]
    fn display_label_falls_back_to_value() {
        assert_eq!(SelectOption::new("cherry").display_label(), "cherry");
        assert_eq!(SelectOption::labeled("", "empty").display_label(), "empty");
        assert_eq!(SelectOption::labeled("Apple", "apple").display_label(), "Apple");
    }

    #[test]
    fn default_filter_is_case_insensitive_over_label_and_value() {
        let option = SelectOption::labeled("Apple", "fruit-1");

        assert!(default_filter(&option, "APP"));
        assert!(default_filter(&option, "fruit"));
        assert!(default_filter(&option, ""));
        assert!(!default_filter(&option, "pear"));
    }

    #[test]
    fn create_row_only_for_new_non_blank_queries() {
        assert_eq!(entries("", true).len(), 3);
        assert_eq!(entries("  ", true).len(), 3);
        assert_eq!(entries("apple", true), vec![MenuEntry::Option(fruit()[0].clone())]);
        assert_eq!(entries("Kiwi ", true), vec![MenuEntry::Create("Kiwi".to_string())]);
        assert!(entries("Kiwi", false).is_empty());
    }

    #[test]
    fn opening_highlights_first_selectable() {
        let rows = vec![
            MenuEntry::Option(SelectOption::new("a").with_disabled(true)),
            MenuEntry::Option(SelectOption::new("b")),
        ];
        let mut state = MenuState::default();
        state.open(&rows);

        assert!(state.open);
        assert_eq!(state.highlighted, Some(1));
    }

    #[test]
    fn arrows_skip_disabled_rows_and_wrap() {
        let rows = entries("", false);
        let mut state = MenuState::default();

        state.handle_key(MenuKey::Down, &rows);
        assert_eq!(state.highlighted, Some(0));
        state.handle_key(MenuKey::Down, &rows);
        assert_eq!(state.highlighted, Some(2));
        state.handle_key(MenuKey::Down, &rows);
        assert_eq!(state.highlighted, Some(0));
        state.handle_key(MenuKey::Up, &rows);
        assert_eq!(state.highlighted, Some(2));
    }

    #[test]
    fn up_on_closed_menu_highlights_last_selectable() {
        let rows = entries("", false);
        let mut state = MenuState::default();

        state.handle_key(MenuKey::Up, &rows);

        assert!(state.open);
        assert_eq!(state.highlighted, Some(2));
    }

    #[test]
    fn enter_chooses_highlight_and_closes() {
        let rows = entries("", false);
        let mut state = MenuState::default();
        state.set_query(String::new(), &rows);

        let command = state.handle_key(MenuKey::Enter, &rows);

        assert_eq!(command, MenuCommand::Choose(rows[0].clone()));
        assert!(!state.open);
        assert_eq!(
            command.into_change().map(|change| change.action),
            Some(SelectAction::Select)
        );
    }

    #[test]
    fn disabled_rows_cannot_be_chosen() {
        let rows = entries("", false);
        let mut state = MenuState::default();
        state.open(&rows);

        assert_eq!(state.choose(&rows[1]), MenuCommand::None);
        assert!(state.open);
    }

    #[test]
    fn backspace_on_empty_query_clears() {
        let mut state = MenuState::default();
        assert_eq!(state.handle_key(MenuKey::Backspace, &[]), MenuCommand::Clear);

        state.query = "ap".to_string();
        assert_eq!(state.handle_key(MenuKey::Backspace, &[]), MenuCommand::None);

        assert_eq!(
            MenuCommand::Clear.into_change(),
            Some(SelectChange {
                value: None,
                action: SelectAction::Clear
            })
        );
    }

    #[test]
    fn created_option_uses_query_as_label_and_value() {
        let change = MenuCommand::Choose(MenuEntry::Create("Kiwi".to_string()))
            .into_change()
            .expect("change");

        assert_eq!(change.action, SelectAction::Create);
        assert_eq!(change.value, Some(SelectOption::labeled("Kiwi", "Kiwi")));
    }

    #[test]
    fn escape_closes_and_drops_query() {
        let rows = entries("", false);
        let mut state = MenuState::default();
        state.set_query("ch".to_string(), &rows);

        state.handle_key(MenuKey::Escape, &rows);

        assert_eq!(state, MenuState::default());
    }

    #[test]
    fn pressing_the_search_input_keeps_an_open_menu_and_its_query() {
        let rows = entries("ch", false);
        let mut state = MenuState::default();
        state.set_query("ch".to_string(), &rows);
        let before = state.clone();

        state.press_control(true, &rows);

        assert_eq!(state, before);
    }

    #[test]
    fn pressing_the_control_toggles_the_menu() {
        let rows = entries("", false);
        let mut state = MenuState::default();

        state.press_control(false, &rows);
        assert!(state.open);
        assert_eq!(state.highlighted, Some(0));

        state.press_control(false, &rows);
        assert_eq!(state, MenuState::default());

        state.press_control(true, &rows);
        assert!(state.open);
    }

    #[test]
    fn controlled_value_waits_for_the_owner() {
        let change = SelectChange {
            value: Some(SelectOption::labeled("Apple", "apple")),
            action: SelectAction::Select,
        };

        let mut shown = None;
        ValueSource::from_prop(true).apply(&mut shown, &change);
        assert_eq!(shown, None);

        ValueSource::from_prop(false).apply(&mut shown, &change);
        assert_eq!(shown, change.value);

        let cleared = MenuCommand::Clear.into_change().expect("clear");
        ValueSource::Uncontrolled.apply(&mut shown, &cleared);
        assert_eq!(shown, None);
    }

    #[test]
    fn keys_map_from_dom_names() {
        assert_eq!(MenuKey::from_key("ArrowDown"), MenuKey::Down);
        assert_eq!(MenuKey::from_key("Esc"), MenuKey::Escape);
        assert_eq!(MenuKey::from_key("a"), MenuKey::Other);
    }
}
