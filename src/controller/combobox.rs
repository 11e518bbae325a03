use std::fmt;

use crate::config::Config;
use crate::highlight::{option_segments, OptionSegment};
use crate::machine::{EventKind, InteractionMachine, InteractionState, MachineEvent, StateData};

use super::ids::{make_hash, make_id, ComboboxContext};

type SelectCallback = Box<dyn FnMut(&str)>;

/// One combobox widget instance.
///
/// Owns its interaction machine and option flags; nothing here is shared
/// between instances.
pub struct Combobox {
    pub(super) machine: InteractionMachine,
    id: String,
    pub(super) autocomplete: bool,
    pub(super) persist_selection: bool,
    pub(super) open_on_focus: bool,
    pub(super) select_on_click: bool,
    case_sensitive: bool,
    pub(super) popover_mounted: bool,
    /// Value owned by the caller, if the input is controlled
    pub(super) controlled_value: Option<String>,
    pub(super) initial_controlled_value: Option<String>,
    pub(super) controlled_value_changed: bool,
    /// Set by focus, consumed by the next input click
    pub(super) select_on_click_armed: bool,
    focus_requested: bool,
    on_select: Option<SelectCallback>,
}

impl fmt::Debug for Combobox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("id", &self.id)
            .field("state", &self.machine.state())
            .field("data", self.machine.data())
            .field("autocomplete", &self.autocomplete)
            .field("persist_selection", &self.persist_selection)
            .field("open_on_focus", &self.open_on_focus)
            .field("controlled_value", &self.controlled_value)
            .finish_non_exhaustive()
    }
}

impl Combobox {
    /// Creates an uncontrolled combobox with default options
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            machine: InteractionMachine::new(),
            id: id.into(),
            autocomplete: true,
            persist_selection: false,
            open_on_focus: false,
            select_on_click: false,
            case_sensitive: false,
            popover_mounted: true,
            controlled_value: None,
            initial_controlled_value: None,
            controlled_value_changed: false,
            select_on_click_armed: false,
            focus_requested: false,
            on_select: None,
        }
    }

    pub fn from_config(id: impl Into<String>, config: &Config) -> Self {
        let mut combobox = Self::new(id);
        combobox.autocomplete = config.combobox.autocomplete;
        combobox.persist_selection = config.combobox.persist_selection;
        combobox.open_on_focus = config.combobox.open_on_focus;
        combobox.select_on_click = config.combobox.select_on_click;
        combobox.case_sensitive = config.highlight.case_sensitive;
        combobox
    }

    /// Registers the callback invoked with the value of every selection
    pub fn with_on_select(mut self, on_select: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Makes the input controlled, starting from `value`
    pub fn with_controlled_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.initial_controlled_value = Some(value.clone());
        self.controlled_value = Some(value);
        self.sync_controlled_value();
        self
    }

    pub fn set_autocomplete(&mut self, autocomplete: bool) {
        self.autocomplete = autocomplete;
    }

    pub fn set_persist_selection(&mut self, persist_selection: bool) {
        self.persist_selection = persist_selection;
    }

    pub fn set_open_on_focus(&mut self, open_on_focus: bool) {
        self.open_on_focus = open_on_focus;
    }

    pub fn set_select_on_click(&mut self, select_on_click: bool) {
        self.select_on_click = select_on_click;
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    /// Tells the controller whether a popover is currently rendered
    pub fn set_popover_mounted(&mut self, mounted: bool) {
        self.popover_mounted = mounted;
    }

    /// Dispatches `event` to the machine, then runs focus management.
    ///
    /// Focus goes back to the input whenever the last event type changes to
    /// one that moves the caret target (navigate, escape, click-select, open
    /// with button). The request is raised before this returns so the
    /// rendering layer sees it before it paints.
    ///
    /// A controlled input is synced again afterwards, so a selection the
    /// owner did not adopt is replaced by the owner's value.
    pub fn transition(&mut self, event: impl Into<MachineEvent>) {
        self.dispatch(event);
        if self.is_controlled() {
            self.sync_controlled_value();
        }
    }

    /// [`Combobox::transition`] without the controlled value sync
    pub(super) fn dispatch(&mut self, event: impl Into<MachineEvent>) {
        let previous = self.machine.data().last_event_type;
        self.machine.transition(event);

        let current = self.machine.data().last_event_type;
        if current != previous && current.is_some_and(EventKind::returns_focus_to_input) {
            self.focus_requested = true;
        }
    }

    /// Returns and clears the pending request to focus the text input
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    pub(super) fn notify_select(&mut self, value: &str) {
        log::debug!("Combobox {} selected {:?}", self.id, value);
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(value);
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> InteractionState {
        self.machine.state()
    }

    pub fn data(&self) -> &StateData {
        self.machine.data()
    }

    pub fn value(&self) -> &str {
        &self.machine.data().value
    }

    pub fn navigation_value(&self) -> Option<&str> {
        self.machine.data().navigation_value.as_deref()
    }

    pub fn is_expanded(&self) -> bool {
        self.machine.is_expanded()
    }

    pub fn autocomplete(&self) -> bool {
        self.autocomplete
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled_value.is_some()
    }

    /// Text to show in the input.
    ///
    /// With autocomplete on, navigating shows the highlighted option in
    /// place of what was typed.
    pub fn input_value(&self) -> &str {
        let data = self.machine.data();
        let typed = self
            .controlled_value
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(&data.value);

        let navigating = matches!(
            self.state(),
            InteractionState::Navigating | InteractionState::Interacting
        );
        if self.autocomplete && navigating {
            data.navigation_value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(typed)
        } else {
            typed
        }
    }

    /// Whether `value` is the keyboard-highlighted option
    pub fn is_option_active(&self, value: &str) -> bool {
        self.navigation_value() == Some(value)
    }

    /// Segments an option label by what the user typed
    pub fn option_segments(&self, option_value: &str) -> Vec<OptionSegment> {
        option_segments(option_value, self.value(), self.case_sensitive)
    }

    /// Snapshot of the widget for descendants
    pub fn context(&self) -> ComboboxContext {
        ComboboxContext {
            id: self.id.clone(),
            is_expanded: self.is_expanded(),
            navigation_value: self.navigation_value().map(str::to_string),
            state: self.state(),
        }
    }

    pub fn listbox_id(&self) -> String {
        make_id("listbox", &self.id)
    }

    /// Stable id of an option, derived from its value
    pub fn option_id(&self, value: &str) -> String {
        make_hash(value).to_string()
    }

    /// Id of the highlighted option, if any
    pub fn active_descendant(&self) -> Option<String> {
        self.navigation_value()
            .filter(|v| !v.is_empty())
            .map(|v| self.option_id(v))
    }
}

#[cfg(test)]
#[path = "combobox_tests.rs"]
mod combobox_tests;
