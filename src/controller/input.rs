//! Input, button and option handlers

use crate::machine::{EventKind, InteractionState, MachineEvent};

use super::combobox::Combobox;

impl Combobox {
    /// The user edited the input text.
    ///
    /// Ignored while controlled; the owner reports the new value through
    /// [`Combobox::set_controlled_value`] instead.
    pub fn change_input(&mut self, value: &str) {
        if self.is_controlled() {
            return;
        }
        self.handle_value_change(value);
    }

    /// Updates the caller-owned input value. `None` releases control.
    pub fn set_controlled_value(&mut self, value: Option<String>) {
        if value != self.controlled_value {
            self.controlled_value_changed = true;
        }
        self.controlled_value = value;
        self.sync_controlled_value();
    }

    pub(super) fn sync_controlled_value(&mut self) {
        let Some(controlled) = self.controlled_value.clone() else {
            return;
        };

        let value = &self.machine.data().value;
        if controlled == *value {
            return;
        }
        // A blank controlled value only matters if it clears real text
        if controlled.trim().is_empty() && value.trim().is_empty() {
            return;
        }

        self.handle_value_change(&controlled);
    }

    fn handle_value_change(&mut self, value: &str) {
        if value.trim().is_empty() {
            self.dispatch(EventKind::Clear);
        } else if !self.controlled_value_changed
            && self.initial_controlled_value.as_deref() == Some(value)
        {
            self.dispatch(MachineEvent::new(EventKind::InitialChange).with_value(value));
        } else {
            self.dispatch(MachineEvent::new(EventKind::Change).with_value(value));
        }
    }

    /// The input gained focus
    pub fn focus_input(&mut self) {
        if self.select_on_click {
            self.select_on_click_armed = true;
        }

        // Selecting with a click focuses the input again; don't reopen then
        if self.open_on_focus && self.data().last_event_type != Some(EventKind::SelectWithClick)
        {
            self.transition(
                MachineEvent::new(EventKind::Focus).with_persist_selection(self.persist_selection),
            );
        }
    }

    /// The input was clicked.
    ///
    /// Returns true when the caller should select all of the input text.
    pub fn click_input(&mut self) -> bool {
        let select_text = std::mem::take(&mut self.select_on_click_armed);

        if self.open_on_focus && self.state() == InteractionState::Idle {
            self.transition(EventKind::OpenWithInputClick);
        }

        select_text
    }

    /// The toggle button was clicked
    pub fn click_button(&mut self) {
        if self.state() == InteractionState::Idle {
            self.transition(EventKind::OpenWithButton);
        } else {
            self.transition(EventKind::CloseWithButton);
        }
    }

    /// An option was clicked
    pub fn click_option(&mut self, value: &str) {
        self.notify_select(value);
        self.transition(MachineEvent::new(EventKind::SelectWithClick).with_value(value));
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
