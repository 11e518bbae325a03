//! Keyboard navigation through the option list

use crate::machine::{EventKind, InteractionState, MachineEvent};

use super::combobox::Combobox;

/// A rendered option, as seen by keyboard navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    pub value: String,
}

impl ComboOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl From<&str> for ComboOption {
    fn from(value: &str) -> Self {
        ComboOption::new(value)
    }
}

/// Keys the combobox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
    Enter,
    Other,
}

/// What the caller should do with the original key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Suppress the platform default (scrolling, form submission)
    pub default_prevented: bool,
}

impl KeyOutcome {
    fn prevented() -> Self {
        Self {
            default_prevented: true,
        }
    }
}

impl Combobox {
    /// Handles a key press against the options currently rendered.
    pub fn key_down(&mut self, key: Key, options: &[ComboOption]) -> KeyOutcome {
        match key {
            Key::ArrowDown | Key::ArrowUp | Key::Home | Key::PageUp | Key::End | Key::PageDown => {
                // Navigation keys never scroll, even with nothing to navigate
                if !options.is_empty() {
                    let event = self.navigation_event(key, options);
                    self.transition(event);
                }
                KeyOutcome::prevented()
            }
            Key::Escape => {
                if self.state() != InteractionState::Idle {
                    self.transition(EventKind::Escape);
                }
                KeyOutcome::default()
            }
            Key::Enter => self.select_with_keyboard(),
            Key::Other => KeyOutcome::default(),
        }
    }

    fn navigation_event(&self, key: Key, options: &[ComboOption]) -> MachineEvent {
        if self.state() == InteractionState::Idle {
            // Opening a closed list
            let event = MachineEvent::new(EventKind::Navigate);
            return if key == Key::ArrowDown {
                event.with_persist_selection(self.persist_selection)
            } else {
                event
            };
        }

        let index = self
            .navigation_value()
            .and_then(|nav| options.iter().position(|o| o.value == nav));

        let target = match key {
            Key::ArrowDown => next_option(options, index, self.autocomplete),
            Key::ArrowUp => previous_option(options, index, self.autocomplete),
            Key::Home | Key::PageUp => options.first(),
            _ => options.last(),
        };

        MachineEvent::new(EventKind::Navigate).with_optional_value(target.map(|o| o.value.clone()))
    }

    fn select_with_keyboard(&mut self) -> KeyOutcome {
        if self.state() != InteractionState::Navigating {
            return KeyOutcome::default();
        }
        let Some(value) = self.navigation_value().map(str::to_string) else {
            return KeyOutcome::default();
        };

        self.notify_select(&value);
        self.transition(EventKind::SelectWithKeyboard);
        KeyOutcome::prevented()
    }
}

/// Option after `index`.
///
/// Past the end this goes back to the typed value (`None`) when
/// autocompleting, otherwise wraps to the first option.
fn next_option(
    options: &[ComboOption],
    index: Option<usize>,
    autocomplete: bool,
) -> Option<&ComboOption> {
    let at_bottom = index == Some(options.len() - 1);
    if at_bottom {
        return if autocomplete { None } else { options.first() };
    }
    options.get(index.map_or(0, |i| i + 1))
}

/// Option before `index`.
///
/// From the first option this goes back to the typed value when
/// autocompleting, otherwise wraps to the last. With nothing highlighted it
/// always goes to the last option.
fn previous_option(
    options: &[ComboOption],
    index: Option<usize>,
    autocomplete: bool,
) -> Option<&ComboOption> {
    match index {
        Some(0) if autocomplete => None,
        Some(0) | None => options.last(),
        Some(i) => options.get(i - 1),
    }
}

#[cfg(test)]
#[path = "keyboard_tests.rs"]
mod keyboard_tests;
