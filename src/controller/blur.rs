//! Blur resolution

use crate::machine::{EventKind, InteractionState};

use super::combobox::Combobox;

/// Where focus went when the input, button or popover lost it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The combobox's own text input
    Input,
    /// The combobox's own toggle button
    Button,
    /// Anything inside the popover region
    Popover,
    /// Outside the widget, or nowhere
    Outside,
}

impl Combobox {
    /// Handles a blur; `related` is the element receiving focus.
    ///
    /// Focus moving into the popover keeps the list open (`Interact`); focus
    /// leaving the widget closes it (`Blur`).
    pub fn blur(&mut self, related: FocusTarget) {
        if !self.popover_mounted {
            return;
        }

        match related {
            FocusTarget::Input | FocusTarget::Button => {}
            FocusTarget::Popover => {
                if self.state() != InteractionState::Interacting {
                    self.transition(EventKind::Interact);
                }
            }
            FocusTarget::Outside => self.transition(EventKind::Blur),
        }
    }
}

#[cfg(test)]
#[path = "blur_tests.rs"]
mod blur_tests;
