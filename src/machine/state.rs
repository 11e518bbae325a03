use std::fmt;

/// Interaction modes of the combobox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// List closed, nothing going on
    #[default]
    Idle,
    /// User is typing and the list shows suggestions
    Suggesting,
    /// User is moving through the list with the keyboard
    Navigating,
    /// Focus moved into the popover (e.g. scrolling, clicking inside it)
    Interacting,
}

impl InteractionState {
    pub const ALL: [InteractionState; 4] = [
        InteractionState::Idle,
        InteractionState::Suggesting,
        InteractionState::Navigating,
        InteractionState::Interacting,
    ];

    /// Looks up the state `event` leads to from here.
    ///
    /// `None` when the event is not accepted in this state.
    pub fn on(self, event: EventKind) -> Option<InteractionState> {
        use EventKind::*;
        use InteractionState::*;

        let next = match (self, event) {
            (Idle, Blur | Clear | InitialChange) => Idle,
            (Idle, Change | Focus | OpenWithButton | OpenWithInputClick) => Suggesting,
            (Idle, Navigate) => Navigating,

            (Suggesting, Change | Focus) => Suggesting,
            (Suggesting, Navigate) => Navigating,
            (Suggesting, Clear | Escape | Blur | SelectWithClick | CloseWithButton) => Idle,
            (Suggesting, Interact) => Interacting,

            (Navigating, Change | Focus) => Suggesting,
            (Navigating, Navigate) => Navigating,
            (
                Navigating,
                Clear | Blur | Escape | SelectWithClick | SelectWithKeyboard | CloseWithButton,
            ) => Idle,
            (Navigating, Interact) => Interacting,

            (Interacting, Change | Focus) => Suggesting,
            (Interacting, Navigate) => Navigating,
            (Interacting, Clear | Blur | Escape | CloseWithButton | SelectWithClick) => Idle,

            _ => return None,
        };

        Some(next)
    }

    /// Whether the popover list is shown in this state
    pub fn is_expanded(self) -> bool {
        !matches!(self, InteractionState::Idle)
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionState::Idle => write!(f, "idle"),
            InteractionState::Suggesting => write!(f, "suggesting"),
            InteractionState::Navigating => write!(f, "navigating"),
            InteractionState::Interacting => write!(f, "interacting"),
        }
    }
}

/// Semantic events the machine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Clear,
    Change,
    /// First value of a controlled input; does not open the list
    InitialChange,
    Navigate,
    SelectWithKeyboard,
    SelectWithClick,
    Escape,
    Blur,
    Interact,
    Focus,
    OpenWithButton,
    OpenWithInputClick,
    CloseWithButton,
}

impl EventKind {
    pub const ALL: [EventKind; 13] = [
        EventKind::Clear,
        EventKind::Change,
        EventKind::InitialChange,
        EventKind::Navigate,
        EventKind::SelectWithKeyboard,
        EventKind::SelectWithClick,
        EventKind::Escape,
        EventKind::Blur,
        EventKind::Interact,
        EventKind::Focus,
        EventKind::OpenWithButton,
        EventKind::OpenWithInputClick,
        EventKind::CloseWithButton,
    ];

    /// Events after which focus goes back to the text input
    pub fn returns_focus_to_input(self) -> bool {
        matches!(
            self,
            EventKind::Navigate
                | EventKind::Escape
                | EventKind::SelectWithClick
                | EventKind::OpenWithButton
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Clear => "clear",
            EventKind::Change => "change",
            EventKind::InitialChange => "initial_change",
            EventKind::Navigate => "navigate",
            EventKind::SelectWithKeyboard => "select_with_keyboard",
            EventKind::SelectWithClick => "select_with_click",
            EventKind::Escape => "escape",
            EventKind::Blur => "blur",
            EventKind::Interact => "interact",
            EventKind::Focus => "focus",
            EventKind::OpenWithButton => "open_with_button",
            EventKind::OpenWithInputClick => "open_with_input_click",
            EventKind::CloseWithButton => "close_with_button",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
