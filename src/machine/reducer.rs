use super::state::EventKind;

/// Data carried alongside the interaction state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateData {
    /// What the user typed or last selected
    pub value: String,
    /// The option currently highlighted with the keyboard
    pub navigation_value: Option<String>,
    /// Kind of the last accepted event; `None` before the first transition
    pub last_event_type: Option<EventKind>,
}

impl StateData {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

/// An event plus its optional payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineEvent {
    pub kind: EventKind,
    pub value: Option<String>,
    /// When opening without an explicit value, highlight the current value
    pub persist_selection: bool,
}

impl MachineEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            value: None,
            persist_selection: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the value only when there is one
    pub fn with_optional_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn with_persist_selection(mut self, persist_selection: bool) -> Self {
        self.persist_selection = persist_selection;
        self
    }
}

impl From<EventKind> for MachineEvent {
    fn from(kind: EventKind) -> Self {
        MachineEvent::new(kind)
    }
}

/// Computes the data that follows `event`. `data` is left untouched.
pub fn reduce(data: &StateData, event: &MachineEvent) -> StateData {
    let mut next = StateData {
        last_event_type: Some(event.kind),
        ..data.clone()
    };

    match event.kind {
        EventKind::Change | EventKind::InitialChange | EventKind::SelectWithClick => {
            next.value = event.value.clone().unwrap_or_default();
            next.navigation_value = None;
        }
        EventKind::Navigate
        | EventKind::OpenWithButton
        | EventKind::OpenWithInputClick
        | EventKind::Focus => {
            next.navigation_value = find_navigation_value(data, event);
        }
        EventKind::Clear => {
            next.value.clear();
            next.navigation_value = None;
        }
        EventKind::Blur | EventKind::Escape | EventKind::CloseWithButton => {
            next.navigation_value = None;
        }
        EventKind::SelectWithKeyboard => {
            next.value = data.navigation_value.clone().unwrap_or_default();
            next.navigation_value = None;
        }
        EventKind::Interact => {}
    }

    next
}

/// When the list opens, highlight the explicit value if any, otherwise the
/// current value if selections persist.
fn find_navigation_value(data: &StateData, event: &MachineEvent) -> Option<String> {
    match event.value.as_deref() {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ if event.persist_selection => Some(data.value.clone()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod reducer_tests;
