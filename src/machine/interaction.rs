use super::reducer::{reduce, MachineEvent, StateData};
use super::state::InteractionState;

/// The interaction state machine and its data, owned by one widget instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionMachine {
    state: InteractionState,
    data: StateData,
}

impl InteractionMachine {
    /// Creates a machine in `Idle` with empty data
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine in `Idle` with the given data
    pub fn with_data(data: StateData) -> Self {
        Self {
            state: InteractionState::Idle,
            data,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn data(&self) -> &StateData {
        &self.data
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Whether `event` would be accepted in the current state
    pub fn accepts(&self, event: &MachineEvent) -> bool {
        self.state.on(event.kind).is_some()
    }

    /// Dispatches `event`.
    ///
    /// Events the current state does not accept are dropped without touching
    /// state or data. Accepted events replace both in one step.
    pub fn transition(&mut self, event: impl Into<MachineEvent>) {
        let event = event.into();

        let Some(next_state) = self.state.on(event.kind) else {
            log::debug!("Ignoring {} while {}", event.kind, self.state);
            return;
        };

        let next_data = reduce(&self.data, &event);
        log::trace!(
            "{} --{}--> {} (value: {:?}, navigation: {:?})",
            self.state,
            event.kind,
            next_state,
            next_data.value,
            next_data.navigation_value
        );

        self.state = next_state;
        self.data = next_data;
    }
}

#[cfg(test)]
#[path = "interaction_tests.rs"]
mod interaction_tests;
