//! Interaction machine
//!
//! A finite-state machine over the combobox's interaction modes, paired with
//! a pure reducer for the data (typed value, highlighted candidate) that goes
//! with each transition.

mod interaction;
mod reducer;
mod state;

pub use interaction::InteractionMachine;
pub use reducer::{reduce, MachineEvent, StateData};
pub use state::{EventKind, InteractionState};
