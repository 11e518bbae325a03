//! Combobox controller
//!
//! Turns semantic UI events (typing, keys, focus, clicks) into interaction
//! machine transitions and exposes the derived data a rendering layer needs.

mod blur;
mod combobox;
mod ids;
mod input;
mod keyboard;

pub use blur::FocusTarget;
pub use combobox::Combobox;
pub use ids::{make_hash, make_id, ComboboxContext};
pub use keyboard::{ComboOption, Key, KeyOutcome};
