//! Terminal demo of the combobox controller

mod events;
mod render;
mod state;

pub use state::{App, Focus, MAX_VISIBLE_OPTIONS};
