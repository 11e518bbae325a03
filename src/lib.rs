//! Accessible combobox core.
//!
//! [`machine`] holds the interaction state machine, [`highlight`] splits
//! option labels into matched and plain chunks, and [`controller`] turns
//! input, button, option and keyboard events into machine transitions.
//! [`app`] is a terminal demo built on top of them.

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod items;
pub mod machine;
pub mod widgets;

#[cfg(test)]
mod test_utils;
