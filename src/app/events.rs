use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use super::state::{App, Focus};
use crate::controller::Key;
use crate::machine::InteractionState;

/// Controller key for a terminal key code
pub fn combo_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

fn is_list_key(key: Key) -> bool {
    !matches!(key, Key::Other)
}

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if !self.handle_global_keys(key) {
            match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Button => self.handle_button_key(key),
                Focus::Popover => self.handle_popover_key(key),
                Focus::Outside => self.handle_outside_key(key),
            }
        }

        self.sync_with_controller();
    }

    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab => {
                self.set_focus(self.next_focus());
                true
            }
            KeyCode::BackTab => {
                self.set_focus(self.previous_focus());
                true
            }
            _ => false,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let list_key = combo_key(key.code);
        if is_list_key(list_key) {
            let was_idle = self.combobox.state() == InteractionState::Idle;
            let options = self.visible_options();
            let outcome = self.combobox.key_down(list_key, &options);

            // Escape on a closed list leaves the demo
            if list_key == Key::Escape && was_idle && !outcome.default_prevented {
                self.should_quit = true;
            }
            return;
        }

        // Edits apply to the text on screen, which may be an autocompleted option
        let shown = self.combobox.input_value();
        if shown != self.query() {
            let shown = shown.to_string();
            self.replace_query_with(&shown);
        }

        if self.textarea.input(key) {
            let query = self.query().to_string();
            self.combobox.change_input(&query);
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.combobox.click_button(),
            code => {
                let options = self.visible_options();
                self.combobox.key_down(combo_key(code), &options);
            }
        }
    }

    fn handle_popover_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char(' ') {
            // Space stands in for clicking the highlighted option
            if let Some(value) = self.combobox.navigation_value().map(str::to_string) {
                self.combobox.click_option(&value);
            }
            return;
        }

        let options = self.visible_options();
        self.combobox.key_down(combo_key(key.code), &options);
    }

    fn handle_outside_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.should_quit = true;
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
