use std::cell::RefCell;
use std::rc::Rc;

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::config::Config;
use crate::controller::{ComboOption, Combobox, FocusTarget};
use crate::filter::OptionFilter;
use crate::machine::EventKind;

/// Most options the popover lists at once
pub const MAX_VISIBLE_OPTIONS: usize = 8;

/// Which element has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button,
    Popover,
    /// Nothing inside the widget
    Outside,
}

impl Focus {
    pub fn target(self) -> FocusTarget {
        match self {
            Focus::Input => FocusTarget::Input,
            Focus::Button => FocusTarget::Button,
            Focus::Popover => FocusTarget::Popover,
            Focus::Outside => FocusTarget::Outside,
        }
    }
}

/// Application state
pub struct App {
    pub combobox: Combobox,
    /// Edit buffer for what the user types
    pub textarea: TextArea<'static>,
    pub items: Vec<String>,
    pub filter: OptionFilter,
    pub focus: Focus,
    /// Last value reported through the selection callback
    pub selected: Rc<RefCell<Option<String>>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(items: Vec<String>, config: &Config) -> Self {
        let mut textarea = TextArea::default();
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        let selected = Rc::new(RefCell::new(None));
        let on_select = Rc::clone(&selected);
        let combobox = Combobox::from_config("cities", config).with_on_select(move |value| {
            log::debug!("Selected {value:?}");
            *on_select.borrow_mut() = Some(value.to_string());
        });

        let mut app = Self {
            combobox,
            textarea,
            items,
            filter: OptionFilter::new(),
            focus: Focus::Outside,
            selected,
            should_quit: false,
        };
        app.set_focus(Focus::Input);
        app
    }

    /// Text in the edit buffer
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Options matching the typed value, best first
    pub fn visible_options(&self) -> Vec<ComboOption> {
        self.filter
            .filter(self.combobox.value(), &self.items)
            .into_iter()
            .take(MAX_VISIBLE_OPTIONS)
            .map(|idx| ComboOption::new(self.items[idx].clone()))
            .collect()
    }

    /// Whether the popover list is drawn
    pub fn popover_visible(&self) -> bool {
        self.combobox.is_expanded() && !self.visible_options().is_empty()
    }

    pub fn selected(&self) -> Option<String> {
        self.selected.borrow().clone()
    }

    /// Moves focus, blurring the element that had it
    pub fn set_focus(&mut self, next: Focus) {
        if next == self.focus {
            return;
        }

        if matches!(self.focus, Focus::Input | Focus::Popover) {
            self.combobox.blur(next.target());
        }
        self.focus = next;

        if next == Focus::Input {
            self.combobox.focus_input();
        }
    }

    /// Next element in tab order; the popover only takes part while open
    pub fn next_focus(&self) -> Focus {
        match self.focus {
            Focus::Input => Focus::Button,
            Focus::Button if self.popover_visible() => Focus::Popover,
            Focus::Button | Focus::Popover => Focus::Outside,
            Focus::Outside => Focus::Input,
        }
    }

    pub fn previous_focus(&self) -> Focus {
        match self.focus {
            Focus::Input => Focus::Outside,
            Focus::Button => Focus::Input,
            Focus::Popover => Focus::Button,
            Focus::Outside if self.popover_visible() => Focus::Popover,
            Focus::Outside => Focus::Button,
        }
    }

    /// Brings the edit buffer and focus in line with the controller after
    /// an event
    pub fn sync_with_controller(&mut self) {
        let selected = matches!(
            self.combobox.data().last_event_type,
            Some(EventKind::SelectWithKeyboard | EventKind::SelectWithClick)
        );
        if selected && self.query() != self.combobox.value() {
            let value = self.combobox.value().to_string();
            self.replace_query_with(&value);
        }

        if self.combobox.take_focus_request() {
            self.set_focus(Focus::Input);
        }

        if self.focus == Focus::Popover && !self.popover_visible() {
            self.focus = Focus::Input;
        }
    }

    pub fn replace_query_with(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
