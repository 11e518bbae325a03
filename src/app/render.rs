use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{App, Focus};
use crate::widgets::popup;

const BUTTON_WIDTH: u16 = 5;
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const ACTIVE_MARKER: &str = "► ";
const INACTIVE_MARKER: &str = "  ";

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input row
            Constraint::Min(0),    // Room for the popover
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        let row = Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .split(layout[1]);
        let input_area = row[0];

        self.render_title(frame, layout[0]);
        self.render_input(frame, input_area);
        self.render_button(frame, row[1]);
        self.render_status(frame, layout[3]);

        // Drawn last so it sits on top of everything below the input
        let max_bottom = layout[3].y;
        self.render_popover(frame, input_area, max_bottom);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled("Choose a city", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  ({})", self.combobox.listbox_id()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(title, area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Input;
        let shown = self.combobox.input_value();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" City ")
            .border_style(border_style(focused));
        frame.render_widget(Paragraph::new(shown).block(block), area);

        if focused {
            let column = self.cursor_column(shown);
            let x = area.x + 1 + column.min(area.width.saturating_sub(3));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }

    /// Display column of the cursor within the shown input text
    fn cursor_column(&self, shown: &str) -> u16 {
        if shown != self.query() {
            // Autocompleted text; the cursor sits at its end
            return shown.width() as u16;
        }
        let (_, col) = self.textarea.cursor();
        let prefix: String = shown.chars().take(col).collect();
        prefix.width() as u16
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let arrow = if self.combobox.is_expanded() { "▲" } else { "▼" };
        let button = Paragraph::new(arrow).centered().block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(self.focus == Focus::Button)),
        );
        frame.render_widget(button, area);
    }

    fn render_popover(&self, frame: &mut Frame, input_area: Rect, max_bottom: u16) {
        if !self.combobox.is_expanded() {
            return;
        }
        let options = self.visible_options();
        if options.is_empty() {
            return;
        }

        let text_width = options
            .iter()
            .map(|o| o.value.width() + ACTIVE_MARKER.width())
            .max()
            .unwrap_or(0)
            .min(MAX_POPUP_WIDTH);
        let popup_width = text_width as u16 + POPUP_PADDING;
        let popup_height = options.len() as u16 + POPUP_BORDER_HEIGHT;

        let area = popup::popup_below_anchor(input_area, popup_width, popup_height, max_bottom);
        if area.height <= POPUP_BORDER_HEIGHT {
            return;
        }

        let items: Vec<ListItem> = options
            .iter()
            .map(|option| {
                let active = self.combobox.is_option_active(&option.value);
                ListItem::new(self.option_line(&option.value, active))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(self.focus == Focus::Popover)),
        );

        popup::clear_area(frame, area);
        frame.render_widget(list, area);
    }

    /// One option, the typed part plain and the suggested rest bold
    fn option_line(&self, value: &str, active: bool) -> Line<'static> {
        let base = if active {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        let marker = if active { ACTIVE_MARKER } else { INACTIVE_MARKER };

        let mut spans = vec![Span::styled(marker, base)];
        spans.extend(
            self.combobox
                .option_segments(value)
                .into_iter()
                .map(|segment| {
                    let style = if segment.user_value {
                        base
                    } else {
                        base.add_modifier(Modifier::BOLD)
                    };
                    Span::styled(segment.text, style)
                }),
        );
        Line::from(spans)
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let selected = self.selected().unwrap_or_else(|| "-".to_string());
        let status = Line::from(vec![
            Span::styled(
                format!(" {} ", self.combobox.state()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(format!(" selected: {selected}")),
            Span::styled(
                "  Tab focus  Esc close/quit  Ctrl+C quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
