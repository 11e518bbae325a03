use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, left-aligned with it.
///
/// Width is capped at the anchor's width and height stops at `max_bottom`.
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16, max_bottom: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(max_bottom.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
