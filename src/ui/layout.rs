// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the dashboard screen.
pub struct AppLayout {
    pub header: Rect,
    pub stats: Rect,
    pub activity: Rect,
    pub footer: Rect,
}

/// Splits the frame into the header, the row of statistic cards, the
/// activity feed and a one-line footer.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        header: main_chunks[0],
        stats: main_chunks[1],
        activity: main_chunks[2],
        footer: main_chunks[3],
    }
}

/// Creates a rectangle centered within `r`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
