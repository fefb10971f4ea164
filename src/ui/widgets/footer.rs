// src/ui/widgets/footer.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::new().bold().fg(Color::Yellow));

    let spans = if !app.scan.is_open() {
        Line::from(vec![
            Span::raw("Press "),
            key("S"),
            Span::raw(" to scan a medicine, "),
            key("Q"),
            Span::raw(" to quit."),
        ])
    } else if app.scan.is_loading() {
        Line::from(vec![Span::raw("Scanning... Press "), key("Esc"), Span::raw(" to close.")])
    } else {
        Line::from(vec![
            key("Tab"),
            Span::raw(" select file, "),
            key("Enter"),
            Span::raw(" upload, "),
            key("Esc"),
            Span::raw(" close"),
        ])
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
