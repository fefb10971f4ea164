// src/ui/widgets/header.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const ACCENT: Color = Color::Rgb(0x20, 0x27, 0xC5);

pub fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(22)])
        .split(inner);

    let title = Line::from(vec![
        Span::raw("Welcome to your ").bold(),
        Span::styled("Dashboard", Style::new().fg(ACCENT).bold()),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let action = Line::from(vec![
        Span::styled("[S]", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" Scan medicine"),
    ]);
    frame.render_widget(Paragraph::new(action).alignment(Alignment::Right), chunks[1]);
}
