// src/ui/widgets/stats.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Renders one rounded card per inventory statistic, side by side.
pub fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let cards = &app.dashboard.stats;
    if cards.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Color::Blue))
            .title(card.kind.to_string());
        let value = Paragraph::new(Line::from(Span::styled(card.value.to_string(), Style::new().bold())))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(value, *chunk);
    }
}
