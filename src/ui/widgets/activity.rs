// src/ui/widgets/activity.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

pub fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(Line::from(vec![
        Span::raw(" Recent "),
        Span::styled("Activity ", Style::new().fg(Color::Blue).bold()),
    ]));

    let items: Vec<ListItem> = app
        .dashboard
        .activity
        .iter()
        .map(|entry| {
            ListItem::new(Text::from(vec![
                Line::from(entry.medicine.as_str().bold()),
                Line::from(Span::styled(entry.to_string(), Style::new().fg(Color::DarkGray))),
                Line::from(""),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
