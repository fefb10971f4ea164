// src/ui/widgets/scan_popup.rs

use crate::app::{App, SPINNER_CHARS};
use crate::core::models::ScanResult;
use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

pub const UPLOAD_LABEL: &str = "Upload and Scan";

/// Renders the "Scan Medicine" modal on top of the dashboard.
///
/// From top to bottom: the path field, the selected file's name, the error
/// banner, the identification result and the submit control. The banner and
/// the result are mutually exclusive; whichever is shown takes all spare
/// height so long details wrap instead of being cut off.
pub fn render_scan_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    let block = Block::default()
        .title(" Scan Medicine ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(Color::Blue));
    let inner = block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let scan = &app.scan;
    let has_outcome = scan.last_error().is_some() || scan.last_result().is_some();
    let mut constraints = vec![Constraint::Length(3), Constraint::Length(1)];
    constraints.push(if has_outcome { Constraint::Min(4) } else { Constraint::Min(0) });
    constraints.extend([Constraint::Length(3), Constraint::Length(1)]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);
    let mut next = chunks.iter().copied();
    let mut take = || next.next().unwrap_or_default();

    render_path_input(frame, app, take());

    if let Some(file) = scan.selected_file() {
        let selected = Line::from(vec![Span::raw("Selected: "), Span::raw(file.name.as_str()).bold()]);
        frame.render_widget(Paragraph::new(selected), take());
    } else {
        take();
    }

    let outcome_area = take();
    if let Some(message) = scan.last_error() {
        render_error_banner(frame, message, outcome_area);
    } else if let Some(result) = scan.last_result() {
        render_result(frame, result, outcome_area);
    }

    render_submit_button(frame, app, take());

    let endpoint = Line::from(Span::styled(
        format!("Endpoint: {}", app.endpoint),
        Style::new().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(endpoint), take());
}

/// Horizontal offset that keeps the end of the typed text, plus one cell for
/// the cursor, inside a field `width` cells wide.
fn input_scroll(len: usize, width: u16) -> u16 {
    let visible = usize::from(width.saturating_sub(1));
    u16::try_from(len.saturating_sub(visible)).unwrap_or(u16::MAX)
}

fn render_path_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Image path (Tab to select)");
    let inner = block.inner(area);
    let len = app.path_input.chars().count();
    let scroll = input_scroll(len, inner.width);

    let input = Paragraph::new(app.path_input.as_str())
        .block(block)
        .scroll((0, scroll))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input, area);

    if !app.scan.is_loading() && inner.width > 0 && inner.height > 0 {
        let shown = len.saturating_sub(usize::from(scroll));
        let offset = u16::try_from(shown).unwrap_or(u16::MAX).min(inner.width - 1);
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

fn render_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(Color::Red))
        .title("Error");
    let banner = Paragraph::new(Span::styled(message, Style::new().fg(Color::Red)))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(banner, area);
}

fn render_result(frame: &mut Frame, result: &ScanResult, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(Color::Green))
        .title("Result");
    let text = Text::from(vec![
        Line::from(vec![Span::raw("Medicine: ").bold(), Span::raw(result.display_name())]),
        Line::from(vec![Span::raw("Details: ").bold(), Span::raw(result.display_details())]),
    ]);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }).block(block), area);
}

/// Shows the label, or a spinner in place of it while the upload runs. The
/// control is drawn dimmed in that case since Enter is ignored.
fn render_submit_button(frame: &mut Frame, app: &App, area: Rect) {
    let (label, style) = if app.scan.is_loading() {
        let spinner = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
        (
            Line::from(format!("{spinner} Scanning...")),
            Style::new().fg(Color::DarkGray),
        )
    } else {
        (
            Line::from(UPLOAD_LABEL.bold()),
            Style::new().fg(Color::White).bg(Color::Blue),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    let button = Paragraph::new(label).style(style).alignment(Alignment::Center).block(block);
    frame.render_widget(button, area);
}
