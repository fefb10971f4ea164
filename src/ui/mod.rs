// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area);

    widgets::header::render_header(frame, layout.header);
    widgets::stats::render_stats(frame, app, layout.stats);
    widgets::activity::render_activity(frame, app, layout.activity);
    widgets::footer::render_footer(frame, app, layout.footer);

    // The popup goes last so it is drawn over the dashboard.
    if app.scan.is_open() {
        widgets::scan_popup::render_scan_popup(frame, app, area);
    }
}
