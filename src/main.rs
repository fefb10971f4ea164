// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::{App, ScanCompletion};
use config::Config;
use crate::core::client::ScanClient;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::initialize_logging()?;
    info!(log = %log_path.display(), "Starting medicine dashboard.");

    let config = Config::load()?;
    let client = ScanClient::new(&config.scan)?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(&config);
    let result = run(&mut terminal, &mut app, &client).await;
    if let Err(e) = &result {
        error!(error = %e, "Dashboard stopped with an error.");
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    info!("Medicine dashboard closed.");
    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, client: &ScanClient) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(4);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(app, client, &tx)?;
        } else {
            app.on_tick();
        }

        while let Ok(completion) = rx.try_recv() {
            app.finish_scan(completion);
        }
    }
    Ok(())
}

fn handle_events(app: &mut App, client: &ScanClient, tx: &mpsc::Sender<ScanCompletion>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.quit();
            } else if app.scan.is_open() {
                handle_popup_input(app, key, client, tx);
            } else {
                handle_dashboard_input(app, key.code);
            }
        }
    }
    Ok(())
}

/// Keys while the dashboard itself has focus.
fn handle_dashboard_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q' | 'Q') => app.quit(),
        KeyCode::Char('s' | 'S') => app.open_scan(),
        _ => {}
    }
}

/// Keys while the "Scan medicine" popup is open.
fn handle_popup_input(app: &mut App, key: KeyEvent, client: &ScanClient, tx: &mpsc::Sender<ScanCompletion>) {
    match key.code {
        KeyCode::Esc => app.close_scan(),
        KeyCode::Tab => app.select_typed_file(),
        KeyCode::Enter => {
            if let Some(request) = app.submit_scan() {
                app.spawn_scan(client, request, tx);
            }
        }
        KeyCode::Backspace => {
            app.path_input.pop();
        }
        KeyCode::Char(c) => app.path_input.push(c),
        _ => {}
    }
}
