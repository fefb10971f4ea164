// src/app.rs

use crate::config::Config;
use crate::core::client::{ScanClient, ScanError};
use crate::core::dashboard::Dashboard;
use crate::core::models::{ImageFile, ScanResult};
use crate::core::widget::{ScanRequest, ScanWidget};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Result of a spawned upload, sent back to the event loop.
#[derive(Debug)]
pub struct ScanCompletion {
    pub generation: u64,
    pub outcome: Result<ScanResult, ScanError>,
}

pub struct App {
    pub should_quit: bool,
    pub dashboard: Dashboard,
    pub scan: ScanWidget,
    /// Path typed into the popup's file field.
    pub path_input: String,
    pub spinner_frame: usize,
    pub endpoint: String,
    pub max_upload_bytes: u64,
    pub scan_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            dashboard: Dashboard::default(),
            scan: ScanWidget::new(),
            path_input: String::new(),
            spinner_frame: 0,
            endpoint: config.scan.endpoint.to_string(),
            max_upload_bytes: config.scan.max_upload_bytes,
            scan_task: None,
        }
    }

    pub fn on_tick(&mut self) {
        if self.scan.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) {
        self.close_scan();
        self.should_quit = true;
    }

    pub fn open_scan(&mut self) {
        self.scan.open();
    }

    /// Closes the popup, aborting an upload that is still running.
    pub fn close_scan(&mut self) {
        if let Some(task) = self.scan_task.take() {
            task.abort();
        }
        self.scan.close();
        self.path_input.clear();
        self.spinner_frame = 0;
    }

    /// Loads the file named in the path field and selects it, or shows why
    /// it was rejected.
    pub fn select_typed_file(&mut self) {
        let path = self.path_input.trim();
        if path.is_empty() {
            debug!("No path typed, nothing to select.");
            return;
        }
        match ImageFile::load(path, self.max_upload_bytes) {
            Ok(file) => self.scan.select_file(file),
            Err(e) => self.scan.reject_file(e.to_string()),
        }
    }

    pub fn submit_scan(&mut self) -> Option<ScanRequest> {
        let request = self.scan.submit();
        if request.is_some() {
            self.spinner_frame = 0;
        }
        request
    }

    /// Runs the upload on a tokio task and reports back over `tx`.
    pub fn spawn_scan(&mut self, client: &ScanClient, request: ScanRequest, tx: &mpsc::Sender<ScanCompletion>) {
        let client = client.clone();
        let tx = tx.clone();
        let ScanRequest { generation, file } = request;

        let handle = tokio::spawn(async move {
            let outcome = client.scan(file).await;
            let _ = tx.send(ScanCompletion { generation, outcome }).await;
        });
        self.scan_task = Some(handle);
    }

    pub fn finish_scan(&mut self, completion: ScanCompletion) {
        if self.scan.complete(completion.generation, completion.outcome) {
            self.scan_task = None;
        }
    }
}
