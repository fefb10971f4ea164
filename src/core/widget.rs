// src/core/widget.rs

use crate::core::client::ScanError;
use crate::core::models::{ImageFile, ScanResult};
use tracing::{debug, info, warn};

pub const NO_FILE_MESSAGE: &str = "Please select an image to upload.";

/// Progress of the current scan. Loading, error and result are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanPhase {
    #[default]
    Idle,
    Loading { generation: u64 },
    Succeeded(ScanResult),
    Failed(String),
}

/// An upload the widget asks the caller to perform. The outcome must be fed
/// back through [`ScanWidget::complete`] together with `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub generation: u64,
    pub file: ImageFile,
}

/// State of the "Scan medicine" popup.
#[derive(Debug, Default)]
pub struct ScanWidget {
    open: bool,
    selected_file: Option<ImageFile>,
    phase: ScanPhase,
    // Bumped on every submit and close so late completions can be told apart.
    generation: u64,
}

impl ScanWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected_file(&self) -> Option<&ImageFile> {
        self.selected_file.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ScanPhase::Loading { .. })
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            ScanPhase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn last_result(&self) -> Option<&ScanResult> {
        match &self.phase {
            ScanPhase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn open(&mut self) {
        debug!("Scan popup opened.");
        self.open = true;
    }

    /// Hides the popup and drops the file, error and result. Any request
    /// still in flight is retired: its completion will be ignored.
    pub fn close(&mut self) {
        if self.is_loading() {
            info!(generation = self.generation, "Closing popup with a scan in flight, discarding it.");
        }
        self.open = false;
        self.selected_file = None;
        self.phase = ScanPhase::Idle;
        self.generation += 1;
    }

    pub fn select_file(&mut self, file: ImageFile) {
        debug!(file = %file.name, "Image selected.");
        self.selected_file = Some(file);
        if matches!(self.phase, ScanPhase::Failed(_)) {
            self.phase = ScanPhase::Idle;
        }
    }

    /// Reports a file that could not be selected. Ignored while a scan is
    /// running so the loading state is never replaced by a local error.
    pub fn reject_file(&mut self, message: impl Into<String>) {
        if self.is_loading() {
            return;
        }
        let message = message.into();
        warn!(%message, "Image selection rejected.");
        self.phase = ScanPhase::Failed(message);
    }

    /// Starts a scan of the selected file.
    ///
    /// Returns `None` without touching the network state when no file is
    /// selected (the validation message is shown instead) or when a scan is
    /// already running.
    pub fn submit(&mut self) -> Option<ScanRequest> {
        if self.is_loading() {
            debug!("Submit ignored, a scan is already running.");
            return None;
        }
        let Some(file) = self.selected_file.clone() else {
            self.phase = ScanPhase::Failed(NO_FILE_MESSAGE.to_string());
            return None;
        };

        self.generation += 1;
        let generation = self.generation;
        self.phase = ScanPhase::Loading { generation };
        info!(generation, file = %file.name, "Scan submitted.");
        Some(ScanRequest { generation, file })
    }

    /// Applies the outcome of the request tagged `generation`.
    ///
    /// Returns `false` when the outcome belongs to a request that is no
    /// longer outstanding and was discarded.
    pub fn complete(&mut self, generation: u64, outcome: Result<ScanResult, ScanError>) -> bool {
        match self.phase {
            ScanPhase::Loading { generation: current } if current == generation => {}
            _ => {
                debug!(generation, "Discarding stale scan outcome.");
                return false;
            }
        }

        self.phase = match outcome {
            Ok(result) => ScanPhase::Succeeded(result),
            Err(e) => ScanPhase::Failed(e.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::SCAN_FAILED_MESSAGE;

    fn pill() -> ImageFile {
        ImageFile {
            name: "pill.jpg".into(),
            path: "pill.jpg".into(),
            mime: "image/jpeg",
            bytes: vec![1, 2, 3],
        }
    }

    fn aspirin() -> ScanResult {
        ScanResult {
            medicine_name: Some("Aspirin".into()),
            details: Some("Pain reliever".into()),
        }
    }

    fn status_error(code: u16) -> ScanError {
        ScanError::Status(reqwest::StatusCode::from_u16(code).unwrap())
    }

    fn parse_error() -> ScanError {
        ScanError::Parse(serde_json::from_str::<ScanResult>("nope").unwrap_err())
    }

    fn assert_settled(widget: &ScanWidget) {
        assert!(!widget.is_loading());
        assert!(widget.last_error().is_some() ^ widget.last_result().is_some());
    }

    #[test]
    fn starts_closed_and_idle() {
        let widget = ScanWidget::new();
        assert!(!widget.is_open());
        assert!(widget.selected_file().is_none());
        assert!(!widget.is_loading());
        assert!(widget.last_error().is_none());
        assert!(widget.last_result().is_none());
    }

    #[test]
    fn close_always_clears_transient_state() {
        // Walk through every reachable phase and close from each.
        let setups: [fn(&mut ScanWidget); 7] = [
            |_| {},
            |w| w.open(),
            |w| {
                w.open();
                w.select_file(pill());
            },
            |w| {
                w.open();
                w.submit();
            },
            |w| {
                w.open();
                w.select_file(pill());
                w.submit();
            },
            |w| {
                w.open();
                w.select_file(pill());
                let req = w.submit().unwrap();
                w.complete(req.generation, Ok(aspirin()));
            },
            |w| {
                w.open();
                w.select_file(pill());
                let req = w.submit().unwrap();
                w.complete(req.generation, Err(status_error(500)));
            },
        ];

        for setup in setups {
            let mut widget = ScanWidget::new();
            setup(&mut widget);
            widget.close();
            assert!(!widget.is_open());
            assert!(widget.selected_file().is_none());
            assert!(widget.last_error().is_none());
            assert!(widget.last_result().is_none());
            assert!(!widget.is_loading());

            // Idempotent.
            widget.close();
            assert_eq!(&widget.phase, &ScanPhase::Idle);
        }
    }

    #[test]
    fn open_close_sequences() {
        let mut widget = ScanWidget::new();
        for round in 0..5 {
            widget.open();
            if round % 2 == 0 {
                widget.select_file(pill());
            }
            assert!(widget.is_open());
            widget.close();
            assert!(widget.selected_file().is_none());
            assert!(widget.last_error().is_none());
            assert!(widget.last_result().is_none());
        }
    }

    #[test]
    fn submit_without_file_sets_validation_error() {
        let mut widget = ScanWidget::new();
        widget.open();

        assert!(widget.submit().is_none());
        assert!(!widget.is_loading());
        assert_eq!(widget.last_error(), Some(NO_FILE_MESSAGE));
        assert_eq!(widget.last_error(), Some("Please select an image to upload."));
    }

    #[test]
    fn submit_without_file_replaces_previous_result() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.select_file(pill());
        let req = widget.submit().unwrap();
        widget.complete(req.generation, Ok(aspirin()));
        widget.close();
        widget.open();

        assert!(widget.submit().is_none());
        assert_eq!(widget.last_error(), Some(NO_FILE_MESSAGE));
        assert!(widget.last_result().is_none());
    }

    #[test]
    fn select_file_clears_error_but_keeps_result() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.submit();
        assert!(widget.last_error().is_some());

        widget.select_file(pill());
        assert!(widget.last_error().is_none());
        assert_eq!(widget.selected_file().map(|f| f.name.as_str()), Some("pill.jpg"));

        let req = widget.submit().unwrap();
        widget.complete(req.generation, Ok(aspirin()));
        widget.select_file(ImageFile { name: "box.png".into(), ..pill() });
        assert_eq!(widget.last_result(), Some(&aspirin()));
        assert_eq!(widget.selected_file().map(|f| f.name.as_str()), Some("box.png"));
    }

    #[test]
    fn submit_enters_loading_and_clears_previous_outcome() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.select_file(pill());
        let first = widget.submit().unwrap();
        widget.complete(first.generation, Err(status_error(500)));
        assert!(widget.last_error().is_some());

        let second = widget.submit().unwrap();
        assert!(widget.is_loading());
        assert!(widget.last_error().is_none());
        assert!(widget.last_result().is_none());
        assert_eq!(second.file, pill());
        assert!(second.generation > first.generation);
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.select_file(pill());
        assert!(widget.submit().is_some());
        assert!(widget.submit().is_none());
        assert!(widget.is_loading());
    }

    #[test]
    fn aspirin_scenario() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.select_file(pill());
        let req = widget.submit().unwrap();

        assert!(widget.complete(req.generation, Ok(aspirin())));
        assert_eq!(widget.last_result(), Some(&aspirin()));
        assert!(widget.last_error().is_none());
        assert!(!widget.is_loading());
    }

    #[test]
    fn server_error_scenario() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.select_file(pill());
        let req = widget.submit().unwrap();

        widget.complete(req.generation, Err(status_error(500)));
        assert_eq!(widget.last_error(), Some(SCAN_FAILED_MESSAGE));
        assert_eq!(widget.last_error(), Some("Failed to scan medicine. Please try again."));
        assert!(widget.last_result().is_none());
        assert!(!widget.is_loading());
    }

    #[test]
    fn empty_result_scenario() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.select_file(pill());
        let req = widget.submit().unwrap();

        widget.complete(req.generation, Ok(serde_json::from_str("{}").unwrap()));
        let result = widget.last_result().unwrap();
        assert_eq!(result.display_name(), "N/A");
        assert_eq!(result.display_details(), "No details available");
    }

    #[test]
    fn every_terminal_outcome_settles_exactly_one() {
        let outcomes: [fn() -> Result<ScanResult, ScanError>; 5] = [
            || Ok(aspirin()),
            || Ok(ScanResult::default()),
            || Err(status_error(404)),
            || Err(status_error(500)),
            || Err(parse_error()),
        ];
        for outcome in outcomes {
            let mut widget = ScanWidget::new();
            widget.open();
            widget.select_file(pill());
            let req = widget.submit().unwrap();
            widget.complete(req.generation, outcome());
            assert_settled(&widget);
        }
    }

    #[test]
    fn parse_failure_keeps_its_own_message() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.select_file(pill());
        let req = widget.submit().unwrap();

        widget.complete(req.generation, Err(parse_error()));
        let message = widget.last_error().unwrap();
        assert_ne!(message, SCAN_FAILED_MESSAGE);
        assert!(!message.is_empty());
    }

    #[test]
    fn stale_outcome_after_close_is_discarded() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.select_file(pill());
        let req = widget.submit().unwrap();
        widget.close();

        assert!(!widget.complete(req.generation, Ok(aspirin())));
        assert!(widget.last_result().is_none());
        assert!(!widget.is_loading());

        // A fresh scan after reopening is not affected by the old one.
        widget.open();
        widget.select_file(pill());
        let fresh = widget.submit().unwrap();
        assert!(!widget.complete(req.generation, Err(status_error(500))));
        assert!(widget.is_loading());
        assert!(widget.complete(fresh.generation, Ok(aspirin())));
        assert_eq!(widget.last_result(), Some(&aspirin()));
    }

    #[test]
    fn outcome_without_pending_request_is_ignored() {
        let mut widget = ScanWidget::new();
        widget.open();
        assert!(!widget.complete(0, Ok(aspirin())));
        assert_eq!(&widget.phase, &ScanPhase::Idle);
    }

    #[test]
    fn reject_file_shows_error_unless_loading() {
        let mut widget = ScanWidget::new();
        widget.open();
        widget.reject_file("notes.txt is not an image.");
        assert_eq!(widget.last_error(), Some("notes.txt is not an image."));

        widget.select_file(pill());
        widget.submit().unwrap();
        widget.reject_file("missing.png is missing.");
        assert!(widget.is_loading());
        assert!(widget.last_error().is_none());
    }
}
