//! View state machine
//!
//! Discrete events (file selected, response received, response failed, reset)
//! drive transitions between three mutually exclusive states. Client-side
//! pre-validation happens on the file-selected event: a non-PDF type or an
//! oversized file never leaves the upload state.

use crate::analysis::AnalysisResult;

/// Client-side upload ceiling. Advisory only; the server performs no size
/// check of its own.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// The three view states. The error banner is carried by the upload state
/// rather than being a state of its own, so it can never outlive a new
/// submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Idle, waiting for a file; `error` is the overlay banner
    Upload { error: Option<String> },
    /// One in-flight analysis request
    Loading,
    /// A received report, rendered until reset
    Report(AnalysisResult),
}

/// Discrete events that drive the view
#[derive(Debug, Clone)]
pub enum ViewEvent {
    FileSelected { media_type: String, size: u64 },
    ResponseReceived(AnalysisResult),
    ResponseFailed(String),
    Reset,
}

impl ViewState {
    /// Initial state: upload view, no banner.
    pub fn idle() -> Self {
        ViewState::Upload { error: None }
    }

    /// Apply one event. Events that make no sense in the current state
    /// (a response while idle, a file pick while loading) leave it unchanged.
    pub fn apply(self, event: ViewEvent) -> ViewState {
        match (self, event) {
            (ViewState::Upload { .. }, ViewEvent::FileSelected { media_type, size }) => {
                if media_type != "application/pdf" {
                    ViewState::Upload {
                        error: Some("Please select a PDF document.".to_string()),
                    }
                } else if size > MAX_UPLOAD_BYTES {
                    ViewState::Upload {
                        error: Some("File is too large. The limit is 20 MB.".to_string()),
                    }
                } else {
                    ViewState::Loading
                }
            }
            (ViewState::Loading, ViewEvent::ResponseReceived(report)) => ViewState::Report(report),
            (ViewState::Loading, ViewEvent::ResponseFailed(message)) => ViewState::Upload {
                error: Some(message),
            },
            (_, ViewEvent::Reset) => ViewState::idle(),
            (state, _) => state,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Upload { error } => error.as_deref(),
            _ => None,
        }
    }
}
