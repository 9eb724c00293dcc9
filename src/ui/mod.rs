//! Report view
//!
//! The view is a three-state machine (upload, loading, report) plus an error
//! banner that overlays the upload state. The transition rules live in
//! [`state`] as a plain enum so impossible combinations (loading *and* report)
//! cannot be represented; the embedded page mirrors those rules in script.

use axum::response::Html;

pub mod state;

/// Serves the single-page report UI at GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}
