//! Analyze route
//!
//! Handles `POST /api/v1/analyze`. The whole pipeline lives here: validate
//! the multipart upload, extract the transcript, truncate it to the prompt
//! budget, run one completion, validate the returned report, relay it.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::analysis::prompt::{user_message, SYSTEM_PROMPT};
use crate::analysis::AnalysisResult;
use crate::llm::CompletionError;
use crate::state::AppState;
use crate::transcript::{self, TranscriptError};

/// Multipart field carrying the PDF bytes
const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("No file uploaded. Please select a PDF file.")]
    MissingFile,

    #[error("Invalid file type. Please upload a PDF document.")]
    InvalidFileType,

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error("AI returned an empty response. Please try again.")]
    EmptyCompletion,

    #[error("Processing failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Processing failed: the model returned a malformed report ({0})")]
    MalformedReport(String),

    #[error("Processing failed: {0}")]
    Internal(String),
}

impl AnalyzeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::InvalidFileType | Self::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Transcript(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::EmptyCompletion | Self::Completion(_) | Self::MalformedReport(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Analysis failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Rejected upload");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// POST /api/v1/analyze
///
/// Accepts one multipart request with a single `file` field containing PDF
/// bytes. Success is the model's report, validated and relayed as JSON.
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AnalyzeError> {
    let mut file: Option<(Option<String>, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AnalyzeError::Multipart(e.to_string()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let content_type = field.content_type().map(str::to_owned);
            let data = field
                .bytes()
                .await
                .map_err(|e| AnalyzeError::Multipart(e.to_string()))?;
            file = Some((content_type, data));
            break;
        }
    }

    let (content_type, data) = file.ok_or(AnalyzeError::MissingFile)?;

    if !is_pdf_media_type(content_type.as_deref()) {
        return Err(AnalyzeError::InvalidFileType);
    }

    tracing::info!(size = data.len(), "Received transcript upload");

    // PDF parsing is CPU-bound; keep it off the async runtime
    let text = tokio::task::spawn_blocking(move || transcript::transcript_from_pdf(&data))
        .await
        .map_err(|e| AnalyzeError::Internal(e.to_string()))??;

    let truncated = transcript::truncate_to_budget(&text);
    if truncated.len() < text.len() {
        tracing::debug!(
            extracted = text.chars().count(),
            forwarded = transcript::MAX_TRANSCRIPT_CHARS,
            "Transcript truncated to prompt budget"
        );
    }

    let content = state
        .provider()
        .complete(SYSTEM_PROMPT, &user_message(truncated))
        .await?;

    if content.trim().is_empty() {
        return Err(AnalyzeError::EmptyCompletion);
    }

    let report: AnalysisResult = serde_json::from_str(&content)
        .map_err(|e| AnalyzeError::MalformedReport(e.to_string()))?;

    report
        .validate()
        .map_err(|e| AnalyzeError::MalformedReport(e.to_string()))?;

    tracing::info!(
        sentiment = ?report.sentiment,
        confidence = ?report.confidence_score,
        guidance_rows = report.guidance.len(),
        "Analysis complete"
    );

    Ok(Json(report))
}

/// The declared media type must be exactly `application/pdf`; anything else
/// (including a missing declaration) is rejected.
fn is_pdf_media_type(content_type: Option<&str>) -> bool {
    content_type == Some("application/pdf")
}
