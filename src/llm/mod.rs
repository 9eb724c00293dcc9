//! Completion provider
//!
//! Seam between the analysis pipeline and the hosted model. The handler only
//! sees the [`CompletionProvider`] trait; the Groq-backed implementation and
//! any test double live behind it.

pub mod provider;
pub mod types;

pub use provider::{CompletionProvider, GroqProvider};
pub use types::CompletionError;
