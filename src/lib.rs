//! Callsight Server Library
//!
//! This crate exposes the pieces of the analysis pipeline needed for
//! integration testing. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `analysis`: The report schema, its validation rules, and the analyst prompt
//! - `transcript`: PDF text extraction and the transcript length budget
//! - `llm`: Completion provider trait and the Groq-backed implementation
//! - `routes`: HTTP endpoints (analyze, health) and the assembled router
//! - `ui`: The report view state machine and the embedded single-page UI

pub mod analysis;
pub mod config;
pub mod llm;
pub mod routes;
pub mod state;
pub mod transcript;
pub mod ui;
