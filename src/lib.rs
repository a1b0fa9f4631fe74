//! discovery - Turn messy discovery meeting notes into an executive-ready report
//!
//! The pipeline is: form fields -> [`payload::assemble`] -> language model ->
//! Markdown -> [`docx::convert`] -> DOCX bytes.

pub mod cli;
pub mod config;
pub mod docx;
pub mod llm;
pub mod payload;
pub mod report;

use thiserror::Error;

/// Main error type for discovery
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please provide a transcript/notes or fill at least one structured field.")]
    IncompleteInput,

    #[error("Unknown input field: {0}")]
    UnknownField(String),

    #[error(
        "Unknown meeting type '{0}'. Expected one of: Discovery / Intake, Stakeholder interview, Project kick-off (discovery), Other"
    )]
    UnknownMeetingType(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "discovery";
