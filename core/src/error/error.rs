use thiserror::Error;

use super::completion::CompletionError;
use super::normalize::{AssignmentError, NormalizeError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("server failed: {0}")]
    Server(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Everything that can go wrong while turning a task list into assignments.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}

impl AnalyzeError {
    /// Short message safe to hand back to HTTP callers.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Completion(_) => "Completion request failed.",
            Self::Normalize(NormalizeError::MissingAssignments) => "Missing assignments array.",
            Self::Normalize(_) => "AI returned invalid JSON.",
            Self::Assignment(_) => "AI returned malformed assignments.",
        }
    }
}
