use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AurexError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("document contains no pages")]
    EmptyDocument,

    #[error("failed to load section table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid section table: {0}")]
    TableInvalid(String),

    #[error("output serialization failed: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
