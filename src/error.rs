use thiserror::Error;

use crate::ai::client::AiError;

/// Crate-level error for the drafting pipeline.
#[derive(Debug, Error)]
pub enum DraftError {
    /// Requested document type is not one of the supported templates.
    #[error("unsupported document type: {0}")]
    UnsupportedDocumentType(String),

    /// Uploaded file is not a PDF or DOCX.
    #[error("unsupported file format: {0} (expected .pdf or .docx)")]
    UnsupportedFormat(String),

    /// The text-generation service failed; the whole operation aborts.
    #[error(transparent)]
    Generation(#[from] AiError),

    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("export failed: {0}")]
    Export(String),
}
