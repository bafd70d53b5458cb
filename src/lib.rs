//! lexdraft: LLM-assisted legal document drafting service.
//!
//! Pipeline: structured request → clause-block parsing → document assembly
//! (one generation call per clause plus one for the trailing suggestions
//! block) → optional chat revision / suggestion merge → DOCX export.
//! Uploaded PDF/DOCX contracts can also be summarized and risk-analyzed.

pub mod ai;
pub mod analysis;
pub mod document;
pub mod error;
pub mod export;
pub mod server;

pub use error::DraftError;
