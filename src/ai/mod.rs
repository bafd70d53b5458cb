pub mod client;
pub mod credentials;
pub mod prompts;
pub mod search;

pub use client::{AiError, GeminiClient, GeminiConfig, TextGenerator};
pub use credentials::CredentialManager;
pub use search::{DuckDuckGoSearch, SnippetSearch};
