//! Chat-style iterative revision of a generated document.

use crate::ai::{prompts, TextGenerator};
use crate::error::DraftError;

use super::render::markdown_to_html;

/// Ask the model to apply the user's requested changes to the current
/// document and return the updated document as HTML.
pub async fn revise_document(
    llm: &dyn TextGenerator,
    current_document: &str,
    user_message: &str,
) -> Result<String, DraftError> {
    let prompt = prompts::build_revision_prompt(current_document, user_message);
    let updated = llm.generate(&prompt).await?;

    tracing::info!(message_chars = user_message.len(), "document revised");
    Ok(markdown_to_html(&updated))
}
