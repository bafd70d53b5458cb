//! Folding a trailing suggestions block back into the main document.

use crate::ai::{prompts, TextGenerator};
use crate::error::DraftError;

use super::render::{html_to_text, markdown_to_html};

/// Merge a suggestions block into the main content.
///
/// Empty suggestions return `main` unchanged. Otherwise both inputs are
/// reduced to plain text and a single generation call produces the final
/// contract, re-rendered to HTML. The model is instructed to leave no
/// residual suggestions; the export path strips any stale marker that
/// slips through.
pub async fn merge_suggestions(
    llm: &dyn TextGenerator,
    main: &str,
    suggestions: &str,
) -> Result<String, DraftError> {
    if suggestions.trim().is_empty() {
        return Ok(main.to_string());
    }

    let prompt = prompts::build_merge_prompt(&html_to_text(main), &html_to_text(suggestions));
    let merged = llm.generate(&prompt).await?;

    tracing::info!("suggestions merged into document");
    Ok(markdown_to_html(&merged))
}
