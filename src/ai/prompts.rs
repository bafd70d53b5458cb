//! Prompt builders for every generation call the service makes.
//!
//! Clause and suggestion prompts carry [`DRAFTING_GUIDANCE`], which asks the
//! model for complete formal text, a bracketed clarifying question when
//! information is missing, and trailing bullet-point improvement notes.

use crate::document::templates::Customization;

/// Instructions appended to drafting prompts (clauses and suggestions).
pub const DRAFTING_GUIDANCE: &str = "\n\nPlease provide the complete text using formal legal \
language. If further details are required, include a clarifying question in square brackets. \
At the end of your response, list detailed suggestions or improvements as bullet points.";

/// Sentinel used when the request supplies no base text for a clause.
pub const NO_BASE_TEXT: &str = "None provided";

/// Build the prompt for a single clause.
///
/// `context` is an optional snippet of external search results about the
/// jurisdiction; `base_text` is untrusted user input passed through
/// verbatim.
pub fn build_clause_prompt(
    clause_title: &str,
    base_text: &str,
    customization: &Customization,
    context: Option<&str>,
) -> String {
    let base = if base_text.trim().is_empty() {
        NO_BASE_TEXT
    } else {
        base_text
    };

    let mut prompt = format!(
        "Generate a '{}' clause for a legal contract. \
         Ensure compliance with {} law and write it in a {} tone. \
         Base clause text: '{}'.",
        clause_title, customization.jurisdiction, customization.tone, base
    );

    if let Some(context) = context {
        prompt.push_str(&format!(
            "\n\nExternal context on the jurisdiction:\n{}",
            context
        ));
    }

    prompt.push_str(DRAFTING_GUIDANCE);
    prompt
}

/// Build the prompt for the trailing suggestions section.
pub fn build_suggestions_prompt() -> String {
    let mut prompt = String::from(
        "Based on the current contract, please provide additional suggestions or improvements. \
         Include a detailed analysis for each suggestion. Format them as bullet points.",
    );
    prompt.push_str(DRAFTING_GUIDANCE);
    prompt
}

/// Build the chat-revision prompt carrying the whole current document.
pub fn build_revision_prompt(document: &str, user_message: &str) -> String {
    format!(
        "You are a legal contract assistant. The current contract is as follows:\n\n{}\n\n\
         User wants the following changes or clarifications:\n{}\n\n\
         Please provide an updated contract reflecting these changes. If you need more \
         information, append a clarifying question in square brackets. End with bullet-point \
         suggestions for any additional improvements.",
        document, user_message
    )
}

/// Build the upload-analysis prompt.
pub fn build_analysis_prompt(text: &str) -> String {
    format!(
        "You are a legal assistant. Below is a contract text:\n\n{}\n\n\
         Please provide a concise summary of key points, then a deep analysis of potential \
         risks, legal considerations, and improvements. Format your response with headings \
         and bullet points.",
        text
    )
}

/// Build the merge prompt that folds a suggestions block into the contract.
pub fn build_merge_prompt(contract_text: &str, suggestions_text: &str) -> String {
    format!(
        "You are a legal contract assistant. The current contract is as follows:\n\n{}\n\n\
         The following suggestions were proposed for it:\n\n{}\n\n\
         Apply the suggestions to the contract and return only the final contract text, with \
         no remaining suggestions, analysis, or commentary.",
        contract_text, suggestions_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customization() -> Customization {
        Customization {
            jurisdiction: "New York".to_string(),
            tone: "formal".to_string(),
        }
    }

    #[test]
    fn test_clause_prompt_carries_title_jurisdiction_and_tone() {
        let prompt = build_clause_prompt("Term Clause", "5 years", &customization(), None);
        assert!(prompt.contains("'Term Clause' clause"));
        assert!(prompt.contains("New York law"));
        assert!(prompt.contains("formal tone"));
        assert!(prompt.contains("Base clause text: '5 years'"));
        assert!(prompt.ends_with(DRAFTING_GUIDANCE));
    }

    #[test]
    fn test_blank_base_text_uses_sentinel() {
        let prompt = build_clause_prompt("Term Clause", "   ", &customization(), None);
        assert!(prompt.contains("Base clause text: 'None provided'"));
    }

    #[test]
    fn test_clause_prompt_includes_search_context_when_present() {
        let with = build_clause_prompt("Term Clause", "", &customization(), Some("NY GOL 5-701"));
        assert!(with.contains("External context"));
        assert!(with.contains("NY GOL 5-701"));

        let without = build_clause_prompt("Term Clause", "", &customization(), None);
        assert!(!without.contains("External context"));
    }

    #[test]
    fn test_revision_prompt_embeds_document_and_message() {
        let prompt = build_revision_prompt("<h2>NDA</h2>", "make the term 2 years");
        assert!(prompt.contains("<h2>NDA</h2>"));
        assert!(prompt.contains("make the term 2 years"));
    }

    #[test]
    fn test_merge_prompt_forbids_residual_suggestions() {
        let prompt = build_merge_prompt("contract body", "add venue clause");
        assert!(prompt.contains("contract body"));
        assert!(prompt.contains("add venue clause"));
        assert!(prompt.contains("no remaining suggestions"));
    }
}
