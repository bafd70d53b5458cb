//! Composes a full document: header, generated clause sections, signature
//! block, and the trailing suggestions section.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ai::prompts;
use crate::ai::{SnippetSearch, TextGenerator};
use crate::error::DraftError;

use super::clauses::ClauseSet;
use super::render::markdown_to_html;
use super::sections::SUGGESTIONS_HEADING;
use super::templates::{render_header, render_signature_block, Customization, DocumentType};

/// Assembles documents by delegating clause drafting to the injected
/// text-generation collaborator. N clauses cost N+1 sequential generation
/// calls (one per clause plus one for the suggestions block); any failure
/// aborts the assembly with no partial document.
pub struct DocumentAssembler {
    llm: Arc<dyn TextGenerator>,
    search: Option<Arc<dyn SnippetSearch>>,
}

impl DocumentAssembler {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm, search: None }
    }

    /// Enrich clause prompts with jurisdiction context from a search
    /// provider. One lookup per assembly; lookup failures degrade to no
    /// context.
    pub fn with_search(mut self, search: Arc<dyn SnippetSearch>) -> Self {
        self.search = Some(search);
        self
    }

    /// Assemble a complete document.
    ///
    /// Output order is fixed: header, fixed clauses in template order, other
    /// clauses in parser-encounter order, signature block, suggestions
    /// heading plus generated suggestions.
    pub async fn assemble(
        &self,
        doc_type: DocumentType,
        details: &HashMap<String, String>,
        clauses: &HashMap<String, String>,
        other_clauses: &ClauseSet,
        customization: &Customization,
    ) -> Result<String, DraftError> {
        let template = doc_type.template();
        let mut document = render_header(doc_type, details, customization);

        let context = self.jurisdiction_context(customization).await;

        for title in template.clauses {
            let base_text = clauses.get(*title).map(String::as_str).unwrap_or("");
            let section = self
                .generate_clause(title, base_text, customization, context.as_deref())
                .await?;
            document.push_str(&section);
        }

        for (title, base_text) in other_clauses.iter() {
            let section = self
                .generate_clause(title, base_text, customization, context.as_deref())
                .await?;
            document.push_str(&section);
        }

        document.push_str(&render_signature_block(doc_type));

        let suggestions = self.llm.generate(&prompts::build_suggestions_prompt()).await?;
        document.push_str(SUGGESTIONS_HEADING);
        document.push_str(&format!("<div>{}</div>", markdown_to_html(&suggestions)));

        tracing::info!(
            document_type = doc_type.as_str(),
            fixed_clauses = template.clauses.len(),
            other_clauses = other_clauses.len(),
            "document assembled"
        );

        Ok(document)
    }

    async fn generate_clause(
        &self,
        title: &str,
        base_text: &str,
        customization: &Customization,
        context: Option<&str>,
    ) -> Result<String, DraftError> {
        let prompt = prompts::build_clause_prompt(title, base_text, customization, context);
        let generated = self.llm.generate(&prompt).await?;
        Ok(format!(
            "<h3>{}</h3><div>{}</div><hr>",
            title,
            markdown_to_html(&generated)
        ))
    }

    async fn jurisdiction_context(&self, customization: &Customization) -> Option<String> {
        let search = self.search.as_ref()?;
        let query = format!("{} contract law requirements", customization.jurisdiction);
        let snippets = search.snippets(&query).await;
        if snippets.is_empty() {
            None
        } else {
            Some(snippets)
        }
    }
}
