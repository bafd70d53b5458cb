//! DOCX export of a finished document. The suggestions block is stripped
//! first so the exported file carries only substantive content.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use crate::document::render::html_to_text;
use crate::document::sections::strip_suggestions;
use crate::error::DraftError;

/// Build a DOCX from a document, suggestions removed.
pub fn export_docx(document: &str) -> Result<Vec<u8>, DraftError> {
    let cleaned = strip_suggestions(document);
    let text = html_to_text(&cleaned);

    let mut docx = Docx::new().add_paragraph(
        Paragraph::new()
            .add_run(Run::new().add_text("Exported Contract"))
            .style("Heading1"),
    );

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DraftError::Export(e.to_string()))?;

    tracing::info!(bytes = buffer.get_ref().len(), "document exported as DOCX");
    Ok(buffer.into_inner())
}

/// Timestamped download name for an exported contract.
pub fn export_file_name() -> String {
    format!("contract-{}.docx", chrono::Utc::now().format("%Y%m%d-%H%M%S"))
}
