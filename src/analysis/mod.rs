//! Upload analysis: format detection, text extraction, and LLM-backed
//! summary/risk analysis of an existing contract.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::ai::{prompts, TextGenerator};
use crate::document::render::markdown_to_html;
use crate::error::DraftError;

/// Upload formats the analysis path accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Pdf,
    Docx,
}

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Detect the upload format from the file name. Anything other than
/// PDF/DOCX is rejected before extraction is attempted.
pub fn detect_format(file_name: &str) -> Result<UploadFormat, DraftError> {
    let mime = mime_guess::from_path(file_name)
        .first()
        .ok_or_else(|| DraftError::UnsupportedFormat(file_name.to_string()))?;

    match mime.essence_str() {
        PDF_MIME => Ok(UploadFormat::Pdf),
        DOCX_MIME => Ok(UploadFormat::Docx),
        _ => Err(DraftError::UnsupportedFormat(file_name.to_string())),
    }
}

/// Extract plain text from an uploaded document.
pub fn extract_text(format: UploadFormat, bytes: &[u8]) -> Result<String, DraftError> {
    match format {
        UploadFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DraftError::Extraction(format!("pdf: {}", e))),
        UploadFormat::Docx => extract_docx_text(bytes),
    }
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, DraftError> {
    let docx =
        docx_rs::read_docx(bytes).map_err(|e| DraftError::Extraction(format!("docx: {}", e)))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Send extracted contract text to the model for a summary plus risk
/// analysis, rendered to HTML.
pub async fn summarize_and_analyze(
    llm: &dyn TextGenerator,
    text: &str,
) -> Result<String, DraftError> {
    let prompt = prompts::build_analysis_prompt(text);
    let analysis = llm.generate(&prompt).await?;

    tracing::info!(input_chars = text.len(), "uploaded document analyzed");
    Ok(markdown_to_html(&analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiError;
    use async_trait::async_trait;

    #[test]
    fn test_detect_format_accepts_pdf_and_docx() {
        assert_eq!(detect_format("contract.pdf").unwrap(), UploadFormat::Pdf);
        assert_eq!(detect_format("contract.PDF").unwrap(), UploadFormat::Pdf);
        assert_eq!(detect_format("contract.docx").unwrap(), UploadFormat::Docx);
    }

    #[test]
    fn test_detect_format_rejects_everything_else() {
        for name in ["notes.txt", "contract.doc", "archive.zip", "noextension"] {
            let err = detect_format(name).unwrap_err();
            assert!(
                matches!(err, DraftError::UnsupportedFormat(_)),
                "expected UnsupportedFormat for {}",
                name
            );
        }
    }

    #[test]
    fn test_extract_garbage_pdf_is_an_extraction_error() {
        let result = extract_text(UploadFormat::Pdf, b"not a pdf at all");
        assert!(matches!(result, Err(DraftError::Extraction(_))));
    }

    #[test]
    fn test_extract_garbage_docx_is_an_extraction_error() {
        let result = extract_text(UploadFormat::Docx, b"not a zip archive");
        assert!(matches!(result, Err(DraftError::Extraction(_))));
    }

    #[test]
    fn test_docx_round_trip_extraction() {
        use docx_rs::{Docx, Paragraph, Run};
        use std::io::Cursor;

        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("First paragraph")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Second paragraph")));

        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();

        let text = extract_text(UploadFormat::Docx, buffer.get_ref()).unwrap();
        assert!(text.contains("First paragraph"));
        assert!(text.contains("Second paragraph"));
    }

    #[tokio::test]
    async fn test_summarize_renders_model_markdown() {
        struct AnalysisGenerator;

        #[async_trait]
        impl TextGenerator for AnalysisGenerator {
            async fn generate(&self, prompt: &str) -> Result<String, AiError> {
                assert!(prompt.contains("the uploaded text"));
                Ok("## Summary\n\n- risk: unlimited liability".to_string())
            }
        }

        let html = summarize_and_analyze(&AnalysisGenerator, "the uploaded text")
            .await
            .unwrap();
        assert!(html.contains("<h2>Summary</h2>"));
        assert!(html.contains("<li>risk: unlimited liability</li>"));
    }
}
