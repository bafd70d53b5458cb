//! Splitting a document into its main content and trailing suggestions
//! section.
//!
//! The suggestions section is delimited by a literal marker the assembler
//! emits exactly once, at the end of the document. Splitting is a plain
//! first-occurrence substring search: a document whose legitimate content
//! contains the marker text will mis-split. That is an accepted property of
//! the single-string document format.

/// Prefix that introduces the suggestions section.
pub const SUGGESTIONS_MARKER: &str = "<hr><h4>Additional Suggestions";

/// Full heading the assembler writes; starts with [`SUGGESTIONS_MARKER`].
pub const SUGGESTIONS_HEADING: &str = "<hr><h4>Additional Suggestions (Detailed Analysis)</h4>";

/// Split a document at the first marker occurrence.
///
/// Returns `(main, suggestions)`. The suggestions half keeps the marker and
/// runs to the end of the document; it is empty when no marker is present.
/// Both halves are trimmed so that stripping is idempotent.
pub fn split_sections(document: &str) -> (String, String) {
    match document.find(SUGGESTIONS_MARKER) {
        Some(at) => (
            document[..at].trim().to_string(),
            document[at..].trim().to_string(),
        ),
        None => (document.trim().to_string(), String::new()),
    }
}

/// Drop the suggestions section, keeping only the main content.
pub fn strip_suggestions(document: &str) -> String {
    split_sections(document).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_marker() {
        let document = format!(
            "<h2>NDA</h2><p>body</p>{}<div>add a venue clause</div>",
            SUGGESTIONS_HEADING
        );
        let (main, suggestions) = split_sections(&document);

        assert_eq!(main, "<h2>NDA</h2><p>body</p>");
        assert!(suggestions.starts_with(SUGGESTIONS_MARKER));
        assert!(suggestions.ends_with("<div>add a venue clause</div>"));
    }

    #[test]
    fn test_no_marker_means_everything_is_main() {
        let (main, suggestions) = split_sections("  <h2>NDA</h2><p>body</p>  ");
        assert_eq!(main, "<h2>NDA</h2><p>body</p>");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_strip_equals_main_half_of_split() {
        let document = format!("<p>body</p>{}<div>s</div>", SUGGESTIONS_HEADING);
        let (main, _) = split_sections(&document);
        assert_eq!(strip_suggestions(&document), main);
    }

    #[test]
    fn test_strip_is_idempotent() {
        let documents = [
            format!("<p>body</p>{}<div>s</div>", SUGGESTIONS_HEADING),
            "<p>no suggestions here</p>".to_string(),
            "   \n<p>leading whitespace</p>\n  ".to_string(),
        ];
        for document in &documents {
            let once = strip_suggestions(document);
            assert_eq!(strip_suggestions(&once), once);
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let document = format!(
            "<p>a</p>{}<p>first</p>{}<p>second</p>",
            SUGGESTIONS_HEADING, SUGGESTIONS_HEADING
        );
        let (main, suggestions) = split_sections(&document);
        assert_eq!(main, "<p>a</p>");
        assert!(suggestions.contains("first"));
        assert!(suggestions.contains("second"));
    }

    #[test]
    fn test_marker_inside_legitimate_content_mis_splits() {
        // Accepted limitation of the single-string format: marker text in
        // the body truncates everything after it.
        let document = format!(
            "<p>The clause titled {} is unusual</p>{}<div>s</div>",
            SUGGESTIONS_MARKER, SUGGESTIONS_HEADING
        );
        let (main, _) = split_sections(&document);
        assert_eq!(main, "<p>The clause titled");
    }

    #[test]
    fn test_heading_starts_with_marker() {
        assert!(SUGGESTIONS_HEADING.starts_with(SUGGESTIONS_MARKER));
    }
}
