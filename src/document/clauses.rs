//! Parsing of free-text "other clauses" input into titled clause blocks.
//!
//! Input format, one block per clause, blocks separated by blank lines:
//!
//! ```text
//! Clause Title:
//! [Clause content, possibly spanning
//! several lines]
//! ```

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

// (?s) so the bracketed content may span lines; lazy title up to the first
// colon.
static BLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.*?):\s*\[(.*?)\]\s*$").expect("valid regex"));

/// Ordered mapping from clause title to clause base text.
///
/// Duplicate titles are last-write-wins: the later content replaces the
/// earlier one but the entry keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    entries: Vec<(String, String)>,
}

impl ClauseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clause, replacing the content in place if the title exists.
    pub fn insert(&mut self, title: String, content: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == title) {
            entry.1 = content;
        } else {
            self.entries.push((title, content));
        }
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, c)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse multi-clause input into a [`ClauseSet`].
///
/// Blocks that do not match the `Title: [content]` shape are dropped
/// silently; this function never fails. Titles and contents are trimmed but
/// otherwise passed through verbatim (they are untrusted text that ends up
/// in generation prompts).
pub fn parse_clause_blocks(input: &str) -> ClauseSet {
    let mut clauses = ClauseSet::new();

    for block in BLOCK_SEPARATOR.split(input.trim()) {
        if let Some(caps) = BLOCK_PATTERN.captures(block.trim()) {
            let title = caps[1].trim().to_string();
            let content = caps[2].trim().to_string();
            clauses.insert(title, content);
        }
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(set: &ClauseSet) -> Vec<(String, String)> {
        set.iter()
            .map(|(t, c)| (t.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn test_parses_well_formed_blocks() {
        let input = "Confidentiality Clause:\n[Do not share info]\n\nTerm Clause:\n[5 years]";
        let clauses = parse_clause_blocks(input);

        assert_eq!(
            pairs(&clauses),
            vec![
                (
                    "Confidentiality Clause".to_string(),
                    "Do not share info".to_string()
                ),
                ("Term Clause".to_string(), "5 years".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_input_yields_empty_set() {
        let clauses = parse_clause_blocks("Not a valid block");
        assert!(clauses.is_empty());
    }

    #[test]
    fn test_malformed_blocks_are_dropped_not_failed() {
        let input = "Good Clause:\n[kept]\n\nno brackets here\n\nAlso Good:\n[also kept]";
        let clauses = parse_clause_blocks(input);

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses.get("Good Clause"), Some("kept"));
        assert_eq!(clauses.get("Also Good"), Some("also kept"));
    }

    #[test]
    fn test_content_may_span_lines() {
        let input = "Indemnity:\n[Each party shall indemnify\nthe other party\nwithout limit]";
        let clauses = parse_clause_blocks(input);

        assert_eq!(
            clauses.get("Indemnity"),
            Some("Each party shall indemnify\nthe other party\nwithout limit")
        );
    }

    #[test]
    fn test_duplicate_titles_are_last_write_wins() {
        let input = "Term Clause:\n[1 year]\n\nNotice Clause:\n[30 days]\n\nTerm Clause:\n[5 years]";
        let clauses = parse_clause_blocks(input);

        // Later content wins, original position kept.
        assert_eq!(
            pairs(&clauses),
            vec![
                ("Term Clause".to_string(), "5 years".to_string()),
                ("Notice Clause".to_string(), "30 days".to_string()),
            ]
        );
    }

    #[test]
    fn test_titles_and_contents_are_trimmed() {
        let input = "  Spaced Title :\n[  padded content  ]";
        let clauses = parse_clause_blocks(input);

        assert_eq!(clauses.get("Spaced Title"), Some("padded content"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_clause_blocks("").is_empty());
        assert!(parse_clause_blocks("   \n\n  ").is_empty());
    }
}
