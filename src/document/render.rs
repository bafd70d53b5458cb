//! Rendering between the three text shapes the service handles: the model's
//! Markdown output, the document HTML sent to clients, and plain text for
//! re-prompting and export.

use pulldown_cmark::{html, Options, Parser};

/// Convert model Markdown output to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered.trim().to_string()
}

/// Closing a block element (or a line break rule) ends a text line.
const BLOCK_TAGS: [&str; 14] = [
    "/p", "/h1", "/h2", "/h3", "/h4", "/h5", "/h6", "/div", "/li", "/ul", "/ol", "br", "br/",
    "hr",
];

/// Reduce document HTML to plain text.
///
/// Tags are dropped; block-closing tags become newlines; the common named
/// entities are decoded; runs of blank lines collapse to one. This is a
/// deliberately small reduction for prompt and export text, not a general
/// HTML parser.
pub fn html_to_text(html: &str) -> String {
    let mut flat = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        flat.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) => {
                let tag = after[..close].trim().to_ascii_lowercase();
                let name: String = tag.chars().take_while(|c| !c.is_whitespace()).collect();
                if BLOCK_TAGS.contains(&name.as_str()) {
                    flat.push('\n');
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unclosed '<' is kept as literal text.
                flat.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    flat.push_str(rest);

    let decoded = decode_entities(&flat);
    collapse_blank_lines(&decoded)
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        // Must come last so decoded entities are not re-decoded.
        .replace("&amp;", "&")
}

fn collapse_blank_lines(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut previous_blank = true;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !previous_blank {
                collapsed.push('\n');
            }
            previous_blank = true;
        } else {
            collapsed.push_str(line);
            collapsed.push('\n');
            previous_blank = false;
        }
    }
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headings_and_emphasis() {
        let html = markdown_to_html("## Term\n\nThe term is **five** years.");
        assert!(html.contains("<h2>Term</h2>"));
        assert!(html.contains("<strong>five</strong>"));
    }

    #[test]
    fn test_markdown_bullet_list() {
        let html = markdown_to_html("- add venue clause\n- define notice period");
        assert!(html.contains("<ul>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_markdown_output_is_trimmed() {
        let html = markdown_to_html("plain paragraph");
        assert_eq!(html, "<p>plain paragraph</p>");
    }

    #[test]
    fn test_html_block_tags_become_lines() {
        let text = html_to_text("<h2>NDA</h2><p>first</p><p>second</p><hr>");
        assert_eq!(text, "NDA\nfirst\nsecond");
    }

    #[test]
    fn test_html_entities_are_decoded() {
        let text = html_to_text("<p>Smith &amp; Co &lt;draft&gt; &quot;v2&quot;&nbsp;&#39;x&#39;</p>");
        assert_eq!(text, "Smith & Co <draft> \"v2\" 'x'");
    }

    #[test]
    fn test_blank_lines_collapse() {
        let text = html_to_text("<div><p>a</p></div><hr><hr><div><p>b</p></div>");
        assert_eq!(text, "a\n\nb");
    }
}
