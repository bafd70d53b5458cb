//! Optional web-search collaborator used to enrich clause prompts with
//! jurisdiction context. Failures never propagate: a search that errors or
//! returns nothing yields an empty string.

use async_trait::async_trait;
use reqwest::Client;

/// Short-snippet search capability.
#[async_trait]
pub trait SnippetSearch: Send + Sync {
    /// Return a short concatenation of top-result snippets, or an empty
    /// string when nothing useful was found.
    async fn snippets(&self, query: &str) -> String;
}

const SNIPPET_LIMIT: usize = 3;

/// DuckDuckGo instant-answer search. No API key required.
pub struct DuckDuckGoSearch {
    client: Client,
}

impl DuckDuckGoSearch {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<String>, reqwest::Error> {
        let response = self
            .client
            .get("https://api.duckduckgo.com/")
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;

        let mut snippets = Vec::new();
        if let Some(abstract_text) = body["AbstractText"].as_str() {
            if !abstract_text.is_empty() {
                snippets.push(abstract_text.to_string());
            }
        }
        if let Some(related) = body["RelatedTopics"].as_array() {
            for item in related {
                if snippets.len() >= SNIPPET_LIMIT {
                    break;
                }
                if let Some(text) = item["Text"].as_str() {
                    snippets.push(text.to_string());
                }
            }
        }
        Ok(snippets)
    }
}

impl Default for DuckDuckGoSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnippetSearch for DuckDuckGoSearch {
    async fn snippets(&self, query: &str) -> String {
        match self.fetch(query).await {
            Ok(snippets) => snippets.join("\n"),
            Err(e) => {
                tracing::warn!("web search failed, continuing without context: {}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_empty_string() {
        // Point the client at a closed port; the trait must swallow the
        // failure.
        struct Broken;

        #[async_trait]
        impl SnippetSearch for Broken {
            async fn snippets(&self, _query: &str) -> String {
                let client = Client::new();
                match client.get("http://127.0.0.1:1/").send().await {
                    Ok(_) => "unexpected".to_string(),
                    Err(_) => String::new(),
                }
            }
        }

        assert_eq!(Broken.snippets("anything").await, "");
    }
}
