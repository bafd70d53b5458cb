use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use lexdraft::ai::{CredentialManager, DuckDuckGoSearch, GeminiClient, GeminiConfig, TextGenerator};
use lexdraft::document::DocumentAssembler;
use lexdraft::server::{self, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let api_key = CredentialManager::get_api_key("gemini")?;
    let llm: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(GeminiConfig {
        api_key,
        ..Default::default()
    })?);

    let mut assembler = DocumentAssembler::new(Arc::clone(&llm));
    if search_enabled() {
        tracing::info!("web-search prompt enrichment enabled");
        assembler = assembler.with_search(Arc::new(DuckDuckGoSearch::new()));
    }

    let state = AppState {
        llm,
        assembler: Arc::new(assembler),
    };

    server::run(state, ServerConfig::from_env()).await?;
    Ok(())
}

fn search_enabled() -> bool {
    std::env::var("LEXDRAFT_ENABLE_SEARCH")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
