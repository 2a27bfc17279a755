use std::sync::Arc;

use seo_prompter_api::api::{self, AppState};
use seo_prompter_api::config::AppConfig;
use seo_prompter_api::domain::prompt::PromptCatalog;
use seo_prompter_api::infrastructure::clipboard::SystemClipboard;
use seo_prompter_api::infrastructure::gemini::GeminiClient;
use seo_prompter_api::infrastructure::persistence::PersistenceAdapter;
use seo_prompter_api::infrastructure::repositories::FileStore;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    tracing::info!(path = %config.store_path.display(), "Using local store");
    let persistence = Arc::new(PersistenceAdapter::new(Arc::new(FileStore::new(
        config.store_path.clone(),
    ))));

    let generator = Arc::new(GeminiClient::new(config.gemini.clone())?);
    let clipboard = Arc::new(SystemClipboard::new());

    let state = AppState::new(PromptCatalog::builtin(), generator, clipboard, persistence);
    state.board.schedule_seen();

    let app = api::router(state);

    // Start server
    tracing::info!("Server listening on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
