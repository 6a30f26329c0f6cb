// Expense Categorizer - Web Server
// Serves the categorize endpoint backed by the keyword dictionary

use anyhow::{Context, Result};
use expense_categorizer::{api, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;
    expense_categorizer::init_with_filter(&settings.log_filter);

    let dictionary = settings.dictionary()?;
    match &settings.dictionary_path {
        Some(path) => tracing::info!(path = ?path, keywords = dictionary.keyword_count(), "loaded keyword dictionary"),
        None => tracing::info!(keywords = dictionary.keyword_count(), "using built-in keyword dictionary"),
    }

    let app = api::router(api::AppState::new(dictionary));

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.bind_addr))?;

    tracing::info!(addr = %settings.bind_addr, "categorizer server listening");
    println!("🚀 Server running on http://{}", settings.bind_addr);
    println!("   API: POST http://{}/api/categorize", settings.bind_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
