use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfie::{config, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelfie=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    if config.google_books_api_key.is_some() {
        tracing::info!("Using Google Books API key from environment");
    }
    tracing::info!(
        "Catalog: {} (maxResults={})",
        config.google_books_url,
        config.max_results
    );

    server::serve(&config)
        .await
        .inspect_err(|e| tracing::error!("{}", e))
        .expect("Failed to start server");
}
