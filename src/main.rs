use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_review::api::router;
use course_review::catalog::{CatalogConfig, HttpCatalogClient};
use course_review::services::RefreshScheduler;
use course_review::state::AppState;
use course_review::store::CourseStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_review=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::new_from_env();
    info!("using catalog at {}", config.base_url);
    let client = Arc::new(HttpCatalogClient::new(config)?);
    let store = Arc::new(CourseStore::new(client));

    // First load runs in the background; pages report "loading" until it settles.
    let initial = store.clone();
    tokio::spawn(async move {
        initial.fetch_courses().await;
    });

    let refresh_secs = std::env::var("REFRESH_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    if refresh_secs > 0 {
        let scheduler = RefreshScheduler::new(store.clone(), refresh_secs);
        tokio::spawn(scheduler.start());
    }

    let state = AppState { store };
    let app = router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
