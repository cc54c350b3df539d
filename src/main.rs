use std::sync::Arc;

use hoplink::{config::RelayConfig, routes::relay_router};
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::fmt()
        .with_file(true)
        .init();

    let config = Arc::new(RelayConfig::from_env());

    let app = relay_router(config.clone())
        .layer(TraceLayer::new_for_http())
        .layer(NormalizePathLayer::trim_trailing_slash());

    let addr = format!("[::]:{}", config.port).parse().unwrap();

    tracing::info!("Listening on: {}", addr);
    tracing::info!("Redirect target: {}", config.redirect_url);
    tracing::info!("Allowed origins: {}", config.allowed_origins.join(", "));

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
