use activity_dash::{config, routes, state};
use axum::Router;
use mimalloc::MiMalloc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "activity_dash=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    let state = state::AppState::new(config.clone());

    // Warm the cache; a failure here is reported on the page, not fatal.
    if let Err(err) = state.activities() {
        tracing::warn!("Initial load of {} failed: {}", config.data_path.display(), err);
    }

    let eviction_cache = state.cache().clone();
    let eviction_interval = config.cache_eviction_interval;
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(eviction_interval).await;
            eviction_cache.evict_expired();
        }
    });

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::dashboard::router())
        .merge(routes::api::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Activity dashboard listening on {}", addr);
    tracing::info!("Data source: {}", config.data_path.display());
    tracing::info!("Dashboard: http://{}/", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await
}
