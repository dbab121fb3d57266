use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod prizes;
mod rate_limit;
mod service;
mod state;
mod store;

use config::Args;
use handlers::{health_handler, index_handler, metrics_handler, spin_handler};
use prizes::PrizeTable;
use rate_limit::RateLimiter;
use state::AppState;
use store::{EligibilityStore, MemoryEligibilityStore, RedisEligibilityStore};

// Pick the spin-record backend once at startup; the choice is fixed for
// the process lifetime.
fn select_store(redis_url: Option<&str>) -> Arc<dyn EligibilityStore> {
    match redis_url {
        Some(url) => match RedisEligibilityStore::connect(url) {
            Ok(store) => {
                tracing::info!("spin records stored in redis at {url}");
                Arc::new(store)
            }
            Err(err) => {
                tracing::warn!("invalid REDIS_URL ({err}) - falling back to in-memory records");
                Arc::new(MemoryEligibilityStore::new())
            }
        },
        None => {
            tracing::warn!("REDIS_URL not set - spin records will not survive a restart");
            Arc::new(MemoryEligibilityStore::new())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".parse().unwrap()))
        .init();

    let args = Args::parse();

    let store = select_store(args.redis_url.as_deref());

    // creating shared state
    let state = Arc::new(AppState {
        prizes: PrizeTable::standard(),
        rate_limiter: RateLimiter::new(args.cooldown_ms),
        store,
    });

    // creating the router with routes
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/spin", post(spin_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("prize wheel running on http://localhost:{}", args.port);
    tracing::info!("cooldown: {} ms between requests per user", args.cooldown_ms);
    axum::serve(listener, app).await.unwrap();
}
