pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod records;
pub mod sanitize;
pub mod seed;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state: the store pool is the only shared mutable
/// resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(record_routes())
        .merge(auth_routes())
        .merge(admin_routes())
        // Sanitization runs before any handler logic
        .layer(axum::middleware::from_fn(sanitize::sanitize_request))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn record_routes() -> Router<AppState> {
    use handlers::{bills, legislators, lobbying, spending, summary};

    Router::new()
        .route("/legislators", get(legislators::legislators_get))
        .route("/bills", get(bills::bills_get))
        .route("/spending", get(spending::spending_get))
        .route("/lobbying", get(lobbying::lobbying_get))
        .route("/summary", get(summary::summary_get))
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/auth/register", post(auth::register_post))
        .route("/auth/login", post(auth::login_post))
}

fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new().route("/admin/reseed", post(admin::reseed_post))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "CapitolWatch API",
        "version": version,
        "description": "Public government records API - legislators, bills, federal spending awards, and lobbying filings",
        "endpoints": {
            "legislators": "/legislators?state=&party=&chamber=&keyword=&limit=",
            "bills": "/bills?bill_type=&congress=&status=&keyword=&limit=",
            "spending": "/spending?agency=&recipient=&min_amount=&fiscal_year=&keyword=&limit=",
            "lobbying": "/lobbying?client=&lobbyist=&year=&min_amount=&keyword=&limit=",
            "summary": "/summary",
            "auth": "/auth/register, /auth/login",
            "admin": "/admin/reseed (operator token required)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::pool::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "timestamp": now, "database": "ok" })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "timestamp": now, "database": "unavailable" })),
            )
        }
    }
}
