use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extract_bearer_token;
use crate::error::ApiError;
use crate::sanitize;
use crate::seed::{self, SeedSource};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReseedRequest {
    pub source: Option<String>,
}

/// POST /admin/reseed - operator-triggered bulk replace from static data.
///
/// Idempotent per row: each loader upserts by primary key, so running the
/// same reseed twice leaves the collection identical to a single run.
pub async fn reseed_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ReseedRequest>,
) -> Result<Json<Value>, ApiError> {
    require_operator(&headers)?;

    let raw = body.source.as_deref().unwrap_or("");
    let cleaned = sanitize::scrub(raw, sanitize::DEFAULT_MAX_LEN);
    let source = SeedSource::parse(&cleaned)
        .ok_or_else(|| ApiError::bad_request(format!("Unknown seed source: {}", cleaned)))?;

    let counts = seed::load(&state.pool, source).await?;
    let detail = counts
        .iter()
        .map(|(name, n)| format!("{}: {} rows", name, n))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Json(json!({
        "success": true,
        "message": format!("reseeded {}", detail),
    })))
}

// Reseed sits behind a trust boundary: when an operator token is
// configured, the request must present it as a bearer token. An unset
// token leaves the gate open (development).
fn require_operator(headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = &crate::config::CONFIG.auth.admin_token else {
        return Ok(());
    };
    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(extract_bearer_token);
    match presented {
        Some(token) if token == expected => Ok(()),
        _ => Err(ApiError::unauthorized("Operator token required")),
    }
}
