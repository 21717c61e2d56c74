use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth;
use crate::error::ApiError;
use crate::sanitize;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    password_hash: String,
}

/// POST /auth/register - create an account.
///
/// Validation failures are user-correctable, so unlike store failures they
/// come back as 400 with a specific reason.
pub async fn register_post(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let username = sanitize::scrub(
        body.username.as_deref().unwrap_or(""),
        sanitize::USERNAME_MAX_LEN,
    );
    let email = sanitize::scrub(body.email.as_deref().unwrap_or(""), sanitize::EMAIL_MAX_LEN);
    let password = sanitize::scrub(
        body.password.as_deref().unwrap_or(""),
        sanitize::PASSWORD_MAX_LEN,
    );

    if username.len() < 3 {
        return Err(ApiError::bad_request("username must be at least 3 characters"));
    }
    if !email.contains('@') {
        return Err(ApiError::bad_request("email must be a valid address"));
    }
    if password.len() < 8 {
        return Err(ApiError::bad_request("password must be at least 8 characters"));
    }

    let taken = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(&username)
        .fetch_one(&state.pool)
        .await?;
    if taken > 0 {
        return Err(ApiError::conflict("username is already taken"));
    }

    let id = Uuid::new_v4().to_string();
    let created_at = chrono::Utc::now().to_rfc3339();
    sqlx::query(
        "INSERT INTO users (id, username, email, password_hash, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&username)
    .bind(&email)
    .bind(auth::hash_password(&password))
    .bind(&created_at)
    .execute(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "username": username, "email": email })),
    ))
}

/// POST /auth/login - authenticate and receive a bearer token.
pub async fn login_post(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let username = sanitize::scrub(
        body.username.as_deref().unwrap_or(""),
        sanitize::USERNAME_MAX_LEN,
    );
    let password = sanitize::scrub(
        body.password.as_deref().unwrap_or(""),
        sanitize::PASSWORD_MAX_LEN,
    );

    let user = sqlx::query_as::<_, UserRow>(
        "SELECT id, username, password_hash FROM users WHERE username = ?",
    )
    .bind(&username)
    .fetch_optional(&state.pool)
    .await?;

    // Same response for unknown user and wrong password
    let Some(user) = user else {
        return Err(ApiError::unauthorized("Invalid username or password"));
    };
    if !auth::verify_password(&password, &user.password_hash) {
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let (token, expires_in) = auth::issue_token(&user.id, &user.username).map_err(|e| {
        tracing::error!("token issuance failed: {}", e);
        ApiError::Database
    })?;

    Ok(Json(json!({ "token": token, "expires_in": expires_in })))
}
