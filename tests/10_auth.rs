mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_then_login_issues_a_token() -> Result<()> {
    let app = common::spawn_app().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", app.base_url))
        .json(&json!({ "username": "alice", "email": "alice@example.com", "password": "hunter2hunter2" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await?;
    assert_eq!(created["username"], "alice");

    let res = client
        .post(format!("{}/auth/login", app.base_url))
        .json(&json!({ "username": "alice", "password": "hunter2hunter2" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert!(!body["token"].as_str().unwrap_or("").is_empty());
    assert!(body["expires_in"].as_i64().unwrap_or(0) > 0);
    Ok(())
}

#[tokio::test]
async fn register_rejects_short_password_with_a_reason() -> Result<()> {
    let app = common::spawn_app().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", app.base_url))
        .json(&json!({ "username": "bob", "email": "bob@example.com", "password": "short" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await?;
    assert!(body["error"].as_str().unwrap_or("").contains("password"));
    Ok(())
}

#[tokio::test]
async fn register_rejects_duplicate_usernames() -> Result<()> {
    let app = common::spawn_app().await?;
    let client = reqwest::Client::new();

    let payload = json!({ "username": "carol", "email": "carol@example.com", "password": "longenough1" });
    let first = client
        .post(format!("{}/auth/register", app.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = client
        .post(format!("{}/auth/register", app.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() -> Result<()> {
    let app = common::spawn_app().await?;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/auth/register", app.base_url))
        .json(&json!({ "username": "dave", "email": "dave@example.com", "password": "correcthorse" }))
        .send()
        .await?;

    let res = client
        .post(format!("{}/auth/login", app.base_url))
        .json(&json!({ "username": "dave", "password": "wronghorse!" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
