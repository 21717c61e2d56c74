mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_reports_ok_against_a_live_store() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_describes_the_service() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = reqwest::get(format!("{}/", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await?;
    assert!(body["endpoints"]["legislators"].is_string());
    assert!(body["endpoints"]["summary"].is_string());
    Ok(())
}
