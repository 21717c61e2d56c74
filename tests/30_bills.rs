mod common;

use anyhow::Result;
use reqwest::StatusCode;

use capitolwatch_api::records::BillStatus;
use capitolwatch_api::seed;

async fn seed_bills(app: &common::TestApp) -> Result<()> {
    for b in [
        common::bill("hr0101-119", 119, "hr", 101, "Tax Fairness for Families Act", BillStatus::InCommittee, "2025-03-01"),
        common::bill("hr0202-119", 119, "hr", 202, "Clean Energy Manufacturing Act", BillStatus::Introduced, "2025-04-10"),
        common::bill("s0303-119", 119, "s", 303, "Tax Administration Simplification Act", BillStatus::Introduced, "2025-02-20"),
        common::bill("hr0404-118", 118, "hr", 404, "Payroll Tax Holiday Act", BillStatus::Enacted, "2023-09-12"),
    ] {
        seed::upsert_bill(&app.pool, &b).await?;
    }
    Ok(())
}

#[tokio::test]
async fn type_congress_and_keyword_intersect_to_a_single_bill() -> Result<()> {
    let app = common::spawn_app().await?;
    seed_bills(&app).await?;

    let res = reqwest::get(format!(
        "{}/bills?bill_type=hr&congress=119&keyword=tax",
        app.base_url
    ))
    .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let rows: Vec<serde_json::Value> = res.json().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["bill_id"], "hr0101-119");
    Ok(())
}

#[tokio::test]
async fn status_filter_matches_case_insensitively() -> Result<()> {
    let app = common::spawn_app().await?;
    seed_bills(&app).await?;

    let res = reqwest::get(format!("{}/bills?status=IN_COMMITTEE", app.base_url)).await?;
    let rows: Vec<serde_json::Value> = res.json().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "in_committee");
    Ok(())
}

#[tokio::test]
async fn bills_come_back_newest_first() -> Result<()> {
    let app = common::spawn_app().await?;
    seed_bills(&app).await?;

    let res = reqwest::get(format!("{}/bills", app.base_url)).await?;
    let rows: Vec<serde_json::Value> = res.json().await?;
    assert_eq!(rows.len(), 4);
    let dates: Vec<&str> = rows
        .iter()
        .map(|r| r["introduced_date"].as_str().unwrap_or(""))
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    Ok(())
}

#[tokio::test]
async fn unparsable_congress_applies_no_filter() -> Result<()> {
    let app = common::spawn_app().await?;
    seed_bills(&app).await?;

    let res = reqwest::get(format!("{}/bills?congress=one-nineteen", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let rows: Vec<serde_json::Value> = res.json().await?;
    assert_eq!(rows.len(), 4);
    Ok(())
}

#[tokio::test]
async fn no_parameters_never_errors_and_respects_default_limit() -> Result<()> {
    let app = common::spawn_app().await?;
    seed_bills(&app).await?;

    let res = reqwest::get(format!("{}/bills", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let rows: Vec<serde_json::Value> = res.json().await?;
    assert!(rows.len() <= 50);
    Ok(())
}
