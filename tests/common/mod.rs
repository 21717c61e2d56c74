#![allow(dead_code)]

use anyhow::Result;
use sqlx::SqlitePool;
use tempfile::TempDir;

use capitolwatch_api::config::DatabaseConfig;
use capitolwatch_api::records::{
    Bill, BillStatus, Chamber, Legislator, LobbyingFiling, SpendingAward,
};
use capitolwatch_api::{app, database, AppState};

pub struct TestApp {
    pub base_url: String,
    pub pool: SqlitePool,
    _data_dir: TempDir,
}

/// Spawn the real server on an ephemeral port against a scratch SQLite
/// file. Tables start empty; each test inserts exactly the fixtures it
/// needs through the seed upsert helpers.
pub async fn spawn_app() -> Result<TestApp> {
    let data_dir = tempfile::tempdir()?;
    let db_path = data_dir.path().join("test.db");
    let config = DatabaseConfig {
        path: db_path.to_string_lossy().into_owned(),
        max_connections: 5,
    };
    let pool = database::pool::connect(&config).await?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let router = app(AppState { pool: pool.clone() });
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        pool,
        _data_dir: data_dir,
    })
}

pub fn legislator(id: &str, first: &str, last: &str, party: &str, state: &str) -> Legislator {
    Legislator {
        bioguide_id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        party: party.to_string(),
        state: state.to_string(),
        chamber: Chamber::Lower,
        district: None,
        in_office: true,
        phone: String::new(),
    }
}

pub fn bill(
    id: &str,
    congress: i64,
    bill_type: &str,
    number: i64,
    title: &str,
    status: BillStatus,
    introduced_date: &str,
) -> Bill {
    Bill {
        bill_id: id.to_string(),
        congress,
        bill_type: bill_type.to_string(),
        number,
        title: title.to_string(),
        status,
        introduced_date: introduced_date.to_string(),
        sponsor_id: None,
    }
}

pub fn award(
    id: &str,
    recipient: &str,
    amount: f64,
    agency: &str,
    description: &str,
    fiscal_year: i64,
) -> SpendingAward {
    SpendingAward {
        award_id: id.to_string(),
        recipient_name: recipient.to_string(),
        award_amount: amount,
        award_type: "grant".to_string(),
        awarding_agency: agency.to_string(),
        description: description.to_string(),
        fiscal_year,
    }
}

pub fn filing(
    id: &str,
    client: &str,
    lobbyist: &str,
    amount: f64,
    year: i64,
    issue_areas: &str,
) -> LobbyingFiling {
    LobbyingFiling {
        filing_id: id.to_string(),
        client_name: client.to_string(),
        client_description: String::new(),
        registrant_name: "Testwell Advocacy".to_string(),
        registrant_address: String::new(),
        lobbyist_name: lobbyist.to_string(),
        lobbyist_title: String::new(),
        amount,
        year,
        quarter: "Q1".to_string(),
        report_type: "quarterly".to_string(),
        issue_areas: issue_areas.to_string(),
        specific_issues: String::new(),
        government_entities: String::new(),
        foreign_entities: String::new(),
        posted_date: "2025-01-15".to_string(),
    }
}
