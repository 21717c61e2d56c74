use sqlx::SqlitePool;

use crate::database::DbError;

/// Idempotent DDL for the four record collections plus the credential
/// store. Every collection has a stable primary key used for
/// upsert-by-replace during reseed.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS legislators (
        bioguide_id TEXT PRIMARY KEY,
        first_name  TEXT NOT NULL,
        last_name   TEXT NOT NULL,
        party       TEXT NOT NULL,
        state       TEXT NOT NULL,
        chamber     TEXT NOT NULL,
        district    TEXT,
        in_office   INTEGER NOT NULL DEFAULT 1,
        phone       TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS bills (
        bill_id         TEXT PRIMARY KEY,
        congress        INTEGER NOT NULL,
        bill_type       TEXT NOT NULL,
        number          INTEGER NOT NULL,
        title           TEXT NOT NULL,
        status          TEXT NOT NULL,
        introduced_date TEXT NOT NULL,
        sponsor_id      TEXT
    )",
    "CREATE TABLE IF NOT EXISTS spending_awards (
        award_id        TEXT PRIMARY KEY,
        recipient_name  TEXT NOT NULL,
        award_amount    REAL NOT NULL CHECK (award_amount >= 0),
        award_type      TEXT NOT NULL,
        awarding_agency TEXT NOT NULL,
        description     TEXT NOT NULL DEFAULT '',
        fiscal_year     INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS lobbying_filings (
        filing_id           TEXT PRIMARY KEY,
        client_name         TEXT NOT NULL,
        client_description  TEXT NOT NULL DEFAULT '',
        registrant_name     TEXT NOT NULL,
        registrant_address  TEXT NOT NULL DEFAULT '',
        lobbyist_name       TEXT NOT NULL,
        lobbyist_title      TEXT NOT NULL DEFAULT '',
        amount              REAL NOT NULL CHECK (amount >= 0),
        year                INTEGER NOT NULL,
        quarter             TEXT NOT NULL,
        report_type         TEXT NOT NULL,
        issue_areas         TEXT NOT NULL DEFAULT '',
        specific_issues     TEXT NOT NULL DEFAULT '',
        government_entities TEXT NOT NULL DEFAULT '',
        foreign_entities    TEXT NOT NULL DEFAULT '',
        posted_date         TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id            TEXT PRIMARY KEY,
        username      TEXT NOT NULL UNIQUE,
        email         TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        created_at    TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_legislators_state ON legislators (state)",
    "CREATE INDEX IF NOT EXISTS idx_bills_congress ON bills (congress)",
    "CREATE INDEX IF NOT EXISTS idx_spending_fiscal_year ON spending_awards (fiscal_year)",
    "CREATE INDEX IF NOT EXISTS idx_lobbying_year ON lobbying_filings (year)",
];

pub async fn init(pool: &SqlitePool) -> Result<(), DbError> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
