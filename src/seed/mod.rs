//! Bulk loaders for the static record sources.
//!
//! Each loader takes a target store handle and upserts its collection's
//! records keyed on the primary key (last write wins), so a reseed is
//! idempotent per row. Invoked once at process start and on demand via
//! POST /admin/reseed. Loaders only touch their own collection, so
//! concurrent reseeds of different sources may interleave; the store
//! serializes the actual writes.

pub mod data;

use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::database::DbError;
use crate::records::{Bill, Legislator, LobbyingFiling, SpendingAward};

/// Named data sources accepted by the reseed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Legislators,
    Bills,
    Spending,
    Lobbying,
    All,
}

impl SeedSource {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "legislators" => Some(Self::Legislators),
            "bills" => Some(Self::Bills),
            "spending" => Some(Self::Spending),
            "lobbying" => Some(Self::Lobbying),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Run the loader(s) for a source, returning (source, rows) per loader.
pub async fn load(
    pool: &SqlitePool,
    source: SeedSource,
) -> Result<Vec<(&'static str, u64)>, DbError> {
    let mut counts = Vec::new();
    match source {
        SeedSource::Legislators => counts.push(("legislators", load_legislators(pool).await?)),
        SeedSource::Bills => counts.push(("bills", load_bills(pool).await?)),
        SeedSource::Spending => counts.push(("spending", load_spending(pool).await?)),
        SeedSource::Lobbying => counts.push(("lobbying", load_lobbying(pool).await?)),
        SeedSource::All => {
            counts.push(("legislators", load_legislators(pool).await?));
            counts.push(("bills", load_bills(pool).await?));
            counts.push(("spending", load_spending(pool).await?));
            counts.push(("lobbying", load_lobbying(pool).await?));
        }
    }
    Ok(counts)
}

pub async fn load_legislators(pool: &SqlitePool) -> Result<u64, DbError> {
    let rows = data::legislators();
    for row in &rows {
        upsert_legislator(pool, row).await?;
    }
    info!("seeded {} legislators", rows.len());
    Ok(rows.len() as u64)
}

pub async fn load_bills(pool: &SqlitePool) -> Result<u64, DbError> {
    let rows = data::bills();
    for row in &rows {
        upsert_bill(pool, row).await?;
    }
    info!("seeded {} bills", rows.len());
    Ok(rows.len() as u64)
}

pub async fn load_spending(pool: &SqlitePool) -> Result<u64, DbError> {
    let rows = data::spending_awards();
    for row in &rows {
        upsert_spending_award(pool, row).await?;
    }
    info!("seeded {} spending awards", rows.len());
    Ok(rows.len() as u64)
}

pub async fn load_lobbying(pool: &SqlitePool) -> Result<u64, DbError> {
    let rows = data::lobbying_filings();
    for row in &rows {
        upsert_lobbying_filing(pool, row).await?;
    }
    info!("seeded {} lobbying filings", rows.len());
    Ok(rows.len() as u64)
}

pub async fn upsert_legislator(pool: &SqlitePool, row: &Legislator) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO legislators
             (bioguide_id, first_name, last_name, party, state, chamber, district, in_office, phone)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(bioguide_id) DO UPDATE SET
             first_name = excluded.first_name,
             last_name  = excluded.last_name,
             party      = excluded.party,
             state      = excluded.state,
             chamber    = excluded.chamber,
             district   = excluded.district,
             in_office  = excluded.in_office,
             phone      = excluded.phone",
    )
    .bind(&row.bioguide_id)
    .bind(&row.first_name)
    .bind(&row.last_name)
    .bind(&row.party)
    .bind(&row.state)
    .bind(row.chamber)
    .bind(&row.district)
    .bind(row.in_office)
    .bind(&row.phone)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn upsert_bill(pool: &SqlitePool, row: &Bill) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO bills
             (bill_id, congress, bill_type, number, title, status, introduced_date, sponsor_id)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(bill_id) DO UPDATE SET
             congress        = excluded.congress,
             bill_type       = excluded.bill_type,
             number          = excluded.number,
             title           = excluded.title,
             status          = excluded.status,
             introduced_date = excluded.introduced_date,
             sponsor_id      = excluded.sponsor_id",
    )
    .bind(&row.bill_id)
    .bind(row.congress)
    .bind(&row.bill_type)
    .bind(row.number)
    .bind(&row.title)
    .bind(row.status)
    .bind(&row.introduced_date)
    .bind(&row.sponsor_id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn upsert_spending_award(pool: &SqlitePool, row: &SpendingAward) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO spending_awards
             (award_id, recipient_name, award_amount, award_type, awarding_agency, description, fiscal_year)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(award_id) DO UPDATE SET
             recipient_name  = excluded.recipient_name,
             award_amount    = excluded.award_amount,
             award_type      = excluded.award_type,
             awarding_agency = excluded.awarding_agency,
             description     = excluded.description,
             fiscal_year     = excluded.fiscal_year",
    )
    .bind(&row.award_id)
    .bind(&row.recipient_name)
    .bind(row.award_amount)
    .bind(&row.award_type)
    .bind(&row.awarding_agency)
    .bind(&row.description)
    .bind(row.fiscal_year)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn upsert_lobbying_filing(pool: &SqlitePool, row: &LobbyingFiling) -> Result<(), DbError> {
    // Source rows without an identity get a generated surrogate
    let filing_id = if row.filing_id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        row.filing_id.clone()
    };
    sqlx::query(
        "INSERT INTO lobbying_filings
             (filing_id, client_name, client_description, registrant_name, registrant_address,
              lobbyist_name, lobbyist_title, amount, year, quarter, report_type,
              issue_areas, specific_issues, government_entities, foreign_entities, posted_date)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(filing_id) DO UPDATE SET
             client_name         = excluded.client_name,
             client_description  = excluded.client_description,
             registrant_name     = excluded.registrant_name,
             registrant_address  = excluded.registrant_address,
             lobbyist_name       = excluded.lobbyist_name,
             lobbyist_title      = excluded.lobbyist_title,
             amount              = excluded.amount,
             year                = excluded.year,
             quarter             = excluded.quarter,
             report_type         = excluded.report_type,
             issue_areas         = excluded.issue_areas,
             specific_issues     = excluded.specific_issues,
             government_entities = excluded.government_entities,
             foreign_entities    = excluded.foreign_entities,
             posted_date         = excluded.posted_date",
    )
    .bind(filing_id)
    .bind(&row.client_name)
    .bind(&row.client_description)
    .bind(&row.registrant_name)
    .bind(&row.registrant_address)
    .bind(&row.lobbyist_name)
    .bind(&row.lobbyist_title)
    .bind(row.amount)
    .bind(row.year)
    .bind(&row.quarter)
    .bind(&row.report_type)
    .bind(&row.issue_areas)
    .bind(&row.specific_issues)
    .bind(&row.government_entities)
    .bind(&row.foreign_entities)
    .bind(&row.posted_date)
    .execute(pool)
    .await?;
    Ok(())
}
