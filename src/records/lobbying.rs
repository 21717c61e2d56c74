use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::database::DbError;
use crate::filter::{Query, SortDirection};

/// Quarterly lobbying disclosure filing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LobbyingFiling {
    pub filing_id: String,
    pub client_name: String,
    pub client_description: String,
    pub registrant_name: String,
    pub registrant_address: String,
    pub lobbyist_name: String,
    pub lobbyist_title: String,
    pub amount: f64,
    pub year: i64,
    pub quarter: String,
    pub report_type: String,
    pub issue_areas: String,
    pub specific_issues: String,
    pub government_entities: String,
    pub foreign_entities: String,
    pub posted_date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LobbyingQuery {
    pub client: Option<String>,
    pub lobbyist: Option<String>,
    pub year: Option<String>,
    pub min_amount: Option<String>,
    pub keyword: Option<String>,
    pub limit: Option<String>,
}

pub const DEFAULT_LIMIT: i64 = 100;

const KEYWORD_COLUMNS: &[&str] = &[
    "client_name",
    "registrant_name",
    "lobbyist_name",
    "issue_areas",
    "specific_issues",
];

pub fn build_query(params: &LobbyingQuery) -> Query {
    Query::new("lobbying_filings", "filing_id", DEFAULT_LIMIT)
        .contains("client_name", params.client.as_deref())
        .contains("lobbyist_name", params.lobbyist.as_deref())
        .eq_i64("year", params.year.as_deref())
        .min_f64("amount", params.min_amount.as_deref())
        .keyword(KEYWORD_COLUMNS, params.keyword.as_deref())
        .order_by("amount", SortDirection::Desc)
        .limit(params.limit.as_deref())
}

pub async fn search(
    pool: &SqlitePool,
    params: &LobbyingQuery,
) -> Result<Vec<LobbyingFiling>, DbError> {
    build_query(params).fetch_all(pool).await
}
