use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::database::DbError;
use crate::filter::{Query, SortDirection};

/// Federal spending award. `award_amount` is a non-negative currency value.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SpendingAward {
    pub award_id: String,
    pub recipient_name: String,
    pub award_amount: f64,
    pub award_type: String,
    pub awarding_agency: String,
    pub description: String,
    pub fiscal_year: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpendingQuery {
    pub agency: Option<String>,
    pub recipient: Option<String>,
    pub min_amount: Option<String>,
    pub fiscal_year: Option<String>,
    pub keyword: Option<String>,
    pub limit: Option<String>,
}

pub const DEFAULT_LIMIT: i64 = 100;

const KEYWORD_COLUMNS: &[&str] = &["recipient_name", "awarding_agency", "description"];

pub fn build_query(params: &SpendingQuery) -> Query {
    Query::new("spending_awards", "award_id", DEFAULT_LIMIT)
        .contains("awarding_agency", params.agency.as_deref())
        .contains("recipient_name", params.recipient.as_deref())
        .min_f64("award_amount", params.min_amount.as_deref())
        .eq_i64("fiscal_year", params.fiscal_year.as_deref())
        .keyword(KEYWORD_COLUMNS, params.keyword.as_deref())
        .order_by("award_amount", SortDirection::Desc)
        .limit(params.limit.as_deref())
}

pub async fn search(
    pool: &SqlitePool,
    params: &SpendingQuery,
) -> Result<Vec<SpendingAward>, DbError> {
    build_query(params).fetch_all(pool).await
}
