use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::database::DbError;
use crate::filter::{Query, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum BillStatus {
    Introduced,
    InCommittee,
    PassedHouse,
    PassedSenate,
    Enacted,
    Vetoed,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Introduced => "introduced",
            BillStatus::InCommittee => "in_committee",
            BillStatus::PassedHouse => "passed_house",
            BillStatus::PassedSenate => "passed_senate",
            BillStatus::Enacted => "enacted",
            BillStatus::Vetoed => "vetoed",
        }
    }

    /// Terminal statuses are excluded from the "bills in progress" summary
    /// aggregate.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BillStatus::Enacted | BillStatus::Vetoed)
    }
}

/// `bill_id` is derived from type + number + congress (e.g. "hr1234-119").
/// `sponsor_id` is a soft link to a legislator identity, never validated or
/// joined at the query layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bill {
    pub bill_id: String,
    pub congress: i64,
    pub bill_type: String,
    pub number: i64,
    pub title: String,
    pub status: BillStatus,
    pub introduced_date: String,
    pub sponsor_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BillQuery {
    pub bill_type: Option<String>,
    pub congress: Option<String>,
    pub status: Option<String>,
    pub keyword: Option<String>,
    pub limit: Option<String>,
}

pub const DEFAULT_LIMIT: i64 = 50;

const KEYWORD_COLUMNS: &[&str] = &["title"];

pub fn build_query(params: &BillQuery) -> Query {
    Query::new("bills", "bill_id", DEFAULT_LIMIT)
        .eq_fold("bill_type", params.bill_type.as_deref())
        .eq_i64("congress", params.congress.as_deref())
        .eq_fold("status", params.status.as_deref())
        .keyword(KEYWORD_COLUMNS, params.keyword.as_deref())
        .order_by("introduced_date", SortDirection::Desc)
        .limit(params.limit.as_deref())
}

pub async fn search(pool: &SqlitePool, params: &BillQuery) -> Result<Vec<Bill>, DbError> {
    build_query(params).fetch_all(pool).await
}
