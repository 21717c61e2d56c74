use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::database::DbError;
use crate::filter::{Query, SortDirection};

/// Legislative chamber. Stored lowercase; matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Chamber {
    Lower,
    Upper,
    Executive,
    Judicial,
    State,
    Independent,
}

/// One legislator row. Created or replaced wholesale by the bulk loader,
/// keyed on `bioguide_id`; never partially updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Legislator {
    pub bioguide_id: String,
    pub first_name: String,
    pub last_name: String,
    pub party: String,
    pub state: String,
    pub chamber: Chamber,
    pub district: Option<String>,
    pub in_office: bool,
    pub phone: String,
}

/// Recognized query parameters for GET /legislators. Everything optional;
/// unknown parameters are ignored by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct LegislatorQuery {
    pub state: Option<String>,
    pub party: Option<String>,
    pub chamber: Option<String>,
    pub keyword: Option<String>,
    pub limit: Option<String>,
}

pub const DEFAULT_LIMIT: i64 = 100;

const KEYWORD_COLUMNS: &[&str] = &["first_name", "last_name"];

pub fn build_query(params: &LegislatorQuery) -> Query {
    Query::new("legislators", "bioguide_id", DEFAULT_LIMIT)
        .eq_fold("state", params.state.as_deref())
        .eq_fold("party", params.party.as_deref())
        .eq_fold("chamber", params.chamber.as_deref())
        .keyword(KEYWORD_COLUMNS, params.keyword.as_deref())
        .order_by("last_name", SortDirection::Asc)
        .order_by("first_name", SortDirection::Asc)
        .limit(params.limit.as_deref())
}

pub async fn search(
    pool: &SqlitePool,
    params: &LegislatorQuery,
) -> Result<Vec<Legislator>, DbError> {
    build_query(params).fetch_all(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_recognized_parameters_to_columns() {
        let params = LegislatorQuery {
            state: Some("CA".into()),
            party: Some("D".into()),
            chamber: Some("upper".into()),
            keyword: None,
            limit: None,
        };
        let q = build_query(&params).to_sql();
        assert!(q.sql.contains("LOWER(\"state\") = LOWER(?)"));
        assert!(q.sql.contains("LOWER(\"party\") = LOWER(?)"));
        assert!(q.sql.contains("LOWER(\"chamber\") = LOWER(?)"));
        assert_eq!(q.params.len(), 3);
    }

    #[test]
    fn orders_by_family_then_given_name() {
        let q = build_query(&LegislatorQuery::default()).to_sql();
        assert!(q.sql.contains(
            "ORDER BY \"last_name\" ASC, \"first_name\" ASC, \"bioguide_id\" ASC"
        ));
        assert!(q.sql.ends_with(&format!("LIMIT {}", DEFAULT_LIMIT)));
    }

    #[test]
    fn keyword_searches_both_name_columns() {
        let params = LegislatorQuery {
            keyword: Some("garcia".into()),
            ..Default::default()
        };
        let q = build_query(&params).to_sql();
        assert!(q.sql.contains("\"first_name\""));
        assert!(q.sql.contains("\"last_name\""));
        assert!(q.sql.contains(" OR "));
    }
}
