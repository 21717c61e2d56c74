use serde_json::Value;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, SqlitePool};

use crate::database::DbError;

use super::types::{OrderBy, Predicate, SortDirection, SqlQuery};

/// Per-collection query builder.
///
/// Accumulates typed predicates from loosely-typed optional parameters,
/// then renders them into a single bounded, ordered, parameterized SELECT.
/// Absent or blank parameters add no predicate; malformed numeric input is
/// coerced to "filter not applied" rather than raised. The result set is
/// always bounded by LIMIT and always carries a primary-key tiebreak so
/// that repeated identical queries return identical order.
pub struct Query {
    table: &'static str,
    tiebreak: &'static str,
    predicates: Vec<Predicate>,
    order: Vec<OrderBy>,
    limit: i64,
    default_limit: i64,
}

impl Query {
    pub fn new(table: &'static str, tiebreak: &'static str, default_limit: i64) -> Self {
        Self {
            table,
            tiebreak,
            predicates: vec![],
            order: vec![],
            limit: default_limit,
            default_limit,
        }
    }

    /// Case-normalized exact match for short enumeration codes
    /// (state, party, chamber, bill type, status).
    pub fn eq_fold(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = non_empty(value) {
            self.predicates.push(Predicate::EqFold {
                column,
                value: v.to_string(),
            });
        }
        self
    }

    /// Integer exact match (congress, year, fiscal year). Unparsable input
    /// skips the filter.
    pub fn eq_i64(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = non_empty(value) {
            if let Ok(n) = v.parse::<i64>() {
                self.predicates.push(Predicate::Eq {
                    column,
                    value: Value::from(n),
                });
            }
        }
        self
    }

    /// Case-insensitive substring match against one column.
    pub fn contains(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = non_empty(value) {
            self.predicates.push(Predicate::Contains {
                column,
                value: v.to_string(),
            });
        }
        self
    }

    /// Keyword fan-out: one term substring-matched against several
    /// free-text columns, ORed within the group.
    pub fn keyword(mut self, columns: &'static [&'static str], value: Option<&str>) -> Self {
        if let Some(v) = non_empty(value) {
            self.predicates.push(Predicate::ContainsAny {
                columns,
                value: v.to_string(),
            });
        }
        self
    }

    /// Threshold filter: column >= value. Unparsable or non-finite input
    /// skips the filter; it must never raise.
    pub fn min_f64(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = non_empty(value) {
            if let Ok(n) = v.parse::<f64>() {
                if let Some(num) = serde_json::Number::from_f64(n) {
                    self.predicates.push(Predicate::Gte {
                        column,
                        value: Value::Number(num),
                    });
                }
            }
        }
        self
    }

    pub fn order_by(mut self, column: &'static str, direction: SortDirection) -> Self {
        self.order.push(OrderBy { column, direction });
        self
    }

    /// Apply a client-supplied limit. Non-numeric or non-positive input
    /// falls back to the collection default; values above the configured
    /// cap are clamped. The LIMIT clause itself is never bypassed.
    pub fn limit(mut self, raw: Option<&str>) -> Self {
        let requested = non_empty(raw)
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(self.default_limit);

        let max_limit = crate::config::CONFIG.query.max_limit;
        self.limit = if requested > max_limit {
            tracing::warn!("limit {} exceeds max {}, capping to max", requested, max_limit);
            max_limit
        } else {
            requested
        };
        self
    }

    /// Render the accumulated predicates into one parameterized query.
    pub fn to_sql(&self) -> SqlQuery {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        for predicate in &self.predicates {
            match predicate {
                Predicate::EqFold { column, value } => {
                    params.push(Value::String(value.clone()));
                    conditions.push(format!("LOWER(\"{}\") = LOWER(?)", column));
                }
                Predicate::Eq { column, value } => {
                    params.push(value.clone());
                    conditions.push(format!("\"{}\" = ?", column));
                }
                Predicate::Contains { column, value } => {
                    params.push(Value::String(value.clone()));
                    conditions.push(like_condition(column));
                }
                Predicate::ContainsAny { columns, value } => {
                    let parts: Vec<String> = columns
                        .iter()
                        .map(|column| {
                            params.push(Value::String(value.clone()));
                            like_condition(column)
                        })
                        .collect();
                    conditions.push(format!("({})", parts.join(" OR ")));
                }
                Predicate::Gte { column, value } => {
                    params.push(value.clone());
                    conditions.push(format!("\"{}\" >= ?", column));
                }
            }
        }

        let where_clause = if conditions.is_empty() {
            "1=1".to_string()
        } else {
            conditions.join(" AND ")
        };

        let mut order_parts: Vec<String> = self
            .order
            .iter()
            .map(|o| format!("\"{}\" {}", o.column, o.direction.to_sql()))
            .collect();
        // Deterministic tiebreak: primary key ascending, always last
        order_parts.push(format!("\"{}\" ASC", self.tiebreak));

        let sql = format!(
            "SELECT * FROM \"{}\" WHERE {} ORDER BY {} LIMIT {}",
            self.table,
            where_clause,
            order_parts.join(", "),
            self.limit
        );

        SqlQuery { sql, params }
    }

    pub async fn fetch_all<T>(&self, pool: &SqlitePool) -> Result<Vec<T>, DbError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let rendered = self.to_sql();
        if crate::config::CONFIG.query.debug_logging {
            tracing::debug!(sql = %rendered.sql, "executing collection query");
        }

        let mut query = sqlx::query_as::<_, T>(&rendered.sql);
        for param in &rendered.params {
            query = bind_value(query, param);
        }
        Ok(query.fetch_all(pool).await?)
    }
}

fn like_condition(column: &str) -> String {
    // LOWER on both sides keeps the match case-insensitive regardless of
    // the connection's case_sensitive_like pragma
    format!("LOWER(\"{}\") LIKE '%' || LOWER(?) || '%'", column)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn bind_value<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Sqlite, O, SqliteArguments<'q>>,
    v: &'q Value,
) -> sqlx::query::QueryAs<'q, sqlx::Sqlite, O, SqliteArguments<'q>>
where
    O: for<'r> FromRow<'r, SqliteRow>,
{
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s.as_str()),
        // Predicates never produce arrays or objects
        _ => q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Query {
        Query::new("spending_awards", "award_id", 100)
    }

    #[test]
    fn empty_filter_matches_all_rows_bounded() {
        let q = base().to_sql();
        assert_eq!(
            q.sql,
            "SELECT * FROM \"spending_awards\" WHERE 1=1 ORDER BY \"award_id\" ASC LIMIT 100"
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn eq_fold_is_case_normalized_and_parameterized() {
        let q = base().eq_fold("award_type", Some("grant")).to_sql();
        assert!(q.sql.contains("LOWER(\"award_type\") = LOWER(?)"));
        assert_eq!(q.params, vec![Value::String("grant".to_string())]);
    }

    #[test]
    fn blank_parameters_add_no_predicate() {
        let q = base()
            .eq_fold("award_type", None)
            .eq_fold("awarding_agency", Some("  "))
            .contains("recipient_name", Some(""))
            .to_sql();
        assert!(q.sql.contains("WHERE 1=1"));
    }

    #[test]
    fn predicates_are_conjoined() {
        let q = base()
            .eq_fold("award_type", Some("grant"))
            .eq_i64("fiscal_year", Some("2024"))
            .to_sql();
        assert!(q.sql.contains("LOWER(\"award_type\") = LOWER(?) AND \"fiscal_year\" = ?"));
        assert_eq!(q.params.len(), 2);
    }

    #[test]
    fn keyword_fans_out_with_or_inside_the_group() {
        let q = base()
            .eq_i64("fiscal_year", Some("2024"))
            .keyword(&["recipient_name", "description"], Some("solar"))
            .to_sql();
        assert!(q.sql.contains(
            "(LOWER(\"recipient_name\") LIKE '%' || LOWER(?) || '%' OR \
             LOWER(\"description\") LIKE '%' || LOWER(?) || '%')"
        ));
        // the term binds once per fanned-out column
        assert_eq!(q.params.len(), 3);
    }

    #[test]
    fn unparsable_numeric_input_skips_the_filter() {
        let q = base()
            .eq_i64("fiscal_year", Some("twenty24"))
            .min_f64("award_amount", Some("lots"))
            .to_sql();
        assert!(q.sql.contains("WHERE 1=1"));
        assert!(q.params.is_empty());
    }

    #[test]
    fn min_amount_renders_gte() {
        let q = base().min_f64("award_amount", Some("200")).to_sql();
        assert!(q.sql.contains("\"award_amount\" >= ?"));
        assert_eq!(q.params.len(), 1);
    }

    #[test]
    fn limit_coercion_falls_back_to_default() {
        for raw in [None, Some("abc"), Some("-5"), Some("0"), Some("")] {
            let q = base().limit(raw).to_sql();
            assert!(q.sql.ends_with("LIMIT 100"), "raw={:?} sql={}", raw, q.sql);
        }
        let q = base().limit(Some("10")).to_sql();
        assert!(q.sql.ends_with("LIMIT 10"));
    }

    #[test]
    fn limit_is_capped_at_configured_max() {
        let max = crate::config::CONFIG.query.max_limit;
        let q = base().limit(Some("999999")).to_sql();
        assert!(q.sql.ends_with(&format!("LIMIT {}", max)));
    }

    #[test]
    fn ordering_always_ends_with_primary_key_tiebreak() {
        let q = base()
            .order_by("award_amount", SortDirection::Desc)
            .to_sql();
        assert!(q.sql.contains("ORDER BY \"award_amount\" DESC, \"award_id\" ASC"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let build = || {
            base()
                .eq_fold("awarding_agency", Some("NASA"))
                .min_f64("award_amount", Some("100"))
                .order_by("award_amount", SortDirection::Desc)
                .limit(Some("5"))
                .to_sql()
        };
        let a = build();
        let b = build();
        assert_eq!(a.sql, b.sql);
        assert_eq!(a.params, b.params);
    }
}
