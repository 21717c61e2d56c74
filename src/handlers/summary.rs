use axum::extract::State;
use axum::Json;
use serde_json::{Map, Value};

use crate::records::BillStatus;
use crate::AppState;

/// Fiscal year summed by the spending aggregate.
pub const SUMMARY_FISCAL_YEAR: i64 = 2024;

/// GET /summary - aggregate counts across the collections.
///
/// The three sub-aggregates run independently. A failed sub-query is
/// logged and its key omitted; the others still report, and the response
/// is always 200. One failure never blocks or hangs the rest.
pub async fn summary_get(State(state): State<AppState>) -> Json<Value> {
    let pool = &state.pool;
    let mut out = Map::new();

    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM legislators WHERE in_office = 1")
        .fetch_one(pool)
        .await
    {
        Ok(n) => {
            out.insert("legislators_in_office".to_string(), Value::from(n));
        }
        Err(e) => tracing::error!("summary: legislator count failed: {}", e),
    }

    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bills WHERE status NOT IN (?, ?)")
        .bind(BillStatus::Enacted.as_str())
        .bind(BillStatus::Vetoed.as_str())
        .fetch_one(pool)
        .await
    {
        Ok(n) => {
            out.insert("bills_in_progress".to_string(), Value::from(n));
        }
        Err(e) => tracing::error!("summary: bill count failed: {}", e),
    }

    match sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(award_amount), 0.0) FROM spending_awards WHERE fiscal_year = ?",
    )
    .bind(SUMMARY_FISCAL_YEAR)
    .fetch_one(pool)
    .await
    {
        Ok(total) => {
            out.insert("spending_fiscal_year".to_string(), Value::from(SUMMARY_FISCAL_YEAR));
            out.insert("spending_total".to_string(), Value::from(total));
        }
        Err(e) => tracing::error!("summary: spending total failed: {}", e),
    }

    Json(Value::Object(out))
}
