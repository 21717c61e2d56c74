use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::records::spending::{self, SpendingAward, SpendingQuery};
use crate::AppState;

/// GET /spending - filtered spending award search (agency, recipient,
/// min_amount, fiscal_year, keyword, limit).
pub async fn spending_get(
    State(state): State<AppState>,
    Query(params): Query<SpendingQuery>,
) -> Result<Json<Vec<SpendingAward>>, ApiError> {
    let rows = spending::search(&state.pool, &params).await?;
    Ok(Json(rows))
}
