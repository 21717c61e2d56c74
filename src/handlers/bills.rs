use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::records::bill::{self, Bill, BillQuery};
use crate::AppState;

/// GET /bills - filtered bill search (bill_type, congress, status,
/// keyword, limit).
pub async fn bills_get(
    State(state): State<AppState>,
    Query(params): Query<BillQuery>,
) -> Result<Json<Vec<Bill>>, ApiError> {
    let rows = bill::search(&state.pool, &params).await?;
    Ok(Json(rows))
}
