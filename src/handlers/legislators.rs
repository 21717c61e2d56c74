use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::records::legislator::{self, Legislator, LegislatorQuery};
use crate::AppState;

/// GET /legislators - filtered legislator search.
///
/// Recognized parameters: state, party, chamber, keyword, limit. Unknown
/// parameters are ignored. Zero matches is an empty array, not an error.
pub async fn legislators_get(
    State(state): State<AppState>,
    Query(params): Query<LegislatorQuery>,
) -> Result<Json<Vec<Legislator>>, ApiError> {
    let rows = legislator::search(&state.pool, &params).await?;
    Ok(Json(rows))
}
