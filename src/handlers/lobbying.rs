use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::records::lobbying::{self, LobbyingFiling, LobbyingQuery};
use crate::AppState;

/// GET /lobbying - filtered lobbying filing search (client, lobbyist,
/// year, min_amount, keyword, limit).
pub async fn lobbying_get(
    State(state): State<AppState>,
    Query(params): Query<LobbyingQuery>,
) -> Result<Json<Vec<LobbyingFiling>>, ApiError> {
    let rows = lobbying::search(&state.pool, &params).await?;
    Ok(Json(rows))
}
