use axum::extract::{Path, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{TeamId, TeamSeasonRecord};
use crate::views;

/// `GET /api/teams/:id/record` — win/draw/loss tally for the current season.
pub async fn team_record(
    State(state): State<AppState>,
    Path(team_id): Path<TeamId>,
) -> Result<Json<TeamSeasonRecord>, ApiError> {
    let record = views::team_season_record(&state.store, team_id)?;
    Ok(Json(record))
}
