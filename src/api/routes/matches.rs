use axum::extract::{Path, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{MatchKickStats, MatchLineoutStats, MatchStatBar};
use crate::views;

use super::parse_ulid;

/// `GET /api/matches/:ulid/stats` — home vs away bars per tracked stat type.
pub async fn match_stats(
    State(state): State<AppState>,
    Path(ulid): Path<String>,
) -> Result<Json<Vec<MatchStatBar>>, ApiError> {
    let ulid = parse_ulid(&ulid)?;
    let bars = views::match_stat_bars(&state.store, &ulid)?;
    Ok(Json(bars))
}

/// `GET /api/matches/:ulid/lineouts` — lineout breakdown for both teams.
pub async fn match_lineouts(
    State(state): State<AppState>,
    Path(ulid): Path<String>,
) -> Result<Json<MatchLineoutStats>, ApiError> {
    let ulid = parse_ulid(&ulid)?;
    let stats = views::match_lineout_stats(&state.store, &ulid)?;
    Ok(Json(stats))
}

/// `GET /api/matches/:ulid/kicks` — kick breakdown for both teams.
pub async fn match_kicks(
    State(state): State<AppState>,
    Path(ulid): Path<String>,
) -> Result<Json<MatchKickStats>, ApiError> {
    let ulid = parse_ulid(&ulid)?;
    let stats = views::match_kick_stats(&state.store, &ulid)?;
    Ok(Json(stats))
}
