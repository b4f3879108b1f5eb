use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{PlayerId, PlayerSummary, RadarAxis};
use crate::views;

use super::requester_club;

/// `GET /api/players/:id/summary` — season totals and position-dependent
/// percentage stats for one player.
pub async fn player_summary(
    State(state): State<AppState>,
    Path(player_id): Path<PlayerId>,
    headers: HeaderMap,
) -> Result<Json<PlayerSummary>, ApiError> {
    let club = requester_club(&headers)?;
    let summary = views::player_summary(&state.store, club, player_id)?;
    Ok(Json(summary))
}

/// `GET /api/players/:id/averages` — radar axes comparing per-match player
/// averages against the team's. `null` when the player has no finished
/// matches this season.
pub async fn player_averages(
    State(state): State<AppState>,
    Path(player_id): Path<PlayerId>,
    headers: HeaderMap,
) -> Result<Json<Option<Vec<RadarAxis>>>, ApiError> {
    let club = requester_club(&headers)?;
    let axes = views::player_radar(&state.store, club, player_id)?;
    Ok(Json(axes))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::models::{Club, Player, Position, Season, Team};
    use crate::storage::{EntityType, JsonlWriter, StorageConfig};
    use crate::store::ClubStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    const CLUB: i64 = 1;
    const OTHER_CLUB: i64 = 2;
    const PLAYER: i64 = 5;

    fn write<T: serde::Serialize>(dir: &std::path::Path, entity: EntityType, items: &[T]) {
        JsonlWriter::<T>::for_entity(&StorageConfig::new(dir.to_path_buf()), entity)
            .append_batch(items)
            .unwrap();
    }

    fn test_state(dir: &std::path::Path) -> AppState {
        AppState {
            store: Arc::new(ClubStore::new(StorageConfig::new(dir.to_path_buf()))),
        }
    }

    async fn get_as_club(
        app: axum::Router,
        uri: &str,
        club: i64,
    ) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("x-club-id", club.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn setup(dir: &std::path::Path) {
        write(
            dir,
            EntityType::Club,
            &[Club {
                id: CLUB,
                name: "RC Toulon".to_string(),
                logo: None,
            }],
        );
        write(
            dir,
            EntityType::Team,
            &[Team {
                id: 10,
                club_id: CLUB,
                name: "Première".to_string(),
            }],
        );
        write(
            dir,
            EntityType::Player,
            &[Player {
                id: PLAYER,
                club_id: CLUB,
                team_id: Some(10),
                first_name: "Antoine".to_string(),
                last_name: "Dupont".to_string(),
                position: Some(Position::ScrumHalf),
            }],
        );
        write(
            dir,
            EntityType::Season,
            &[Season {
                id: 1,
                name: "2025-2026".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
                current: true,
            }],
        );
    }

    #[tokio::test]
    async fn test_summary_no_matches_is_empty_shape() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());

        let app = build_router(test_state(tmp.path()));
        let (status, json) =
            get_as_club(app, &format!("/api/players/{}/summary", PLAYER), CLUB).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["matchesPlayed"], 0);
        assert!(json["globalStats"].as_array().unwrap().is_empty());
        assert!(json["percentageStats"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summary_cross_club_is_forbidden() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());

        let app = build_router(test_state(tmp.path()));
        let (status, json) =
            get_as_club(app, &format!("/api/players/{}/summary", PLAYER), OTHER_CLUB).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"]["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_summary_unknown_player_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());

        let app = build_router(test_state(tmp.path()));
        let (status, json) = get_as_club(app, "/api/players/999/summary", CLUB).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_summary_missing_club_header_is_bad_request() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());

        let app = build_router(test_state(tmp.path()));
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/players/{}/summary", PLAYER))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_averages_no_matches_is_null() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());

        let app = build_router(test_state(tmp.path()));
        let (status, json) =
            get_as_club(app, &format!("/api/players/{}/averages", PLAYER), CLUB).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json.is_null());
    }
}
