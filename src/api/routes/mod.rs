//! Route handlers, grouped by resource.

pub mod matches;
pub mod players;
pub mod teams;

use axum::http::HeaderMap;

use crate::models::{ClubId, MatchUlid};

use super::ApiError;

/// Parse a public match identifier from the path.
pub(crate) fn parse_ulid(raw: &str) -> Result<MatchUlid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid match identifier: {raw}")))
}

/// Requester's club, as injected by the authentication layer upstream.
pub(crate) fn requester_club(headers: &HeaderMap) -> Result<ClubId, ApiError> {
    headers
        .get("x-club-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| ApiError::BadRequest("missing or invalid x-club-id header".to_string()))
}
