//! Seasons, matches and lineups.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MatchId, MatchUlid, PlayerId, SeasonId, StatTypeId, TeamId};

/// A named competitive period (e.g., "2025-2026").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Exactly one season should be current; summaries scope to it.
    #[serde(default)]
    pub current: bool,
}

/// Match lifecycle. Only `Finish` matches count toward season aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finish,
}

/// Recorded final result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "Home_Win")]
    HomeWin,
    #[serde(rename = "Away_Win")]
    AwayWin,
    Draw,
}

/// A match between two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Stable public identifier; the only id exposed outside the API.
    pub public_id: MatchUlid,
    pub season_id: SeasonId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub date: NaiveDate,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
    /// Stat types tracked for this match, fixed at creation time. Stats
    /// outside this allow-list are never aggregated for the match.
    pub tracked_stat_types: Vec<StatTypeId>,
}

impl Match {
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finish
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn is_home(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id
    }
}

/// The players a team submitted for a match. A player "played" a match iff
/// they appear in a submitted lineup for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lineup {
    pub match_id: MatchId,
    pub team_id: TeamId,
    pub player_ids: Vec<PlayerId>,
    pub submitted: bool,
}

impl Lineup {
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.submitted && self.player_ids.contains(&player_id)
    }
}
