//! Raw stat accessor.
//!
//! `ClubStore` turns (match | player | team, filter) requests into the raw
//! rows the aggregation engine reduces, plus the id resolution views need:
//! match by public ULID, current season, lineup membership. Everything is
//! read-only; rows are fetched per scope and reduced in-process.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{
    Club, ClubId, KickDetail, Lineup, LineoutDetail, Match, MatchId, MatchUlid, Player, PlayerId,
    Season, SeasonId, StatRecord, StatScope, StatType, StatTypeId, Team, TeamId,
};
use crate::models::stat_names;
use crate::storage::{EntityType, JsonlReader, StorageConfig, StorageError};

/// Query failures, per the core's error taxonomy. Empty data is never an
/// error: aggregate queries over unknown ids return empty row sets, and only
/// single-entity lookups produce `NotFound`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("access denied")]
    Forbidden,

    #[error("storage read failed: {0}")]
    Storage(#[from] StorageError),
}

/// Read-only queries over the club's persisted records.
#[derive(Debug, Clone)]
pub struct ClubStore {
    storage: StorageConfig,
}

impl ClubStore {
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }

    fn read<T: serde::de::DeserializeOwned>(
        &self,
        entity: EntityType,
    ) -> Result<Vec<T>, StoreError> {
        Ok(JsonlReader::<T>::for_entity(&self.storage, entity).read_all()?)
    }

    // ── Entity resolution ───────────────────────────────────────

    /// Resolve a match from its public identifier.
    pub fn match_by_public_id(&self, public_id: &MatchUlid) -> Result<Match, StoreError> {
        self.read::<Match>(EntityType::Match)?
            .into_iter()
            .find(|m| &m.public_id == public_id)
            .ok_or(StoreError::NotFound("match"))
    }

    pub fn player(&self, player_id: PlayerId) -> Result<Player, StoreError> {
        self.read::<Player>(EntityType::Player)?
            .into_iter()
            .find(|p| p.id == player_id)
            .ok_or(StoreError::NotFound("player"))
    }

    pub fn team(&self, team_id: TeamId) -> Result<Team, StoreError> {
        self.read::<Team>(EntityType::Team)?
            .into_iter()
            .find(|t| t.id == team_id)
            .ok_or(StoreError::NotFound("team"))
    }

    pub fn club(&self, club_id: ClubId) -> Result<Club, StoreError> {
        self.read::<Club>(EntityType::Club)?
            .into_iter()
            .find(|c| c.id == club_id)
            .ok_or(StoreError::NotFound("club"))
    }

    /// The season flagged as current, if one exists.
    pub fn current_season(&self) -> Result<Option<Season>, StoreError> {
        Ok(self
            .read::<Season>(EntityType::Season)?
            .into_iter()
            .find(|s| s.current))
    }

    pub fn stat_types(&self) -> Result<Vec<StatType>, StoreError> {
        self.read(EntityType::StatType)
    }

    /// Stat types keyed by id.
    pub fn stat_types_by_id(&self) -> Result<HashMap<StatTypeId, StatType>, StoreError> {
        Ok(self
            .stat_types()?
            .into_iter()
            .map(|st| (st.id, st))
            .collect())
    }

    /// Players keyed by id, for resolving detail row names.
    pub fn players_by_id(&self) -> Result<HashMap<PlayerId, Player>, StoreError> {
        Ok(self
            .read::<Player>(EntityType::Player)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect())
    }

    /// Finished matches of a season. Only these count toward aggregates.
    pub fn finished_matches_in_season(&self, season_id: SeasonId) -> Result<Vec<Match>, StoreError> {
        Ok(self
            .read::<Match>(EntityType::Match)?
            .into_iter()
            .filter(|m| m.season_id == season_id && m.is_finished())
            .collect())
    }

    /// Ids of the given matches where the player appears in a submitted
    /// lineup. Unknown player ids simply match nothing.
    pub fn matches_played_by(
        &self,
        player_id: PlayerId,
        matches: &[Match],
    ) -> Result<Vec<MatchId>, StoreError> {
        let lineups = self.read::<Lineup>(EntityType::Lineup)?;
        Ok(matches
            .iter()
            .filter(|m| {
                lineups
                    .iter()
                    .any(|l| l.match_id == m.id && l.contains(player_id))
            })
            .map(|m| m.id)
            .collect())
    }

    /// Ids of the given matches involving a team.
    pub fn team_match_ids(&self, team_id: TeamId, matches: &[Match]) -> Vec<MatchId> {
        matches
            .iter()
            .filter(|m| m.involves(team_id))
            .map(|m| m.id)
            .collect()
    }

    // ── Stat row queries ────────────────────────────────────────

    /// Team-scoped rows for one team in one match, restricted to the match's
    /// tracked stat types. A group=All stat may carry both a team-level row
    /// and per-player rows for the same match; only the team-level row is the
    /// team total, so player-scoped rows are excluded here.
    pub fn team_stats(&self, m: &Match, team_id: TeamId) -> Result<Vec<StatRecord>, StoreError> {
        let types = self.stat_types_by_id()?;
        Ok(self
            .read::<StatRecord>(EntityType::StatRecord)?
            .into_iter()
            .filter(|r| {
                r.match_id == m.id
                    && matches!(r.scope, StatScope::Team { team_id: t } if t == team_id)
                    && m.tracked_stat_types.contains(&r.stat_type_id)
                    && types
                        .get(&r.stat_type_id)
                        .is_some_and(|st| st.group.applies_to_team())
            })
            .collect())
    }

    /// Player-applicable rows for one player across a set of matches.
    pub fn player_stats(
        &self,
        player_id: PlayerId,
        match_ids: &[MatchId],
    ) -> Result<Vec<StatRecord>, StoreError> {
        let types = self.stat_types_by_id()?;
        Ok(self
            .read::<StatRecord>(EntityType::StatRecord)?
            .into_iter()
            .filter(|r| {
                r.scope.player_id() == Some(player_id)
                    && match_ids.contains(&r.match_id)
                    && types
                        .get(&r.stat_type_id)
                        .is_some_and(|st| st.group.applies_to_player())
            })
            .collect())
    }

    /// Player-recorded rows counted for a team across a set of matches. Team
    /// radar averages compare player events, so a coexisting team-level
    /// summary row for the same stat type must not be counted on top of the
    /// per-player rows.
    pub fn team_player_stats(
        &self,
        team_id: TeamId,
        match_ids: &[MatchId],
    ) -> Result<Vec<StatRecord>, StoreError> {
        Ok(self
            .read::<StatRecord>(EntityType::StatRecord)?
            .into_iter()
            .filter(|r| {
                matches!(r.scope, StatScope::Player { team_id: t, .. } if t == team_id)
                    && match_ids.contains(&r.match_id)
            })
            .collect())
    }

    /// Lineout detail rows for one team in one match, joined to their stat
    /// records and ordered ascending by record id (chronological).
    pub fn lineout_detail_rows(
        &self,
        match_id: MatchId,
        team_id: TeamId,
    ) -> Result<Vec<(StatRecord, LineoutDetail)>, StoreError> {
        let records = self.detail_bearing_records(match_id, team_id, |name| {
            name.contains(stat_names::LINEOUT_FILTER)
        })?;
        let details = self.read::<LineoutDetail>(EntityType::LineoutDetail)?;
        Ok(Self::join_details(records, details, |d| d.stat_id))
    }

    /// Kick detail rows for one team in one match, same ordering contract.
    pub fn kick_detail_rows(
        &self,
        match_id: MatchId,
        team_id: TeamId,
    ) -> Result<Vec<(StatRecord, KickDetail)>, StoreError> {
        let records = self.detail_bearing_records(match_id, team_id, |name| {
            stat_names::KICK_ATTEMPT_NAMES.contains(&name)
        })?;
        let details = self.read::<KickDetail>(EntityType::KickDetail)?;
        Ok(Self::join_details(records, details, |d| d.stat_id))
    }

    fn detail_bearing_records(
        &self,
        match_id: MatchId,
        team_id: TeamId,
        name_filter: impl Fn(&str) -> bool,
    ) -> Result<Vec<StatRecord>, StoreError> {
        let types = self.stat_types_by_id()?;
        Ok(self
            .read::<StatRecord>(EntityType::StatRecord)?
            .into_iter()
            .filter(|r| {
                r.match_id == match_id
                    && r.scope.team_id() == team_id
                    && types
                        .get(&r.stat_type_id)
                        .is_some_and(|st| name_filter(&st.name))
            })
            .collect())
    }

    /// Inner join of stat records with their one-to-one detail rows,
    /// ascending by record id. Records without a detail row drop out.
    fn join_details<D>(
        records: Vec<StatRecord>,
        details: Vec<D>,
        detail_key: impl Fn(&D) -> i64,
    ) -> Vec<(StatRecord, D)> {
        let mut by_stat: HashMap<i64, D> = details
            .into_iter()
            .map(|d| (detail_key(&d), d))
            .collect();

        let mut joined: Vec<(StatRecord, D)> = records
            .into_iter()
            .filter_map(|r| by_stat.remove(&r.id).map(|d| (r, d)))
            .collect();
        joined.sort_by_key(|(r, _)| r.id);
        joined
    }
}
