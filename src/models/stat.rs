//! Stat records and stat type definitions.

use serde::{Deserialize, Serialize};

use super::{MatchId, PlayerId, StatRecordId, StatTypeId, TeamId};

/// How a stat's raw value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatValueType {
    Number,
    Percentage,
}

/// Which scope a stat type applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatGroup {
    Team,
    Player,
    All,
}

impl StatGroup {
    /// Whether stats of this group contribute to team-level aggregates.
    pub fn applies_to_team(&self) -> bool {
        matches!(self, StatGroup::Team | StatGroup::All)
    }

    /// Whether stats of this group contribute to player-level aggregates.
    pub fn applies_to_player(&self) -> bool {
        matches!(self, StatGroup::Player | StatGroup::All)
    }
}

/// Game phase a stat type is attached to, when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Scrum,
    Lineout,
    Kick,
    OpenPlay,
}

/// A named, typed category of statistic (e.g., "Essais").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatType {
    pub id: StatTypeId,
    pub name: String,
    pub value_type: StatValueType,
    pub group: StatGroup,
    pub game_phase: Option<GamePhase>,
}

impl StatType {
    pub fn new(id: StatTypeId, name: impl Into<String>, value_type: StatValueType, group: StatGroup) -> Self {
        Self {
            id,
            name: name.into(),
            value_type,
            group,
            game_phase: None,
        }
    }

    pub fn with_game_phase(mut self, phase: GamePhase) -> Self {
        self.game_phase = Some(phase);
        self
    }
}

/// Who a stat record belongs to.
///
/// Replaces the nullable player id of the relational schema: a record is
/// either a team-level stat or a player stat counted for that player's team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatScope {
    Team { team_id: TeamId },
    Player { team_id: TeamId, player_id: PlayerId },
}

impl StatScope {
    /// Team the record is counted for, regardless of scope.
    pub fn team_id(&self) -> TeamId {
        match self {
            StatScope::Team { team_id } => *team_id,
            StatScope::Player { team_id, .. } => *team_id,
        }
    }

    /// Player the record belongs to, if player-scoped.
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            StatScope::Team { .. } => None,
            StatScope::Player { player_id, .. } => Some(*player_id),
        }
    }
}

/// One atomic statistic row: a value for a stat type within a match,
/// scoped to a team or to a player of that team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatRecord {
    pub id: StatRecordId,
    pub match_id: MatchId,
    pub scope: StatScope,
    pub stat_type_id: StatTypeId,
    pub value: i64,
}

impl StatRecord {
    pub fn team(id: StatRecordId, match_id: MatchId, team_id: TeamId, stat_type_id: StatTypeId, value: i64) -> Self {
        Self {
            id,
            match_id,
            scope: StatScope::Team { team_id },
            stat_type_id,
            value,
        }
    }

    pub fn player(
        id: StatRecordId,
        match_id: MatchId,
        team_id: TeamId,
        player_id: PlayerId,
        stat_type_id: StatTypeId,
        value: i64,
    ) -> Self {
        Self {
            id,
            match_id,
            scope: StatScope::Player { team_id, player_id },
            stat_type_id,
            value,
        }
    }
}

/// Canonical stat type names the derived views key on.
pub mod stat_names {
    pub const ESSAIS: &str = "Essais";
    pub const PASSES_TENTEES: &str = "Passes tentées";
    pub const PASSES_REUSSIES: &str = "Passes réussies";
    pub const PLAQUAGES_TENTES: &str = "Plaquages tentés";
    pub const PLAQUAGES_REUSSIS: &str = "Plaquages réussis";
    pub const MELEES_GAGNEES: &str = "Mêlées gagnées";
    pub const MELEES_PERDUES: &str = "Mêlées perdues";
    pub const TOUCHES_GAGNEES: &str = "Touches gagnées";
    pub const TOUCHES_PERDUES: &str = "Touches perdues";
    pub const TOUCHES: &str = "Touches";
    pub const DROPS_TENTES: &str = "Drops tentés";
    pub const DROPS_REUSSIS: &str = "Drops réussis";
    pub const TRANSFORMATIONS_TENTEES: &str = "Transformations tentées";
    pub const TRANSFORMATIONS_REUSSIES: &str = "Transformations réussies";
    pub const PENALITES_TENTEES: &str = "Pénalités tentées";
    pub const PENALITES_REUSSIES: &str = "Pénalités réussies";
    pub const PENALITES_CONCEDEES: &str = "Pénalités concédées";

    /// Substring matched by lineout detail queries.
    pub const LINEOUT_FILTER: &str = "Touches";

    /// Stat type names kick detail rows attach to. "Pénalités concédées" must
    /// never match, so these are full attempt names rather than a substring.
    pub const KICK_ATTEMPT_NAMES: [&str; 3] =
        [DROPS_TENTES, TRANSFORMATIONS_TENTEES, PENALITES_TENTEES];
}
