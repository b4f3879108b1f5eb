//! Clubs, teams and players.

use serde::{Deserialize, Serialize};

use super::stat_names;
use super::{ClubId, PlayerId, TeamId};

/// A rugby club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    /// URL of the club crest, when one has been uploaded.
    pub logo: Option<String>,
}

/// A team fielded by a club (e.g., first XV, reserves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub club_id: ClubId,
    pub name: String,
}

/// On-field position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Prop,
    Hooker,
    Lock,
    Flanker,
    Number8,
    ScrumHalf,
    FlyHalf,
    Center,
    Wing,
    FullBack,
}

impl Position {
    pub fn category(&self) -> PositionCategory {
        match self {
            Position::Prop
            | Position::Hooker
            | Position::Lock
            | Position::Flanker
            | Position::Number8 => PositionCategory::Forward,
            Position::ScrumHalf
            | Position::FlyHalf
            | Position::Center
            | Position::Wing
            | Position::FullBack => PositionCategory::Back,
        }
    }
}

/// Position family, driving which percentage stats a player summary shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionCategory {
    Forward,
    Back,
    Unknown,
}

/// A ratio stat computed as sum(successful) / sum(attempted).
///
/// `attempted` may span several stat types: won/lost pairs define attempts as
/// won + lost, and the combined kicking ratio sums all three kick types.
#[derive(Debug, Clone, Copy)]
pub struct PercentageSpec {
    pub name: &'static str,
    pub successful: &'static [&'static str],
    pub attempted: &'static [&'static str],
}

const PASS_EFFICIENCY: PercentageSpec = PercentageSpec {
    name: "Pourcentage d'efficacité sur les passes",
    successful: &[stat_names::PASSES_REUSSIES],
    attempted: &[stat_names::PASSES_TENTEES],
};

const TACKLE_EFFICIENCY: PercentageSpec = PercentageSpec {
    name: "Pourcentage d'efficacité sur les plaquages",
    successful: &[stat_names::PLAQUAGES_REUSSIS],
    attempted: &[stat_names::PLAQUAGES_TENTES],
};

const SCRUM_WON: PercentageSpec = PercentageSpec {
    name: "Pourcentage de mêlées gagnées",
    successful: &[stat_names::MELEES_GAGNEES],
    attempted: &[stat_names::MELEES_GAGNEES, stat_names::MELEES_PERDUES],
};

const LINEOUT_WON: PercentageSpec = PercentageSpec {
    name: "Pourcentage de touches gagnées",
    successful: &[stat_names::TOUCHES_GAGNEES],
    attempted: &[stat_names::TOUCHES_GAGNEES, stat_names::TOUCHES_PERDUES],
};

const KICKING_SUCCESS: PercentageSpec = PercentageSpec {
    name: "Pourcentage de réussite au pied",
    successful: &[
        stat_names::DROPS_REUSSIS,
        stat_names::TRANSFORMATIONS_REUSSIES,
        stat_names::PENALITES_REUSSIES,
    ],
    attempted: &[
        stat_names::DROPS_TENTES,
        stat_names::TRANSFORMATIONS_TENTEES,
        stat_names::PENALITES_TENTEES,
    ],
};

impl PositionCategory {
    /// Percentage stats shown for this category. Passes and tackles always;
    /// forwards add set-piece ratios, backs add the combined kicking ratio.
    pub fn percentage_specs(&self) -> Vec<PercentageSpec> {
        let mut specs = vec![PASS_EFFICIENCY, TACKLE_EFFICIENCY];
        match self {
            PositionCategory::Forward => {
                specs.push(SCRUM_WON);
                specs.push(LINEOUT_WON);
            }
            PositionCategory::Back => {
                specs.push(KICKING_SUCCESS);
            }
            PositionCategory::Unknown => {}
        }
        specs
    }
}

/// A registered player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub club_id: ClubId,
    pub team_id: Option<TeamId>,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<Position>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Position family; players without a recorded position fall back to
    /// `Unknown` and only get the always-computed percentage stats.
    pub fn position_category(&self) -> PositionCategory {
        self.position
            .map(|p| p.category())
            .unwrap_or(PositionCategory::Unknown)
    }
}
