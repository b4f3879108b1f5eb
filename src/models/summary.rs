//! Derived aggregate shapes.
//!
//! These are the externally observable response bodies. They are built fresh
//! per request and discarded after the response is produced; field names are
//! part of the API contract and must not change.

use serde::Serialize;

use super::{CatchBlockAreaLineout, GroundArea, StatRecordId, StatTypeId, StatValueType, TeamId};

/// One home-vs-away bar on the match stats page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatBar {
    pub stat_type_id: StatTypeId,
    pub stat_type_name: String,
    pub stat_type_value: StatValueType,
    pub home_team_value: i64,
    pub away_team_value: i64,
}

/// Career total for one stat type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStat {
    pub stat_type_id: StatTypeId,
    pub stat_type_name: String,
    pub total_value: i64,
}

/// A success ratio with its underlying counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentageStat {
    pub stat_name: String,
    pub percentage: i64,
    pub successful: i64,
    pub attempted: i64,
}

/// Season summary for one player.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub matches_played: u32,
    pub global_stats: Vec<GlobalStat>,
    pub percentage_stats: Vec<PercentageStat>,
}

impl PlayerSummary {
    /// The documented zero-match shape: empty lists, never an error.
    pub fn empty() -> Self {
        Self {
            matches_played: 0,
            global_stats: Vec::new(),
            percentage_stats: Vec::new(),
        }
    }
}

/// One axis of the player-vs-team radar chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarAxis {
    pub subject: String,
    pub player: f64,
    pub team: f64,
    pub full_mark: i64,
}

/// Occurrence count and share for one categorical value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaFrequency {
    pub area: String,
    pub count: u32,
    pub percentage: i64,
}

/// One lineout event in the detailed table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineoutRow {
    pub id: StatRecordId,
    pub player_name: String,
    pub area: GroundArea,
    pub nb_player: u8,
    pub catch_block_area: CatchBlockAreaLineout,
    pub success: Option<bool>,
    pub fail_reason: Option<String>,
}

/// Lineout breakdown for one team in one match.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineoutTeamStats {
    pub team_id: TeamId,
    pub team_name: String,
    pub club_name: String,
    pub club_logo: Option<String>,
    pub total_lineouts: u32,
    pub success_rate: i64,
    pub top_areas: Vec<AreaFrequency>,
    pub most_common_nb_player: Option<u8>,
    pub catch_block_area_stats: Vec<AreaFrequency>,
    pub detailed_stats: Vec<LineoutRow>,
}

impl LineoutTeamStats {
    /// Placeholder for a side whose team cannot be resolved: all zeros and
    /// empty lists, so the response always carries both teams.
    pub fn unresolved(team_id: TeamId) -> Self {
        Self {
            team_id,
            team_name: String::new(),
            club_name: String::new(),
            club_logo: None,
            total_lineouts: 0,
            success_rate: 0,
            top_areas: Vec::new(),
            most_common_nb_player: None,
            catch_block_area_stats: Vec::new(),
            detailed_stats: Vec::new(),
        }
    }
}

/// One kick event in the detailed table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KickRow {
    pub id: StatRecordId,
    pub player_name: String,
    pub kick_type: String,
    pub start_area: GroundArea,
    pub end_area: Option<GroundArea>,
    pub dead_ball: bool,
    pub success: bool,
    pub comment: Option<String>,
}

/// Kick breakdown for one team in one match.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KickTeamStats {
    pub team_id: TeamId,
    pub team_name: String,
    pub club_name: String,
    pub club_logo: Option<String>,
    pub total_kicks: u32,
    pub success_rate: i64,
    pub top_start_areas: Vec<AreaFrequency>,
    pub most_common_start_area: Option<GroundArea>,
    pub dead_balls: u32,
    pub detailed_stats: Vec<KickRow>,
}

impl KickTeamStats {
    pub fn unresolved(team_id: TeamId) -> Self {
        Self {
            team_id,
            team_name: String::new(),
            club_name: String::new(),
            club_logo: None,
            total_kicks: 0,
            success_rate: 0,
            top_start_areas: Vec::new(),
            most_common_start_area: None,
            dead_balls: 0,
            detailed_stats: Vec::new(),
        }
    }
}

/// Both sides of a match breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeamBreakdown<T> {
    pub home_team: T,
    pub away_team: T,
}

/// Lineout breakdowns for both teams.
pub type MatchLineoutStats = MatchTeamBreakdown<LineoutTeamStats>;

/// Kick breakdowns for both teams.
pub type MatchKickStats = MatchTeamBreakdown<KickTeamStats>;

/// Win/draw/loss record for a team over the current season.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSeasonRecord {
    pub team_id: TeamId,
    pub season: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub win_rate: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_stat_bar_field_names() {
        let bar = MatchStatBar {
            stat_type_id: 1,
            stat_type_name: "Essais".to_string(),
            stat_type_value: StatValueType::Number,
            home_team_value: 3,
            away_team_value: 1,
        };
        let json = serde_json::to_value(&bar).unwrap();
        assert_eq!(json["statTypeId"], 1);
        assert_eq!(json["statTypeName"], "Essais");
        assert_eq!(json["statTypeValue"], "Number");
        assert_eq!(json["homeTeamValue"], 3);
        assert_eq!(json["awayTeamValue"], 1);
    }

    #[test]
    fn test_player_summary_empty_shape() {
        let json = serde_json::to_value(PlayerSummary::empty()).unwrap();
        assert_eq!(json["matchesPlayed"], 0);
        assert!(json["globalStats"].as_array().unwrap().is_empty());
        assert!(json["percentageStats"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_radar_axis_field_names() {
        let axis = RadarAxis {
            subject: "Essais".to_string(),
            player: 0.5,
            team: 1.2,
            full_mark: 10,
        };
        let json = serde_json::to_value(&axis).unwrap();
        assert_eq!(json["fullMark"], 10);
        assert_eq!(json["player"], 0.5);
    }

    #[test]
    fn test_breakdown_wraps_both_sides() {
        let stats = MatchLineoutStats {
            home_team: LineoutTeamStats::unresolved(1),
            away_team: LineoutTeamStats::unresolved(2),
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["homeTeam"]["teamId"], 1);
        assert_eq!(json["awayTeam"]["teamId"], 2);
        assert_eq!(json["homeTeam"]["totalLineouts"], 0);
        assert!(json["homeTeam"]["mostCommonNbPlayer"].is_null());
    }
}
