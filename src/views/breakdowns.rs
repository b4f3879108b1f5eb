//! Lineout and kick team breakdowns for a match.

use std::collections::HashMap;

use crate::calculate::{frequency_distribution, most_common, success_percentage, top_by_frequency};
use crate::models::{
    AreaFrequency, Club, KickRow, KickTeamStats, LineoutRow, LineoutTeamStats, Match,
    MatchKickStats, MatchLineoutStats, MatchUlid, Player, PlayerId, Team, TeamId,
};
use crate::store::{ClubStore, StoreError};

/// Lineout breakdowns for both teams of a match.
pub fn match_lineout_stats(
    store: &ClubStore,
    public_id: &MatchUlid,
) -> Result<MatchLineoutStats, StoreError> {
    let m = store.match_by_public_id(public_id)?;
    Ok(MatchLineoutStats {
        home_team: lineout_team_stats(store, &m, m.home_team_id)?,
        away_team: lineout_team_stats(store, &m, m.away_team_id)?,
    })
}

/// Kick breakdowns for both teams of a match.
pub fn match_kick_stats(
    store: &ClubStore,
    public_id: &MatchUlid,
) -> Result<MatchKickStats, StoreError> {
    let m = store.match_by_public_id(public_id)?;
    Ok(MatchKickStats {
        home_team: kick_team_stats(store, &m, m.home_team_id)?,
        away_team: kick_team_stats(store, &m, m.away_team_id)?,
    })
}

/// Resolve team and club rows; `Ok(None)` when either is missing, so callers
/// can emit the placeholder side instead of dropping it.
fn team_identity(store: &ClubStore, team_id: TeamId) -> Result<Option<(Team, Club)>, StoreError> {
    let team = match store.team(team_id) {
        Ok(team) => team,
        Err(StoreError::NotFound(_)) => return Ok(None),
        Err(e) => return Err(e),
    };
    match store.club(team.club_id) {
        Ok(club) => Ok(Some((team, club))),
        Err(StoreError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

fn player_name(players: &HashMap<PlayerId, Player>, id: Option<PlayerId>) -> String {
    id.and_then(|id| players.get(&id))
        .map(|p| p.full_name())
        .unwrap_or_default()
}

fn lineout_team_stats(
    store: &ClubStore,
    m: &Match,
    team_id: TeamId,
) -> Result<LineoutTeamStats, StoreError> {
    let Some((team, club)) = team_identity(store, team_id)? else {
        return Ok(LineoutTeamStats::unresolved(team_id));
    };

    let rows = store.lineout_detail_rows(m.id, team_id)?;
    let players = store.players_by_id()?;

    let total = rows.len() as u32;
    let successful = rows
        .iter()
        .filter(|(_, d)| d.success == Some(true))
        .count() as i64;

    let areas: Vec<_> = rows.iter().map(|(_, d)| d.area).collect();
    let nb_players: Vec<u8> = rows.iter().map(|(_, d)| d.nb_player).collect();
    let catch_areas: Vec<_> = rows.iter().map(|(_, d)| d.catch_block_area).collect();

    let detailed_stats = rows
        .iter()
        .map(|(record, detail)| LineoutRow {
            id: record.id,
            player_name: player_name(&players, record.scope.player_id()),
            area: detail.area,
            nb_player: detail.nb_player,
            catch_block_area: detail.catch_block_area,
            success: detail.success,
            fail_reason: detail.fail_reason.clone(),
        })
        .collect();

    Ok(LineoutTeamStats {
        team_id,
        team_name: team.name,
        club_name: club.name,
        club_logo: club.logo,
        total_lineouts: total,
        success_rate: success_percentage(successful, total as i64),
        top_areas: top_by_frequency(&areas, 3)
            .into_iter()
            .map(|f| AreaFrequency {
                area: f.value.label().to_string(),
                count: f.count,
                percentage: f.percentage,
            })
            .collect(),
        most_common_nb_player: most_common(&nb_players),
        catch_block_area_stats: frequency_distribution(&catch_areas)
            .into_iter()
            .map(|f| AreaFrequency {
                area: f.value.label().to_string(),
                count: f.count,
                percentage: f.percentage,
            })
            .collect(),
        detailed_stats,
    })
}

fn kick_team_stats(
    store: &ClubStore,
    m: &Match,
    team_id: TeamId,
) -> Result<KickTeamStats, StoreError> {
    let Some((team, club)) = team_identity(store, team_id)? else {
        return Ok(KickTeamStats::unresolved(team_id));
    };

    let rows = store.kick_detail_rows(m.id, team_id)?;
    let players = store.players_by_id()?;
    let types = store.stat_types_by_id()?;

    let total = rows.len() as u32;
    let successful = rows.iter().filter(|(_, d)| d.success).count() as i64;
    let dead_balls = rows.iter().filter(|(_, d)| d.dead_ball).count() as u32;

    let start_areas: Vec<_> = rows.iter().map(|(_, d)| d.start_area_kick).collect();

    let detailed_stats = rows
        .iter()
        .map(|(record, detail)| KickRow {
            id: record.id,
            player_name: player_name(&players, record.scope.player_id()),
            kick_type: types
                .get(&record.stat_type_id)
                .map(|st| st.name.clone())
                .unwrap_or_default(),
            start_area: detail.start_area_kick,
            end_area: detail.end_area_kick,
            dead_ball: detail.dead_ball,
            success: detail.success,
            comment: detail.comment.clone(),
        })
        .collect();

    Ok(KickTeamStats {
        team_id,
        team_name: team.name,
        club_name: club.name,
        club_logo: club.logo,
        total_kicks: total,
        success_rate: success_percentage(successful, total as i64),
        top_start_areas: top_by_frequency(&start_areas, 3)
            .into_iter()
            .map(|f| AreaFrequency {
                area: f.value.label().to_string(),
                count: f.count,
                percentage: f.percentage,
            })
            .collect(),
        most_common_start_area: most_common(&start_areas),
        dead_balls,
        detailed_stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stat_names;
    use crate::models::{
        CatchBlockAreaLineout, GroundArea, KickDetail, LineoutDetail, MatchStatus, Position,
        StatGroup, StatRecord, StatType, StatValueType,
    };
    use crate::storage::{EntityType, JsonlWriter, StorageConfig};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    const ULID: &str = "01JCGT4VX2M3N4P5Q6R7S8T9V0";
    const HOME: i64 = 10;
    const AWAY: i64 = 20;
    const PLAYER: i64 = 5;

    fn write<T: serde::Serialize>(dir: &std::path::Path, entity: EntityType, items: &[T]) {
        JsonlWriter::<T>::for_entity(&StorageConfig::new(dir.to_path_buf()), entity)
            .append_batch(items)
            .unwrap();
    }

    fn setup_match(dir: &std::path::Path) {
        write(
            dir,
            EntityType::Match,
            &[Match {
                id: 1,
                public_id: ULID.parse().unwrap(),
                season_id: 1,
                home_team_id: HOME,
                away_team_id: AWAY,
                date: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
                status: MatchStatus::Finish,
                result: None,
                tracked_stat_types: vec![],
            }],
        );
    }

    fn setup_teams(dir: &std::path::Path) {
        write(
            dir,
            EntityType::Club,
            &[
                Club {
                    id: 1,
                    name: "RC Toulon".to_string(),
                    logo: Some("https://example.com/rct.png".to_string()),
                },
                Club {
                    id: 2,
                    name: "Stade Toulousain".to_string(),
                    logo: None,
                },
            ],
        );
        write(
            dir,
            EntityType::Team,
            &[
                Team {
                    id: HOME,
                    club_id: 1,
                    name: "Équipe première".to_string(),
                },
                Team {
                    id: AWAY,
                    club_id: 2,
                    name: "Équipe première".to_string(),
                },
            ],
        );
        write(
            dir,
            EntityType::Player,
            &[Player {
                id: PLAYER,
                club_id: 1,
                team_id: Some(HOME),
                first_name: "Thibaud".to_string(),
                last_name: "Flament".to_string(),
                position: Some(Position::Lock),
            }],
        );
    }

    fn lineout(stat_id: i64, area: GroundArea, success: Option<bool>) -> LineoutDetail {
        LineoutDetail {
            stat_id,
            area,
            nb_player: 5,
            catch_block_area: CatchBlockAreaLineout::Middle,
            success,
            fail_reason: None,
        }
    }

    #[test]
    fn test_lineout_breakdown_scenario() {
        // 3 lineouts, 2 successful, areas [Own_22_In_Goal, Own_22_In_Goal, Own_40]
        let tmp = tempdir().unwrap();
        setup_match(tmp.path());
        setup_teams(tmp.path());
        write(
            tmp.path(),
            EntityType::StatType,
            &[StatType::new(7, stat_names::TOUCHES, StatValueType::Number, StatGroup::Player)],
        );
        write(
            tmp.path(),
            EntityType::StatRecord,
            &[
                StatRecord::player(1, 1, HOME, PLAYER, 7, 1),
                StatRecord::player(2, 1, HOME, PLAYER, 7, 1),
                StatRecord::player(3, 1, HOME, PLAYER, 7, 1),
            ],
        );
        write(
            tmp.path(),
            EntityType::LineoutDetail,
            &[
                lineout(1, GroundArea::Own22InGoal, Some(true)),
                lineout(2, GroundArea::Own22InGoal, Some(false)),
                lineout(3, GroundArea::Own40, Some(true)),
            ],
        );

        let store = ClubStore::new(StorageConfig::new(tmp.path().to_path_buf()));
        let stats = match_lineout_stats(&store, &ULID.parse().unwrap()).unwrap();
        let home = &stats.home_team;

        assert_eq!(home.team_name, "Équipe première");
        assert_eq!(home.club_name, "RC Toulon");
        assert_eq!(home.total_lineouts, 3);
        assert_eq!(home.success_rate, 67);
        assert_eq!(home.top_areas.len(), 2);
        assert_eq!(home.top_areas[0].area, "Own_22_In_Goal");
        assert_eq!(home.top_areas[0].count, 2);
        assert_eq!(home.top_areas[0].percentage, 67);
        assert_eq!(home.top_areas[1].area, "Own_40");
        assert_eq!(home.top_areas[1].count, 1);
        assert_eq!(home.top_areas[1].percentage, 33);
        assert_eq!(home.most_common_nb_player, Some(5));
        assert_eq!(home.detailed_stats.len(), 3);
        assert_eq!(home.detailed_stats[0].player_name, "Thibaud Flament");

        // Away team recorded nothing: zeroed but present
        assert_eq!(stats.away_team.total_lineouts, 0);
        assert_eq!(stats.away_team.success_rate, 0);
        assert_eq!(stats.away_team.club_name, "Stade Toulousain");
    }

    #[test]
    fn test_unresolved_team_yields_placeholder() {
        let tmp = tempdir().unwrap();
        setup_match(tmp.path());
        // No teams/clubs written

        let store = ClubStore::new(StorageConfig::new(tmp.path().to_path_buf()));
        let stats = match_lineout_stats(&store, &ULID.parse().unwrap()).unwrap();
        assert_eq!(stats.home_team.team_id, HOME);
        assert_eq!(stats.home_team.team_name, "");
        assert_eq!(stats.home_team.total_lineouts, 0);
        assert_eq!(stats.away_team.team_id, AWAY);
    }

    #[test]
    fn test_kick_breakdown() {
        let tmp = tempdir().unwrap();
        setup_match(tmp.path());
        setup_teams(tmp.path());
        write(
            tmp.path(),
            EntityType::StatType,
            &[
                StatType::new(5, stat_names::PENALITES_TENTEES, StatValueType::Number, StatGroup::Player),
                StatType::new(6, stat_names::DROPS_TENTES, StatValueType::Number, StatGroup::Player),
            ],
        );
        write(
            tmp.path(),
            EntityType::StatRecord,
            &[
                StatRecord::player(1, 1, HOME, PLAYER, 5, 1),
                StatRecord::player(2, 1, HOME, PLAYER, 5, 1),
                StatRecord::player(3, 1, HOME, PLAYER, 6, 1),
            ],
        );
        write(
            tmp.path(),
            EntityType::KickDetail,
            &[
                KickDetail {
                    stat_id: 1,
                    start_area_kick: GroundArea::Opp40,
                    end_area_kick: None,
                    dead_ball: false,
                    success: true,
                    comment: None,
                },
                KickDetail {
                    stat_id: 2,
                    start_area_kick: GroundArea::Opp40,
                    end_area_kick: None,
                    dead_ball: true,
                    success: false,
                    comment: Some("Poteau".to_string()),
                },
                KickDetail {
                    stat_id: 3,
                    start_area_kick: GroundArea::Center,
                    end_area_kick: None,
                    dead_ball: false,
                    success: true,
                    comment: None,
                },
            ],
        );

        let store = ClubStore::new(StorageConfig::new(tmp.path().to_path_buf()));
        let stats = match_kick_stats(&store, &ULID.parse().unwrap()).unwrap();
        let home = &stats.home_team;

        assert_eq!(home.total_kicks, 3);
        assert_eq!(home.success_rate, 67);
        assert_eq!(home.dead_balls, 1);
        assert_eq!(home.most_common_start_area, Some(GroundArea::Opp40));
        assert_eq!(home.top_start_areas[0].area, "Opp_40");
        assert_eq!(home.top_start_areas[0].count, 2);
        assert_eq!(home.detailed_stats.len(), 3);
        assert_eq!(home.detailed_stats[0].kick_type, stat_names::PENALITES_TENTEES);
        assert_eq!(home.detailed_stats[2].kick_type, stat_names::DROPS_TENTES);
    }

    #[test]
    fn test_unknown_match_is_not_found() {
        let tmp = tempdir().unwrap();
        let store = ClubStore::new(StorageConfig::new(tmp.path().to_path_buf()));
        assert!(matches!(
            match_lineout_stats(&store, &ULID.parse().unwrap()).unwrap_err(),
            StoreError::NotFound("match")
        ));
    }
}
