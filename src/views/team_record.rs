//! Team win/draw/loss record over the current season.

use crate::calculate::{classify_outcome, win_rate, Outcome};
use crate::models::{TeamId, TeamSeasonRecord};
use crate::store::{ClubStore, StoreError};

/// Classify every finished current-season match involving the team.
/// Matches without a recorded result are left out entirely, so wins, draws
/// and losses always sum to the matches played.
pub fn team_season_record(
    store: &ClubStore,
    team_id: TeamId,
) -> Result<TeamSeasonRecord, StoreError> {
    store.team(team_id)?;
    let season = store
        .current_season()?
        .ok_or(StoreError::NotFound("current season"))?;

    let mut wins = 0u32;
    let mut draws = 0u32;
    let mut losses = 0u32;

    for m in store
        .finished_matches_in_season(season.id)?
        .iter()
        .filter(|m| m.involves(team_id))
    {
        let Some(result) = m.result else { continue };
        match classify_outcome(result, m.is_home(team_id)) {
            Outcome::Win => wins += 1,
            Outcome::Draw => draws += 1,
            Outcome::Loss => losses += 1,
        }
    }

    let total = wins + draws + losses;
    Ok(TeamSeasonRecord {
        team_id,
        season: season.name,
        matches_played: total,
        wins,
        draws,
        losses,
        win_rate: win_rate(wins, total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Club, Match, MatchResult, MatchStatus, Season, Team};
    use crate::storage::{EntityType, JsonlWriter, StorageConfig};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    const TEAM: i64 = 10;

    fn write<T: serde::Serialize>(dir: &std::path::Path, entity: EntityType, items: &[T]) {
        JsonlWriter::<T>::for_entity(&StorageConfig::new(dir.to_path_buf()), entity)
            .append_batch(items)
            .unwrap();
    }

    fn match_row(id: i64, ulid: &str, home: i64, away: i64, result: Option<MatchResult>) -> Match {
        Match {
            id,
            public_id: ulid.parse().unwrap(),
            season_id: 1,
            home_team_id: home,
            away_team_id: away,
            date: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
            status: MatchStatus::Finish,
            result,
            tracked_stat_types: vec![],
        }
    }

    fn setup(dir: &std::path::Path) {
        write(
            dir,
            EntityType::Club,
            &[Club {
                id: 1,
                name: "RC Toulon".to_string(),
                logo: None,
            }],
        );
        write(
            dir,
            EntityType::Team,
            &[Team {
                id: TEAM,
                club_id: 1,
                name: "Équipe première".to_string(),
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

    #[test]
    fn test_record_counts_both_sides() {
        let tmp = tempdir().unwrap();
        setup(tmp.path());
        write(
            tmp.path(),
            EntityType::Match,
            &[
                // Home win at home: win
                match_row(1, "01JCGT4VX2M3N4P5Q6R7S8T9V0", TEAM, 20, Some(MatchResult::HomeWin)),
                // Home win away: loss
                match_row(2, "01JCGT4VX2M3N4P5Q6R7S8T9V1", 20, TEAM, Some(MatchResult::HomeWin)),
                // Away win away: win
                match_row(3, "01JCGT4VX2M3N4P5Q6R7S8T9V2", 20, TEAM, Some(MatchResult::AwayWin)),
                // Draw
                match_row(4, "01JCGT4VX2M3N4P5Q6R7S8T9V3", TEAM, 20, Some(MatchResult::Draw)),
                // Not this team
                match_row(5, "01JCGT4VX2M3N4P5Q6R7S8T9V4", 20, 30, Some(MatchResult::Draw)),
            ],
        );

        let store = ClubStore::new(StorageConfig::new(tmp.path().to_path_buf()));
        let record = team_season_record(&store, TEAM).unwrap();

        assert_eq!(record.matches_played, 4);
        assert_eq!(record.wins, 2);
        assert_eq!(record.draws, 1);
        assert_eq!(record.losses, 1);
        assert_eq!(record.wins + record.draws + record.losses, record.matches_played);
        assert_eq!(record.win_rate, 50);
        assert_eq!(record.season, "2025-2026");
    }

    #[test]
    fn test_no_matches_zero_rate() {
        let tmp = tempdir().unwrap();
        setup(tmp.path());

        let store = ClubStore::new(StorageConfig::new(tmp.path().to_path_buf()));
        let record = team_season_record(&store, TEAM).unwrap();
        assert_eq!(record.matches_played, 0);
        assert_eq!(record.win_rate, 0);
    }

    #[test]
    fn test_unknown_team_is_not_found() {
        let tmp = tempdir().unwrap();
        setup(tmp.path());

        let store = ClubStore::new(StorageConfig::new(tmp.path().to_path_buf()));
        assert!(matches!(
            team_season_record(&store, 999).unwrap_err(),
            StoreError::NotFound("team")
        ));
    }
}
