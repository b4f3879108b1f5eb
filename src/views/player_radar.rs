//! Player-vs-team radar averages.

use std::collections::HashMap;

use crate::calculate::{average, sum_by_type};
use crate::models::stat_names;
use crate::models::{ClubId, PlayerId, RadarAxis};
use crate::store::{ClubStore, StoreError};

use super::authorized_player;

/// The six radar axes, in display order.
const RADAR_METRICS: [&str; 6] = [
    stat_names::ESSAIS,
    stat_names::PLAQUAGES_TENTES,
    stat_names::PLAQUAGES_REUSSIS,
    stat_names::PENALITES_CONCEDEES,
    stat_names::PASSES_TENTEES,
    stat_names::PASSES_REUSSIES,
];

/// Build the per-match average radar for a player against their team.
///
/// Player averages divide by the player's matches played, team averages by
/// all the team's finished season matches; both round to 1 decimal. Returns
/// `Ok(None)` when the player has no matches played — the chart has nothing
/// to scale against.
pub fn player_radar(
    store: &ClubStore,
    requester_club: ClubId,
    player_id: PlayerId,
) -> Result<Option<Vec<RadarAxis>>, StoreError> {
    let player = authorized_player(store, requester_club, player_id)?;
    let season = store
        .current_season()?
        .ok_or(StoreError::NotFound("current season"))?;

    let finished = store.finished_matches_in_season(season.id)?;
    let played = store.matches_played_by(player_id, &finished)?;
    if played.is_empty() {
        return Ok(None);
    }

    let types = store.stat_types_by_id()?;
    let totals_by_name = |rows: &[crate::models::StatRecord]| -> HashMap<String, i64> {
        sum_by_type(rows)
            .into_iter()
            .filter_map(|(id, total)| types.get(&id).map(|st| (st.name.clone(), total)))
            .collect()
    };

    let player_totals = totals_by_name(&store.player_stats(player_id, &played)?);

    // A player without a team assignment gets a flat zero team side.
    let (team_totals, team_match_count) = match player.team_id {
        Some(team_id) => {
            let team_matches = store.team_match_ids(team_id, &finished);
            let rows = store.team_player_stats(team_id, &team_matches)?;
            (totals_by_name(&rows), team_matches.len() as u32)
        }
        None => (HashMap::new(), 0),
    };

    let axes = RADAR_METRICS
        .iter()
        .map(|metric| {
            let player_avg = average(
                player_totals.get(*metric).copied().unwrap_or(0),
                played.len() as u32,
                1,
            );
            let team_avg = average(
                team_totals.get(*metric).copied().unwrap_or(0),
                team_match_count,
                1,
            );
            RadarAxis {
                subject: metric.to_string(),
                player: player_avg,
                team: team_avg,
                full_mark: full_mark(player_avg, team_avg),
            }
        })
        .collect();

    Ok(Some(axes))
}

/// Chart axis maximum: at least 10, with 20% headroom over the larger of the
/// two averages.
fn full_mark(player_avg: f64, team_avg: f64) -> i64 {
    let peak = player_avg.max(team_avg);
    ((peak * 1.2).ceil() as i64).max(10)
}
