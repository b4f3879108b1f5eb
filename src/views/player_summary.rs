//! Player season summary: totals and position-dependent percentage stats.

use std::collections::HashMap;

use crate::calculate::{success_percentage, sum_by_type};
use crate::models::{ClubId, GlobalStat, PercentageStat, PlayerId, PlayerSummary};
use crate::store::{ClubStore, StoreError};

use super::authorized_player;

/// Build a player's current-season summary.
///
/// Scoped to finished matches of the current season where the player was in a
/// submitted lineup. Zero matches played is not a failure: the summary comes
/// back with empty stat lists. Stats never recorded for the player (total 0)
/// are omitted rather than listed as zeros, and percentage stats with no
/// attempts are dropped.
pub fn player_summary(
    store: &ClubStore,
    requester_club: ClubId,
    player_id: PlayerId,
) -> Result<PlayerSummary, StoreError> {
    let player = authorized_player(store, requester_club, player_id)?;
    let season = store
        .current_season()?
        .ok_or(StoreError::NotFound("current season"))?;

    let finished = store.finished_matches_in_season(season.id)?;
    let played = store.matches_played_by(player_id, &finished)?;
    if played.is_empty() {
        return Ok(PlayerSummary::empty());
    }

    let types = store.stat_types_by_id()?;
    let rows = store.player_stats(player_id, &played)?;
    let sums = sum_by_type(&rows);

    let global_stats: Vec<GlobalStat> = sums
        .iter()
        .filter(|(_, total)| **total != 0)
        .filter_map(|(id, total)| {
            types.get(id).map(|st| GlobalStat {
                stat_type_id: st.id,
                stat_type_name: st.name.clone(),
                total_value: *total,
            })
        })
        .collect();

    let totals_by_name: HashMap<&str, i64> = sums
        .iter()
        .filter_map(|(id, total)| types.get(id).map(|st| (st.name.as_str(), *total)))
        .collect();
    let total_for = |names: &[&str]| -> i64 {
        names
            .iter()
            .map(|n| totals_by_name.get(n).copied().unwrap_or(0))
            .sum()
    };

    let percentage_stats: Vec<PercentageStat> = player
        .position_category()
        .percentage_specs()
        .into_iter()
        .filter_map(|spec| {
            let attempted = total_for(spec.attempted);
            if attempted == 0 {
                return None;
            }
            let successful = total_for(spec.successful);
            Some(PercentageStat {
                stat_name: spec.name.to_string(),
                percentage: success_percentage(successful, attempted),
                successful,
                attempted,
            })
        })
        .collect();

    Ok(PlayerSummary {
        matches_played: played.len() as u32,
        global_stats,
        percentage_stats,
    })
}
