//! Match stat bars: home vs away totals per tracked stat type.

use crate::calculate::sum_by_type;
use crate::models::{MatchStatBar, MatchUlid};
use crate::store::{ClubStore, StoreError};

/// Build the home-vs-away bars for a match, one per tracked stat type with a
/// team-applicable group, ordered ascending by stat type id. A match tracking
/// nothing yields an empty list; the caller renders a "no stats" state.
pub fn match_stat_bars(
    store: &ClubStore,
    public_id: &MatchUlid,
) -> Result<Vec<MatchStatBar>, StoreError> {
    let m = store.match_by_public_id(public_id)?;
    let types = store.stat_types_by_id()?;

    let home_sums = sum_by_type(&store.team_stats(&m, m.home_team_id)?);
    let away_sums = sum_by_type(&store.team_stats(&m, m.away_team_id)?);

    let mut tracked = m.tracked_stat_types.clone();
    tracked.sort_unstable();
    tracked.dedup();

    Ok(tracked
        .into_iter()
        .filter_map(|id| types.get(&id))
        .filter(|st| st.group.applies_to_team())
        .map(|st| MatchStatBar {
            stat_type_id: st.id,
            stat_type_name: st.name.clone(),
            stat_type_value: st.value_type,
            home_team_value: home_sums.get(&st.id).copied().unwrap_or(0),
            away_team_value: away_sums.get(&st.id).copied().unwrap_or(0),
        })
        .collect())
}
