//! Derived-view builders.
//!
//! Each builder composes accessor queries with the calculation engine into
//! one response shape. Builders hold no state: every call recomputes from
//! the raw rows.

mod breakdowns;
mod match_bars;
mod player_radar;
mod player_summary;
mod team_record;

pub use breakdowns::{match_kick_stats, match_lineout_stats};
pub use match_bars::match_stat_bars;
pub use player_radar::player_radar;
pub use player_summary::player_summary;
pub use team_record::team_season_record;

use crate::models::{ClubId, Player, PlayerId};
use crate::store::{ClubStore, StoreError};

/// Resolve a player and check the requester may see their stats: both must
/// belong to the same club. Cross-club requests fail outright so no partial
/// data can leak.
pub(crate) fn authorized_player(
    store: &ClubStore,
    requester_club: ClubId,
    player_id: PlayerId,
) -> Result<Player, StoreError> {
    let player = store.player(player_id)?;
    if player.club_id != requester_club {
        return Err(StoreError::Forbidden);
    }
    Ok(player)
}
