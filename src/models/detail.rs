//! Kick and lineout detail rows.
//!
//! Detail rows extend one stat record each with event-level context. Stats
//! that carry details are recorded one row per event (value 1), so detail
//! queries preserve chronological order by reading rows in ascending id order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StatRecordId;

/// Pitch zone, from the recording team's in-goal to the opposition's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundArea {
    #[serde(rename = "Own_22_In_Goal")]
    Own22InGoal,
    #[serde(rename = "Own_40")]
    Own40,
    #[serde(rename = "Center")]
    Center,
    #[serde(rename = "Opp_40")]
    Opp40,
    #[serde(rename = "Opp_22_In_Goal")]
    Opp22InGoal,
}

impl GroundArea {
    /// Wire/display label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            GroundArea::Own22InGoal => "Own_22_In_Goal",
            GroundArea::Own40 => "Own_40",
            GroundArea::Center => "Center",
            GroundArea::Opp40 => "Opp_40",
            GroundArea::Opp22InGoal => "Opp_22_In_Goal",
        }
    }
}

impl fmt::Display for GroundArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where in the lineout the ball was caught or blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatchBlockAreaLineout {
    Front,
    Middle,
    Back,
}

impl CatchBlockAreaLineout {
    pub fn label(&self) -> &'static str {
        match self {
            CatchBlockAreaLineout::Front => "Front",
            CatchBlockAreaLineout::Middle => "Middle",
            CatchBlockAreaLineout::Back => "Back",
        }
    }
}

impl fmt::Display for CatchBlockAreaLineout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detail for one kicking event (drop, conversion or penalty attempt).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KickDetail {
    /// Stat record this detail extends (one-to-one).
    pub stat_id: StatRecordId,
    pub start_area_kick: GroundArea,
    pub end_area_kick: Option<GroundArea>,
    pub dead_ball: bool,
    pub success: bool,
    pub comment: Option<String>,
}

/// Detail for one lineout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineoutDetail {
    /// Stat record this detail extends (one-to-one).
    pub stat_id: StatRecordId,
    pub area: GroundArea,
    /// Players in the lineout, 2 to 15.
    pub nb_player: u8,
    pub catch_block_area: CatchBlockAreaLineout,
    /// None while the outcome has not been recorded yet.
    pub success: Option<bool>,
    pub fail_reason: Option<String>,
}
