//! Identifier types.
//!
//! Internal rows use plain numeric ids issued by the persistence layer.
//! Matches additionally carry a stable public ULID so external callers never
//! see internal row ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Internal stat record id.
pub type StatRecordId = i64;

/// Internal stat type id.
pub type StatTypeId = i64;

/// Internal match id.
pub type MatchId = i64;

/// Internal team id.
pub type TeamId = i64;

/// Internal player id.
pub type PlayerId = i64;

/// Internal club id.
pub type ClubId = i64;

/// Internal season id.
pub type SeasonId = i64;

/// Crockford base32 alphabet used by ULIDs (no I, L, O, U).
const ULID_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Public match identifier (ULID).
///
/// This core never mints ULIDs; matches arrive with one already assigned.
/// Parsing only checks the 26-character Crockford base32 shape.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchUlid(String);

impl MatchUlid {
    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error returned when a public match identifier is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid match identifier: {0}")]
pub struct InvalidMatchUlid(pub String);

impl FromStr for MatchUlid {
    type Err = InvalidMatchUlid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        if upper.len() == 26 && upper.chars().all(|c| ULID_ALPHABET.contains(c)) {
            Ok(Self(upper))
        } else {
            Err(InvalidMatchUlid(s.to_string()))
        }
    }
}

impl fmt::Display for MatchUlid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for MatchUlid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchUlid({})", self.0)
    }
}
