//! Pure roster validation predicates.
//!
//! Used by the training service to validate submitted player-id lists
//! against team membership and session enrollment.

use std::collections::HashSet;

use crate::server::model::player::Player;

/// Returns true iff any id occurs more than once in the list.
pub fn has_duplicates(ids: &[i32]) -> bool {
    let mut seen = HashSet::with_capacity(ids.len());

    ids.iter().any(|id| !seen.insert(*id))
}

/// Returns true iff every player belongs to `team_id`.
pub fn team_membership_valid(players: &[Player], team_id: i32) -> bool {
    players.iter().all(|p| p.team_id == team_id)
}

/// Returns true iff the submitted ids are exactly the enrolled players' ids.
///
/// Order-independent: both sides are sorted ascending and compared
/// element-wise, so the comparison is by count and value.
pub fn enrollment_matches(submitted: &[i32], enrolled: &[Player]) -> bool {
    if submitted.len() != enrolled.len() {
        return false;
    }

    let mut submitted = submitted.to_vec();
    let mut enrolled_ids: Vec<i32> = enrolled.iter().map(|p| p.id).collect();

    submitted.sort_unstable();
    enrolled_ids.sort_unstable();

    submitted == enrolled_ids
}
