use super::domain::ScoreTable;
use crate::pricing::Tier;

/// Picks the leading tier. Any tie for first place resolves to Advanced, even
/// when Advanced is not one of the tied tiers.
pub(crate) fn resolve(scores: &ScoreTable) -> Tier {
    let [(leader, top), (_, runner_up), _] = scores.ranked();
    if top == runner_up {
        Tier::Advanced
    } else {
        leader
    }
}
