use std::cmp::Ordering;

use crate::models::JobMatch;

/// Orders matches by score, highest first, and keeps the top `limit`.
///
/// The sort is stable: equal scores keep their upstream order.
/// Records without match details rank as score 0.
pub fn rank_matches(mut matches: Vec<JobMatch>, limit: usize) -> Vec<JobMatch> {
    matches.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    matches.truncate(limit);
    matches
}
