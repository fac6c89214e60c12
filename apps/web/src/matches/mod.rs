// Ranking and persistence of match batches handed over by the external matcher.
// Scoring itself happens upstream; nothing here computes a score.

pub mod ranking;
pub mod store;
