//! Leaderboard ordering.

use smiletrack_model::ScoreRecord;

/// Sort records by descending smile count, then ascending date.
///
/// The sort is stable, so records tied on both keys keep their input order.
pub fn rank_records(mut records: Vec<ScoreRecord>) -> Vec<ScoreRecord> {
    records.sort_by(ScoreRecord::ranking_cmp);
    records
}
