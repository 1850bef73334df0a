//! Recency and frequency score for a branch.

use time::OffsetDateTime;

use super::aggregate::BranchRecord;

/// Hours after which the decay term reaches zero and turns negative.
pub const DECAY_HORIZON_HOURS: f64 = 1000.0;

/// Damping applied to branches that were only ever looked at, never committed on.
pub const NO_COMMIT_DAMPING: f64 = 3.5;

/// `checkouts * commits * (1000 - age_hours)`, divided by 3.5 when there are no commits.
///
/// There is no clamp: old branches score negative. Only the relative order matters.
pub fn activity_score(
    checkout_count: usize,
    commit_count: usize,
    last_checkout_at: OffsetDateTime,
    now: OffsetDateTime,
) -> f64 {
    let age_hours = (now - last_checkout_at).as_seconds_f64() / 3600.0;
    let decay = DECAY_HORIZON_HOURS - age_hours;
    let raw = checkout_count as f64 * commit_count as f64 * decay;

    if commit_count == 0 {
        raw / NO_COMMIT_DAMPING
    } else {
        raw
    }
}

/// Fill in `score` on every record.
pub fn score_records<'a, I>(records: I, now: OffsetDateTime)
where
    I: IntoIterator<Item = &'a mut BranchRecord>,
{
    for record in records {
        record.score = activity_score(
            record.checkout_count,
            record.commit_count,
            record.last_checkout_at,
            now,
        );
    }
}
