//! Splitting branches into "very recent" and "older" buckets and ordering them.

use std::cmp::Ordering;

use time::OffsetDateTime;

use super::aggregate::BranchRecord;

/// Cut-off instants for bucketing. `older_cutoff` must be earlier than `recent_cutoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingThresholds {
    /// Checked out strictly after this instant means "very recent".
    pub recent_cutoff: OffsetDateTime,
    /// Checked out before this instant means "truly old".
    pub older_cutoff: OffsetDateTime,
}

impl RankingThresholds {
    pub fn new(recent_cutoff: OffsetDateTime, older_cutoff: OffsetDateTime) -> Self {
        debug_assert!(older_cutoff < recent_cutoff, "older cutoff must precede recent cutoff");
        Self {
            recent_cutoff,
            older_cutoff,
        }
    }

    pub fn is_recent(&self, record: &BranchRecord) -> bool {
        record.last_checkout_at > self.recent_cutoff
    }
}

/// Order records for display and keep at most `limit` of them.
pub fn rank<I>(records: I, thresholds: &RankingThresholds, limit: usize) -> Vec<BranchRecord>
where
    I: IntoIterator<Item = BranchRecord>,
{
    let (mut recent, mut other): (Vec<_>, Vec<_>) =
        records.into_iter().partition(|r| thresholds.is_recent(r));

    recent.sort_by(compare_recent);
    sort_by_less(&mut other, |a, b| older_less(a, b, thresholds.older_cutoff));

    recent.into_iter().chain(other).take(limit).collect()
}

/// Score descending, then most recent checkout first.
fn compare_recent(a: &BranchRecord, b: &BranchRecord) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.last_checkout_at.cmp(&a.last_checkout_at))
}

/// "Should `a` be listed before `b`" for the older bucket.
///
/// NOTE: this is not a strict weak ordering. The regime is chosen from `a`
/// alone, so `older_less(a, b)` and `older_less(b, a)` may be evaluated under
/// different rules when only one of them is past `older_cutoff`. Keep it that
/// way unless the resulting order changes are checked: existing listings rely
/// on it. Always sort with [`sort_by_less`], never `sort_by`, which may panic
/// on inconsistent comparators.
fn older_less(a: &BranchRecord, b: &BranchRecord, older_cutoff: OffsetDateTime) -> bool {
    if a.last_checkout_at < older_cutoff {
        if a.checkout_count == b.checkout_count {
            return a.last_checkout_at > b.last_checkout_at;
        }
        // Checkout count dominates once a branch is old enough, whatever the timestamps say.
        if a.last_checkout_at < b.last_checkout_at && a.checkout_count > b.checkout_count {
            return true;
        }
        if a.last_checkout_at > b.last_checkout_at && a.checkout_count < b.checkout_count {
            return false;
        }
        return a.checkout_count > b.checkout_count;
    }

    a.checkout_count > b.checkout_count
}

/// Stable insertion sort driven by a "less" predicate.
///
/// Tolerates predicates that are not total orders: the result is always a
/// permutation of the input, it just might not be "sorted" in any global sense.
///
/// Quadratic in the number of items. Branch lists are small, and a
/// comparison sort over a non-transitive predicate may panic.
fn sort_by_less<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && less(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
