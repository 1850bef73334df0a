//! Folding reflog history into one record per branch.

use std::collections::BTreeMap;

use time::OffsetDateTime;
use tracing::debug;

use super::filter::BranchSet;
use super::parser::{is_zero, zero_instant, CheckoutEvent, ReflogParser, CHECKOUT_FIELDS};

/// Action kind counted by [`count_commits`]. Amends and merges are not commits here.
pub const COMMIT_ACTION: &str = "commit";

/// Everything known about one branch's usage.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchRecord {
    pub name: String,
    pub checkout_count: usize,
    pub commit_count: usize,
    /// Zero instant when the branch was never checked out.
    pub last_checkout_at: OffsetDateTime,
    /// Events in input order.
    pub checkout_history: Vec<CheckoutEvent>,
    pub score: f64,
}

impl BranchRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checkout_count: 0,
            commit_count: 0,
            last_checkout_at: zero_instant(),
            checkout_history: Vec::new(),
            score: 0.0,
        }
    }

    /// Fold one more checkout of this branch into the record.
    pub fn record_checkout(&mut self, event: CheckoutEvent) {
        // A zero timestamp may initialise the value but never wins against a real one.
        if is_zero(self.last_checkout_at) || event.timestamp > self.last_checkout_at {
            self.last_checkout_at = event.timestamp;
        }

        self.checkout_count += 1;
        self.checkout_history.push(event);
    }

    pub fn never_checked_out(&self) -> bool {
        is_zero(self.last_checkout_at)
    }
}

/// Parse checkout lines and keep only events for branches that still exist.
pub fn checkout_events(
    lines: &[String],
    parser: &ReflogParser,
    branches: &BranchSet,
) -> Vec<CheckoutEvent> {
    lines
        .iter()
        .filter_map(|line| parser.parse_checkout(line, CHECKOUT_FIELDS))
        .filter(|event| {
            let exists = branches.contains(&event.branch_name);
            if !exists {
                debug!(branch = %event.branch_name, "skipping checkout of deleted branch");
            }
            exists
        })
        .collect()
}

/// Fold reflog lines into per-branch records keyed by branch name.
pub fn aggregate(
    lines: &[String],
    parser: &ReflogParser,
    branches: &BranchSet,
) -> BTreeMap<String, BranchRecord> {
    let mut records: BTreeMap<String, BranchRecord> = BTreeMap::new();

    for event in checkout_events(lines, parser, branches) {
        records
            .entry(event.branch_name.clone())
            .or_insert_with(|| BranchRecord::new(event.branch_name.clone()))
            .record_checkout(event);
    }

    records
}

/// Add an empty record for every existing branch that never showed up in the reflog.
pub fn include_unvisited(records: &mut BTreeMap<String, BranchRecord>, branches: &BranchSet) {
    for name in branches.iter() {
        if !records.contains_key(name) {
            records.insert(name.to_string(), BranchRecord::new(name));
        }
    }
}

/// Count reflog entries whose action kind is exactly `commit`.
pub fn count_commits(lines: &[String], parser: &ReflogParser) -> usize {
    lines
        .iter()
        .filter_map(|line| parser.parse_entry(line))
        .filter(|entry| entry.action == COMMIT_ACTION)
        .count()
}
