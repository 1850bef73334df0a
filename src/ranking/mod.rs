//! Branch ranking
//!
//! Turns reflog history into "which branch did I use most recently / most
//! often" listings. Everything here is a pure function of what the
//! [`RefSource`] returns plus an explicit `now`.

pub mod aggregate;
pub mod bucket;
pub mod filter;
pub mod parser;
pub mod priority;
pub mod score;

use regex::Regex;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

use crate::config::RankingConfig;
use crate::git::{GitError, RefSource, REFLOG_FORMAT};

pub use aggregate::BranchRecord;
pub use bucket::RankingThresholds;
pub use filter::BranchSet;
pub use parser::{CheckoutEvent, ReflogParser};
pub use priority::PriorityRanked;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("invalid exclude pattern: {0}")]
    Exclude(#[source] regex::Error),

    #[error("invalid search pattern: {0}")]
    Search(#[source] regex::Error),

    #[error("no checkout entries found")]
    NoCheckouts,
}

/// A listing, or the current branch when nothing qualified.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Ranked(Vec<T>),
    Fallback(String),
}

/// How `branch:search` matches names.
#[derive(Debug, Clone)]
pub enum BranchMatcher {
    Substring(String),
    Pattern(Regex),
}

impl BranchMatcher {
    pub fn substring(needle: impl Into<String>) -> Self {
        Self::Substring(needle.into())
    }

    pub fn regex(pattern: &str) -> Result<Self, RankingError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(RankingError::Search)
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Substring(needle) => name.contains(needle.as_str()),
            Self::Pattern(re) => re.is_match(name),
        }
    }
}

/// Ranking pipeline bound to one repository and one configuration.
pub struct Ranker<'a, S: RefSource> {
    source: &'a S,
    parser: ReflogParser,
    exclude: Option<Regex>,
}

impl<'a, S: RefSource> Ranker<'a, S> {
    pub fn new(source: &'a S, config: &RankingConfig) -> Result<Self, RankingError> {
        let exclude = config
            .exclude
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
            .map(Regex::new)
            .transpose()
            .map_err(RankingError::Exclude)?;

        Ok(Self {
            source,
            parser: ReflogParser::new(),
            exclude,
        })
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// Checkout events for existing, non-excluded branches, newest first.
    fn checkout_events(&self) -> Result<Vec<CheckoutEvent>, RankingError> {
        let branches = BranchSet::from_branch_list(&self.source.list_branches()?);
        let lines = self.source.reflog(REFLOG_FORMAT)?;
        debug!(branches = branches.len(), lines = lines.len(), "read reflog");

        Ok(aggregate::checkout_events(&lines, &self.parser, &branches)
            .into_iter()
            .filter(|event| !self.is_excluded(&event.branch_name))
            .collect())
    }

    /// Distinct branches in the order they were last checked out, newest
    /// first, without the current branch.
    pub fn recent(&self, limit: usize) -> Result<Listing<CheckoutEvent>, RankingError> {
        let current = self.source.current_branch()?;
        let events = self.checkout_events()?;

        let mut seen = std::collections::HashSet::new();
        let recent: Vec<CheckoutEvent> = events
            .into_iter()
            .filter(|event| event.branch_name != current)
            .filter(|event| seen.insert(event.branch_name.clone()))
            .take(limit)
            .collect();

        Ok(with_fallback(recent, current))
    }

    /// Recent branches re-ordered by external priority keys.
    pub fn by_priority(
        &self,
        keys: &[String],
        limit: usize,
    ) -> Result<Listing<PriorityRanked>, RankingError> {
        let current = self.source.current_branch()?;
        let events = self.checkout_events()?;

        let candidates: Vec<&CheckoutEvent> = events
            .iter()
            .filter(|event| event.branch_name != current)
            .collect();

        let mut ranked = priority::rank_by_priority(candidates, keys);
        ranked.truncate(limit);

        Ok(with_fallback(ranked, current))
    }

    /// Full recency/frequency ranking: aggregate, count commits, score, bucket.
    pub fn by_activity(
        &self,
        thresholds: &RankingThresholds,
        limit: usize,
        now: OffsetDateTime,
    ) -> Result<Listing<BranchRecord>, RankingError> {
        let mut records = self.records(false)?;
        self.enrich_commit_counts(records.iter_mut())?;
        score::score_records(records.iter_mut(), now);

        let ranked = bucket::rank(records, thresholds, limit);
        if ranked.is_empty() {
            return Ok(Listing::Fallback(self.source.current_branch()?));
        }

        Ok(Listing::Ranked(ranked))
    }

    /// Every existing branch matching `matcher`, most recently checked out
    /// first; never-visited branches last.
    pub fn search(&self, matcher: &BranchMatcher) -> Result<Vec<BranchRecord>, RankingError> {
        let mut matches: Vec<BranchRecord> = self
            .records(true)?
            .into_iter()
            .filter(|record| matcher.is_match(&record.name))
            .collect();

        matches.sort_by(|a, b| b.last_checkout_at.cmp(&a.last_checkout_at));
        Ok(matches)
    }

    /// The branch left by the most recent checkout, i.e. what `git checkout -` would pick.
    pub fn last_branch(&self) -> Result<String, RankingError> {
        let lines = self.source.reflog(REFLOG_FORMAT)?;

        lines
            .iter()
            .find_map(|line| self.parser.checkout_source(line))
            .ok_or(RankingError::NoCheckouts)
    }

    fn records(&self, include_unvisited: bool) -> Result<Vec<BranchRecord>, RankingError> {
        let branches = BranchSet::from_branch_list(&self.source.list_branches()?);
        let lines = self.source.reflog(REFLOG_FORMAT)?;

        let mut records = aggregate::aggregate(&lines, &self.parser, &branches);
        if include_unvisited {
            aggregate::include_unvisited(&mut records, &branches);
        }

        Ok(records
            .into_values()
            .filter(|record| !self.is_excluded(&record.name))
            .collect())
    }

    /// One extra reflog query per branch, counting its plain commits.
    fn enrich_commit_counts<'r, I>(&self, records: I) -> Result<(), RankingError>
    where
        I: IntoIterator<Item = &'r mut BranchRecord>,
    {
        for record in records {
            let lines = self.source.branch_reflog(&record.name, REFLOG_FORMAT)?;
            record.commit_count = aggregate::count_commits(&lines, &self.parser);
            debug!(branch = %record.name, commits = record.commit_count, "counted commits");
        }

        Ok(())
    }
}

fn with_fallback<T>(items: Vec<T>, current: String) -> Listing<T> {
    if items.is_empty() {
        debug!(branch = %current, "nothing to rank, falling back to current branch");
        Listing::Fallback(current)
    } else {
        Listing::Ranked(items)
    }
}
