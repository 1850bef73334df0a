//! Reflog line parsing
//!
//! Lines are expected in the `%at ~ %gs ~ %gd` layout, e.g.
//! `1700000100 ~ checkout: moving from main to feature-x ~ HEAD@{2 hours ago}`.

use regex::Regex;
use time::OffsetDateTime;

/// Capture groups a checkout line must yield: timestamp, action, branch, label.
pub const CHECKOUT_FIELDS: usize = 4;

/// A single "moved to branch X" entry from the reflog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutEvent {
    pub branch_name: String,
    /// Label produced by git, e.g. "3 days ago". Display only.
    pub relative_time: String,
    pub timestamp: OffsetDateTime,
}

/// Any reflog entry reduced to its timestamp and action kind
/// (`checkout`, `commit`, `commit (amend)`, `reset`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflogEntry {
    pub timestamp: OffsetDateTime,
    pub action: String,
}

/// Compiled reflog patterns. Build once per invocation and pass it down.
#[derive(Debug, Clone)]
pub struct ReflogParser {
    checkout: Regex,
    entry: Regex,
}

impl ReflogParser {
    pub fn new() -> Self {
        Self {
            checkout: Regex::new(r"([0-9]+) ~ (checkout):.+ ([^~]+) ~ HEAD@\{(.*)\}")
                .expect("checkout pattern is valid"),
            entry: Regex::new(r"([0-9]+) ~ ([^:~]+):").expect("entry pattern is valid"),
        }
    }

    /// Parse a checkout line. Returns `None` for anything that is not a
    /// checkout or captures fewer than `min_fields` groups.
    pub fn parse_checkout(&self, line: &str, min_fields: usize) -> Option<CheckoutEvent> {
        let caps = self.checkout.captures(line)?;

        let captured = caps.iter().skip(1).filter(|group| group.is_some()).count();
        if captured < min_fields {
            return None;
        }

        let branch_name = caps.get(3)?.as_str().trim();
        if branch_name.is_empty() {
            return None;
        }

        Some(CheckoutEvent {
            branch_name: branch_name.to_string(),
            relative_time: caps.get(4).map_or("", |m| m.as_str()).trim().to_string(),
            timestamp: parse_timestamp(caps.get(1)?.as_str()),
        })
    }

    /// Branch a checkout moved away from: the fourth word of the summary
    /// `checkout: moving from <source> to <target>`.
    pub fn checkout_source(&self, line: &str) -> Option<String> {
        let summary = line.split(" ~ ").nth(1)?;
        if !summary.contains("checkout:") {
            return None;
        }

        summary.split_whitespace().nth(3).map(String::from)
    }

    /// Parse any reflog line into its action kind.
    pub fn parse_entry(&self, line: &str) -> Option<ReflogEntry> {
        let caps = self.entry.captures(line)?;

        Some(ReflogEntry {
            timestamp: parse_timestamp(caps.get(1)?.as_str()),
            action: caps.get(2)?.as_str().trim().to_string(),
        })
    }
}

impl Default for ReflogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// The instant used for "never seen" and for timestamps that failed to parse.
pub fn zero_instant() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

pub fn is_zero(instant: OffsetDateTime) -> bool {
    instant == OffsetDateTime::UNIX_EPOCH
}

/// Unix seconds to an instant; anything unparseable becomes the zero instant.
pub fn parse_timestamp(seconds: &str) -> OffsetDateTime {
    seconds
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .unwrap_or_else(zero_instant)
}
