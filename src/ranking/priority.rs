//! Re-ranking recent checkouts by externally supplied priority keys
//! (issue identifiers such as `ABC-123`).

use std::collections::HashSet;

use thiserror::Error;

use super::parser::CheckoutEvent;

/// Subtracted from unix seconds to keep base ranks small.
pub const RANK_EPOCH_OFFSET: i64 = 1_610_000_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PriorityKeyError {
    #[error("issue key is empty")]
    Empty,

    #[error("invalid issue key format: {0}")]
    Format(String),

    #[error("invalid numeric part in issue key '{0}'")]
    Number(String),
}

/// A branch and its adjusted rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityRanked {
    pub label: String,
    pub rank: i64,
    pub branch_name: String,
}

/// Numeric part after the last hyphen: `ABC-123` -> `123`.
pub fn hash_issue_key(key: &str) -> Result<i64, PriorityKeyError> {
    if key.is_empty() {
        return Err(PriorityKeyError::Empty);
    }

    let (_, number) = key
        .rsplit_once('-')
        .filter(|(_, number)| !number.is_empty())
        .ok_or_else(|| PriorityKeyError::Format(key.to_string()))?;

    number
        .parse::<i64>()
        .map_err(|_| PriorityKeyError::Number(key.to_string()))
}

/// Tie-break weight for a key, taken from the key's numeric suffix.
///
/// Folded into two digits. Used raw, a key such as `ABC-123` gives
/// `123 * -50 = -6150`, which outweighs the `+1000 * position` bonus, so a
/// branch matching the top key would rank below one matching nothing.
fn key_weight(key: &str) -> i64 {
    hash_issue_key(key).map_or(0, |n| n.rem_euclid(100))
}

/// Adjusted rank of one checkout against the ordered key list.
pub fn adjusted_rank(event: &CheckoutEvent, keys: &[String]) -> i64 {
    let total = keys.len() as i64;
    let mut rank = event.timestamp.unix_timestamp() - RANK_EPOCH_OFFSET;

    for (index, key) in keys.iter().enumerate() {
        let position = total - index as i64;
        let weight = key_weight(key);

        if !key.is_empty() && event.branch_name.contains(key.as_str()) {
            rank += 1000 * position + weight * -50;
        } else {
            rank -= ((1000 + weight) + 100 * position) * 4;
        }
    }

    rank / 100
}

/// Deduplicate (first occurrence wins) and order by adjusted rank, highest first.
///
/// Input is expected newest first, so equal ranks keep the most recent checkout on top.
pub fn rank_by_priority<'a, I>(events: I, keys: &[String]) -> Vec<PriorityRanked>
where
    I: IntoIterator<Item = &'a CheckoutEvent>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut ranked: Vec<PriorityRanked> = events
        .into_iter()
        .filter(|event| seen.insert(event.branch_name.clone()))
        .map(|event| PriorityRanked {
            label: event.relative_time.clone(),
            rank: adjusted_rank(event, keys),
            branch_name: event.branch_name.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| b.rank.cmp(&a.rank));
    ranked
}
