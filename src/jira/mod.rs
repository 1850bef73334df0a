//! Issue tracker integration
//!
//! Supplies the keys of the user's open issues so branch listings can put
//! matching branches first. Unconfigured or unreachable trackers yield no keys.

pub mod cache;
pub mod client;

use sha2::{Digest, Sha256};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, warn};

pub use cache::{CacheFile, IssueCache};

#[derive(Error, Debug)]
pub enum JiraError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    NoHomeDir,

    #[error("JIRA_SUBDOMAIN, JIRA_EMAIL_ADDRESS and JIRA_API_TOKEN environment variables must be set")]
    NotConfigured,
}

/// Credentials taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraCredentials {
    pub subdomain: String,
    pub email: String,
    pub api_token: String,
}

impl JiraCredentials {
    /// `None` unless all three variables are set and non-empty.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Some(Self {
            subdomain: var("JIRA_SUBDOMAIN")?,
            email: var("JIRA_EMAIL_ADDRESS")?,
            api_token: var("JIRA_API_TOKEN")?,
        })
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.atlassian.net", self.subdomain)
    }

    /// SHA-256 of the credentials; a change invalidates the cache.
    pub fn fingerprint(&self) -> String {
        let joined = format!("{}{}{}", self.subdomain, self.email, self.api_token);
        format!("{:x}", Sha256::digest(joined.as_bytes()))
    }
}

/// Cached-or-fetched issue keys.
///
/// The cache is held locked for the whole read-fetch-write sequence. A failed
/// fetch falls back to whatever the cache holds, stale or not.
pub fn active_issue_keys<F>(
    credentials: &JiraCredentials,
    cache: &CacheFile,
    now: OffsetDateTime,
    fetch: F,
) -> Result<Vec<String>, JiraError>
where
    F: FnOnce(&JiraCredentials) -> Result<Vec<String>, JiraError>,
{
    let fingerprint = credentials.fingerprint();
    let lock = cache.lock()?;

    let cached = match cache.read(&lock) {
        Ok(cached) => Some(cached),
        Err(e) => {
            debug!(error = %e, "no usable issue cache");
            None
        }
    };

    if let Some(cached) = cached.as_ref().filter(|c| c.is_fresh(&fingerprint, now)) {
        debug!(count = cached.issue_ids.len(), "using cached issue keys");
        return Ok(cached.issue_ids.clone());
    }

    let keys = match fetch(credentials) {
        Ok(keys) => keys,
        Err(e) => match cached {
            Some(stale) => {
                warn!(error = %e, "issue fetch failed, using stale cache");
                return Ok(stale.issue_ids);
            }
            None => return Err(e),
        },
    };

    let fresh = IssueCache {
        timestamp: now.unix_timestamp(),
        jira_hash: fingerprint,
        issue_ids: keys.clone(),
    };
    if let Err(e) = cache.write(&lock, &fresh) {
        warn!(error = %e, path = %cache.path().display(), "failed to write issue cache");
    }

    Ok(keys)
}

/// Issue keys for ranking. Never fails: unconfigured or broken integrations give no keys.
pub fn priority_keys(now: OffsetDateTime) -> Vec<String> {
    let Some(credentials) = JiraCredentials::from_env() else {
        debug!("issue tracker not configured");
        return Vec::new();
    };

    let result = CacheFile::in_home()
        .and_then(|cache| active_issue_keys(&credentials, &cache, now, client::fetch_issue_keys));

    match result {
        Ok(keys) => keys,
        Err(e) => {
            warn!(error = %e, "could not load issue keys");
            Vec::new()
        }
    }
}
