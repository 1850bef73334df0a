//! On-disk cache of open issue keys
//!
//! Location: ~/.gitninja.jira-cache.json, guarded by a sibling `.lock` file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use super::JiraError;

/// Cached keys older than this are refreshed.
pub const CACHE_TTL: Duration = Duration::minutes(5);

const CACHE_FILE_NAME: &str = ".gitninja.jira-cache.json";

/// Contents of the cache file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCache {
    /// Unix seconds at which the keys were fetched
    pub timestamp: i64,
    /// Fingerprint of the credentials the keys were fetched with
    pub jira_hash: String,
    pub issue_ids: Vec<String>,
}

impl IssueCache {
    /// Usable without refetching: same credentials and younger than [`CACHE_TTL`].
    pub fn is_fresh(&self, jira_hash: &str, now: OffsetDateTime) -> bool {
        self.jira_hash == jira_hash && now.unix_timestamp() - self.timestamp < CACHE_TTL.whole_seconds()
    }
}

/// Cache file plus its lock file.
#[derive(Debug, Clone)]
pub struct CacheFile {
    path: PathBuf,
    lock_path: PathBuf,
}

/// Held while reading and rewriting the cache. Released on drop.
#[derive(Debug)]
pub struct CacheLock {
    file: File,
}

impl Drop for CacheLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

impl CacheFile {
    /// Cache in the user's home directory.
    pub fn in_home() -> Result<Self, JiraError> {
        let home = dirs::home_dir().ok_or(JiraError::NoHomeDir)?;
        Ok(Self::at(home.join(CACHE_FILE_NAME)))
    }

    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut lock_name = path.file_name().unwrap_or_default().to_os_string();
        lock_name.push(".lock");
        let lock_path = path.with_file_name(lock_name);

        Self { path, lock_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until this process holds the cache exclusively.
    pub fn lock(&self) -> Result<CacheLock, JiraError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&self.lock_path)?;

        file.lock_exclusive()?;
        Ok(CacheLock { file })
    }

    /// Read the cache. Caller should hold the lock.
    pub fn read(&self, _lock: &CacheLock) -> Result<IssueCache, JiraError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the cache contents. Caller should hold the lock.
    pub fn write(&self, _lock: &CacheLock, cache: &IssueCache) -> Result<(), JiraError> {
        let content = serde_json::to_string_pretty(cache)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
