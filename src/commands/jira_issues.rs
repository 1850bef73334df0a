use colored::Colorize;
use time::OffsetDateTime;

use crate::config::Theme;
use crate::jira::{self, client, CacheFile, JiraCredentials, JiraError};

pub fn run() -> i32 {
    match run_inner() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-ninja: {}", e);
            1
        }
    }
}

fn run_inner() -> Result<i32, Box<dyn std::error::Error>> {
    let credentials = JiraCredentials::from_env().ok_or(JiraError::NotConfigured)?;
    let cache = CacheFile::in_home()?;
    let theme = Theme::default();

    let keys = jira::active_issue_keys(
        &credentials,
        &cache,
        OffsetDateTime::now_utc(),
        client::fetch_issue_keys,
    )?;

    if keys.is_empty() {
        println!("No open issues.");
        return Ok(0);
    }

    for key in keys {
        println!("{}", key.color(theme.rank));
    }

    Ok(0)
}
