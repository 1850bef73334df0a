//! Issue search over the Jira REST API.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use super::{JiraCredentials, JiraError};

const TIMEOUT: Duration = Duration::from_secs(10);

/// Open issues assigned to the authenticated user in the running sprints.
const ACTIVE_ISSUES_JQL: &str = "assignee = currentUser() AND sprint in openSprints() AND \
     statusCategory IN (\"To Do\", \"In Progress\") ORDER BY updated DESC";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
struct Issue {
    key: String,
}

/// Fetch the keys (e.g. `ABC-123`) of the user's active issues, most recently updated first.
pub fn fetch_issue_keys(credentials: &JiraCredentials) -> Result<Vec<String>, JiraError> {
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(TIMEOUT))
        .build()
        .new_agent();

    let url = format!("{}/rest/api/3/search", credentials.base_url());
    let mut response = agent
        .get(&url)
        .query("jql", ACTIVE_ISSUES_JQL)
        .query("fields", "id,key")
        .query("maxResults", "100")
        .header("Authorization", &basic_auth(credentials))
        .header("Accept", "application/json")
        .call()?;

    let body = response.body_mut().read_to_string()?;
    parse_search_response(&body)
}

fn basic_auth(credentials: &JiraCredentials) -> String {
    let pair = format!("{}:{}", credentials.email, credentials.api_token);
    format!("Basic {}", STANDARD.encode(pair))
}

fn parse_search_response(body: &str) -> Result<Vec<String>, JiraError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.issues.into_iter().map(|issue| issue.key).collect())
}
