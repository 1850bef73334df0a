use git2::{BranchType, Repository, Sort};
use time::OffsetDateTime;

/// Open the repository from the current directory (or any parent).
pub fn get_repo() -> Result<Repository, git2::Error> {
    Repository::discover(".")
}

/// Get the current branch name.
pub fn get_branch_name(repo: &Repository) -> Option<String> {
    repo.head().ok()?.shorthand().map(String::from)
}

/// Check if a local branch with this name exists.
pub fn branch_exists(repo: &Repository, name: &str) -> bool {
    repo.find_branch(name, BranchType::Local).is_ok()
}

/// Commit activity of one branch since a cut-off.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchActivity {
    pub name: String,
    pub is_remote: bool,
    pub commit_count: usize,
    pub latest_commit: String,
    pub latest_commit_at: Option<OffsetDateTime>,
}

/// Local and remote branches with the number of commits made after `cutoff`,
/// busiest first, at most `limit` of them.
pub fn active_branches(
    repo: &Repository,
    cutoff: OffsetDateTime,
    limit: usize,
) -> Result<Vec<BranchActivity>, git2::Error> {
    let cutoff = cutoff.unix_timestamp();
    let mut activities = Vec::new();

    for entry in repo.branches(None)? {
        let (branch, kind) = entry?;
        let Some(name) = branch.name()?.map(String::from) else {
            continue;
        };
        // Symbolic refs such as origin/HEAD have no direct target
        let Some(tip) = branch.get().target() else {
            continue;
        };

        let mut walk = repo.revwalk()?;
        walk.set_sorting(Sort::TIME)?;
        walk.push(tip)?;

        let mut activity = BranchActivity {
            name,
            is_remote: matches!(kind, BranchType::Remote),
            commit_count: 0,
            latest_commit: String::new(),
            latest_commit_at: None,
        };

        for oid in walk {
            let commit = repo.find_commit(oid?)?;
            let when = commit.time().seconds();
            if when <= cutoff {
                break;
            }

            activity.commit_count += 1;
            if activity.latest_commit_at.map_or(true, |t| when > t.unix_timestamp()) {
                activity.latest_commit = commit.summary().unwrap_or_default().to_string();
                activity.latest_commit_at = OffsetDateTime::from_unix_timestamp(when).ok();
            }
        }

        activities.push(activity);
    }

    activities.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));
    activities.truncate(limit);

    Ok(activities)
}
