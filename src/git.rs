use std::process::{Command, Stdio};

use thiserror::Error;

/// Reflog line layout shared by the ranking commands: unix seconds, the
/// reflog summary, and the selector (`HEAD@{3 days ago}` with relative dates).
pub const REFLOG_FORMAT: &str = "%at ~ %gs ~ %gd";

#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git {command} failed: {stderr}")]
    Failed { command: String, stderr: String },
}

/// Pass command directly to git, preserving colors and interactivity.
pub fn passthrough(args: &[String]) -> i32 {
    let result = Command::new("git")
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .and_then(|mut child| child.wait());

    match result {
        Ok(status) => status.code().unwrap_or(1),
        Err(e) => {
            eprintln!("git-ninja: failed to run git: {}", e);
            1
        }
    }
}

/// Run git command with string slice args (convenience wrapper).
/// Use this for internal git calls where you don't need to capture output.
pub fn run(args: &[&str]) -> i32 {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    passthrough(&args)
}

/// Run git and capture output (when you need to process it).
/// Note: This loses colors, only use when you need to parse the output.
pub fn capture(args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git").args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(GitError::Failed {
            command: args.first().copied().unwrap_or_default().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Everything the ranking pipeline needs to know about the repository.
///
/// The production implementation shells out to git; tests feed canned output.
pub trait RefSource {
    /// Raw output of `git branch --list`.
    fn list_branches(&self) -> Result<String, GitError>;

    /// Whole-repository reflog, one entry per line, newest first.
    fn reflog(&self, format: &str) -> Result<Vec<String>, GitError>;

    /// Reflog of a single branch, one entry per line, newest first.
    fn branch_reflog(&self, branch: &str, format: &str) -> Result<Vec<String>, GitError>;

    /// Name of the checked out branch.
    fn current_branch(&self) -> Result<String, GitError>;
}

/// [`RefSource`] backed by the `git` binary in the current directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl RefSource for GitCli {
    fn list_branches(&self) -> Result<String, GitError> {
        capture(&["branch", "--list"])
    }

    fn reflog(&self, format: &str) -> Result<Vec<String>, GitError> {
        let pretty = format!("--pretty=format:{}", format);
        let output = capture(&["reflog", "show", &pretty, "--date=relative"])?;
        Ok(split_lines(&output))
    }

    fn branch_reflog(&self, branch: &str, format: &str) -> Result<Vec<String>, GitError> {
        let pretty = format!("--pretty=format:{}", format);
        let output = capture(&["reflog", "show", branch, &pretty, "--date=relative", "--"])?;
        Ok(split_lines(&output))
    }

    fn current_branch(&self) -> Result<String, GitError> {
        capture(&["rev-parse", "--abbrev-ref", "HEAD"])
    }
}

fn split_lines(output: &str) -> Vec<String> {
    output.lines().map(String::from).collect()
}
