use std::collections::HashSet;

/// Names of the local branches that currently exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchSet {
    names: HashSet<String>,
}

impl BranchSet {
    /// Build from `git branch --list` output. The `*` marking the current
    /// branch, the `+` marking a branch checked out in another worktree and
    /// surrounding whitespace are stripped, blank lines dropped.
    pub fn from_branch_list(output: &str) -> Self {
        let names = output
            .lines()
            .map(|line| line.trim().trim_start_matches(|c: char| c == '*' || c == '+').trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        Self { names }
    }

    pub fn contains(&self, branch: &str) -> bool {
        self.names.contains(branch)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for BranchSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
