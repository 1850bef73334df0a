use crate::common::TempRepo;

fn listed(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .map(String::from)
        .collect()
}

#[test]
fn recent_shows_branches_newest_first() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("branch1");
    repo.checkout("main");
    repo.checkout_new_branch("branch2");
    repo.checkout("main");

    let (code, stdout, _) = repo.gn(&["recent"]);

    assert_eq!(code, 0);
    assert_eq!(listed(&stdout), vec!["branch2", "branch1"], "Output: {}", stdout);
}

#[test]
fn recent_leaves_out_current_branch() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("feature");
    repo.checkout("main");
    repo.checkout("feature");

    let (code, stdout, _) = repo.gn(&["branch:recent"]);

    assert_eq!(code, 0);
    assert_eq!(listed(&stdout), vec!["main"], "Output: {}", stdout);
}

#[test]
fn recent_count_flag() {
    let repo = TempRepo::new();

    for i in 1..=5 {
        repo.checkout_new_branch(&format!("branch{}", i));
        repo.checkout("main");
    }

    let (code, stdout, _) = repo.gn(&["recent", "-c", "3"]);

    assert_eq!(code, 0);
    assert_eq!(listed(&stdout), vec!["branch5", "branch4", "branch3"]);
}

#[test]
fn recent_count_from_config() {
    let repo = TempRepo::new();
    repo.write_config("[ranking]\nrecent_limit = 2\n");

    for i in 1..=4 {
        repo.checkout_new_branch(&format!("branch{}", i));
        repo.checkout("main");
    }

    let (code, stdout, _) = repo.gn(&["recent"]);

    assert_eq!(code, 0);
    assert_eq!(listed(&stdout).len(), 2);
}

#[test]
fn recent_skips_deleted_branches() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("gone");
    repo.checkout("main");
    repo.checkout_new_branch("kept");
    repo.checkout("main");
    repo.delete_branch("gone");

    let (code, stdout, _) = repo.gn(&["recent"]);

    assert_eq!(code, 0);
    assert_eq!(listed(&stdout), vec!["kept"]);
}

#[test]
fn recent_exclude_flag() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("wip-spike");
    repo.checkout("main");
    repo.checkout_new_branch("feature");
    repo.checkout("main");

    let (code, stdout, _) = repo.gn(&["recent", "--exclude", "^wip-"]);

    assert_eq!(code, 0);
    assert_eq!(listed(&stdout), vec!["feature"]);
}

#[test]
fn recent_invalid_exclude_pattern() {
    let repo = TempRepo::new();

    let (code, _, stderr) = repo.gn(&["recent", "-e", "("]);

    assert_eq!(code, 1);
    assert!(stderr.contains("invalid exclude pattern"), "Stderr: {}", stderr);
}

#[test]
fn recent_no_history_falls_back_to_current_branch() {
    let repo = TempRepo::new();

    let (code, stdout, _) = repo.gn(&["recent"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("current"), "Output: {}", stdout);
    assert_eq!(listed(&stdout), vec!["main"]);
}

#[test]
fn recent_with_unconfigured_jira_keeps_recency_order() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("ABC-1-old");
    repo.checkout("main");
    repo.checkout_new_branch("ABC-2-new");
    repo.checkout("main");

    let (code, stdout, _) = repo.gn(&["recent", "--jira"]);

    assert_eq!(code, 0);
    assert_eq!(listed(&stdout), vec!["ABC-2-new", "ABC-1-old"], "Output: {}", stdout);
}

#[test]
fn recent_outside_repository_fails() {
    let repo = TempRepo::new();
    let outside = tempfile::TempDir::new().unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_git-ninja"))
        .arg("recent")
        .current_dir(outside.path())
        .env("HOME", repo.home.path())
        .env("XDG_CONFIG_HOME", repo.home.path().join(".config"))
        .env("GIT_CEILING_DIRECTORIES", outside.path().parent().unwrap())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("git-ninja:"));
}
