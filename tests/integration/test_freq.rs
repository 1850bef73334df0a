use crate::common::TempRepo;

/// Check out `branch` and come back to main, `times` times.
fn visit(repo: &TempRepo, branch: &str, times: usize) {
    for _ in 0..times {
        repo.checkout(branch);
        repo.checkout("main");
    }
}

#[test]
fn freq_ranks_busy_branch_first() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("feature-hot");
    repo.create_file("hot.txt", "hot");
    repo.commit("Work on hot feature");
    repo.checkout("main");
    repo.create_branch("feature-cold");

    visit(&repo, "feature-hot", 2);
    visit(&repo, "feature-cold", 1);

    let (code, stdout, _) = repo.gn(&["freq"]);

    assert_eq!(code, 0);
    let first = stdout.lines().next().unwrap_or_default();
    assert!(first.contains(" 3 checkouts"), "Output: {}", stdout);
    assert!(first.ends_with("feature-hot"), "Output: {}", stdout);
    assert!(stdout.contains("feature-cold"));
}

#[test]
fn freq_count_flag() {
    let repo = TempRepo::new();

    for i in 1..=4 {
        repo.checkout_new_branch(&format!("branch{}", i));
        repo.checkout("main");
    }

    let (code, stdout, _) = repo.gn(&["branch:freq", "-c", "2"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 2, "Output: {}", stdout);
}

#[test]
fn freq_skips_deleted_branches() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("gone");
    repo.checkout("main");
    repo.delete_branch("gone");

    let (code, stdout, _) = repo.gn(&["freq"]);

    assert_eq!(code, 0);
    assert!(!stdout.contains("gone"), "Output: {}", stdout);
}

#[test]
fn freq_no_history_falls_back_to_current_branch() {
    let repo = TempRepo::new();

    let (code, stdout, _) = repo.gn(&["freq"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("current"), "Output: {}", stdout);
    assert!(stdout.trim_end().ends_with("main"));
}

#[test]
fn freq_rejects_inverted_windows() {
    let repo = TempRepo::new();

    let (code, _, stderr) = repo.gn(&["freq", "--recent-days", "10", "--older-days", "5"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("older_days"), "Stderr: {}", stderr);
}

#[test]
fn freq_rejects_invalid_config_file() {
    let repo = TempRepo::new();
    repo.write_config("[ranking]\nrecent_days = 0\n");

    let (code, _, stderr) = repo.gn(&["freq"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("recent_days"), "Stderr: {}", stderr);
}

#[test]
fn freq_rejects_window_beyond_supported_dates() {
    let repo = TempRepo::new();

    let (code, _, stderr) = repo.gn(&["freq", "--older-days", "5000000"]);

    assert_eq!(code, 1);
    assert!(stderr.starts_with("git-ninja:"), "Stderr: {}", stderr);
    assert!(stderr.contains("older_days"), "Stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
}

#[test]
fn freq_rejects_huge_window_in_config_file() {
    let repo = TempRepo::new();
    repo.write_config("[ranking]\nolder_days = 5000000\n");

    let (code, _, stderr) = repo.gn(&["freq"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("older_days"), "Stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
}
