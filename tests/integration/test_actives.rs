use crate::common::TempRepo;

#[test]
fn actives_lists_branches_with_fresh_commits() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("feature");
    repo.commit("One");
    repo.commit("Two");

    let (code, stdout, _) = repo.gn(&["actives"]);

    assert_eq!(code, 0);
    let first = stdout.lines().next().unwrap_or_default();
    assert!(first.contains("3 commits"), "Output: {}", stdout);
    assert!(first.contains("feature"));
    assert!(first.ends_with("Two"));
    assert!(stdout.contains("main"));
}

#[test]
fn actives_count_flag() {
    let repo = TempRepo::new();
    repo.create_branch("a");
    repo.create_branch("b");

    let (code, stdout, _) = repo.gn(&["branch:actives", "-c", "1"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 1, "Output: {}", stdout);
}

#[test]
fn actives_hides_quiet_branches() {
    let repo = TempRepo::new();

    let (code, stdout, _) = repo.gn(&["actives", "--hours", "0"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("No branches with commits in the last 0 hours."), "Output: {}", stdout);
}

#[test]
fn actives_rejects_hours_before_supported_dates() {
    let repo = TempRepo::new();

    let (code, _, stderr) = repo.gn(&["actives", "--hours", "4294967295"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("--hours 4294967295"), "Stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
}
