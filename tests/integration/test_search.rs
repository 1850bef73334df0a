use crate::common::TempRepo;

#[test]
fn search_includes_never_checked_out_branches() {
    let repo = TempRepo::new();

    repo.create_branch("feature-login");
    repo.checkout_new_branch("feature-signup");
    repo.checkout("main");

    let (code, stdout, _) = repo.gn(&["search", "feature"]);

    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "Output: {}", stdout);
    assert!(lines[0].ends_with("feature-signup"));
    assert!(lines[1].starts_with("never"));
    assert!(lines[1].ends_with("feature-login"));
}

#[test]
fn search_regex_flag() {
    let repo = TempRepo::new();

    repo.create_branch("feature-login");
    repo.create_branch("feature-signup");
    repo.create_branch("fix-signup");

    let (code, stdout, _) = repo.gn(&["branch:search", "-r", "^feature-s"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 1, "Output: {}", stdout);
    assert!(stdout.contains("feature-signup"));
}

#[test]
fn search_substring_is_literal() {
    let repo = TempRepo::new();

    repo.create_branch("feature-login");

    let (code, stdout, _) = repo.gn(&["search", "^feature"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("No matching branches found."));
}

#[test]
fn search_no_match() {
    let repo = TempRepo::new();

    let (code, stdout, _) = repo.gn(&["search", "nothing-like-this"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("No matching branches found."));
}

#[test]
fn search_invalid_regex() {
    let repo = TempRepo::new();

    let (code, _, stderr) = repo.gn(&["search", "--regex", "[unclosed"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("invalid search pattern"), "Stderr: {}", stderr);
}
