use crate::common::TempRepo;

#[test]
fn checkout_switches_branch() {
    let repo = TempRepo::new();
    repo.create_branch("feature");

    let (code, _, _) = repo.gn(&["checkout", "feature"]);

    assert_eq!(code, 0);
    assert_eq!(repo.current_branch(), "feature");
}

#[test]
fn checkout_alias_co() {
    let repo = TempRepo::new();
    repo.create_branch("feature");

    let (code, _, _) = repo.gn(&["co", "feature"]);

    assert_eq!(code, 0);
    assert_eq!(repo.current_branch(), "feature");
}

#[test]
fn checkout_unknown_branch_fails() {
    let repo = TempRepo::new();

    let (code, _, _) = repo.gn(&["co", "missing"]);

    assert_ne!(code, 0);
    assert_eq!(repo.current_branch(), "main");
}

#[test]
fn checkout_with_pull() {
    let repo = TempRepo::with_remote();

    repo.checkout_new_branch("feature");
    repo.commit("Feature work");
    repo.run_git(&["push", "-u", "origin", "feature"]);
    repo.checkout("main");

    let (code, _, _) = repo.gn(&["co", "feature", "--pull"]);

    assert_eq!(code, 0);
    assert_eq!(repo.current_branch(), "feature");
}

#[test]
fn checkout_shows_up_in_recent() {
    let repo = TempRepo::new();
    repo.create_branch("feature");

    repo.gn(&["co", "feature"]);
    repo.gn(&["co", "main"]);

    let (code, stdout, _) = repo.gn(&["recent"]);

    assert_eq!(code, 0);
    assert!(stdout.trim_end().ends_with("feature"), "Output: {}", stdout);
}
