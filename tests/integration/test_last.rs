use crate::common::TempRepo;

#[test]
fn last_prints_previous_branch() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("dev");
    repo.checkout("main");

    let (code, stdout, _) = repo.gn(&["last"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "dev");
}

#[test]
fn last_follows_latest_checkout() {
    let repo = TempRepo::new();

    repo.checkout_new_branch("dev");
    repo.checkout_new_branch("feature");
    repo.checkout("main");
    repo.checkout("dev");

    let (code, stdout, _) = repo.gn(&["branch:last"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "main");
}

#[test]
fn last_without_checkouts_fails() {
    let repo = TempRepo::new();

    let (code, stdout, stderr) = repo.gn(&["last"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("no checkout entries found"), "Stderr: {}", stderr);
}
