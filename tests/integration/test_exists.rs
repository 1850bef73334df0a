use crate::common::TempRepo;

#[test]
fn exists_for_local_branch() {
    let repo = TempRepo::new();
    repo.create_branch("feature");

    let (code, _, _) = repo.gn(&["branch:exists", "feature"]);
    assert_eq!(code, 0);

    let (code, _, _) = repo.gn(&["branch:exists", "main"]);
    assert_eq!(code, 0);
}

#[test]
fn exists_fails_for_unknown_branch() {
    let repo = TempRepo::new();

    let (code, stdout, _) = repo.gn(&["branch:exists", "nope"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
}

#[test]
fn exists_fails_for_deleted_branch() {
    let repo = TempRepo::new();
    repo.create_branch("temp");
    repo.delete_branch("temp");

    let (code, _, _) = repo.gn(&["branch:exists", "temp"]);

    assert_eq!(code, 1);
}
