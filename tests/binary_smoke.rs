use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn treeops() -> Command {
    Command::cargo_bin("treeops").expect("binary builds")
}

#[test]
fn copy_subcommand_copies_a_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("src");
    src.child("x.txt").write_str("hi").unwrap();
    let dst = temp.path().join("dst");

    treeops()
        .arg("copy")
        .arg(src.path())
        .arg(&dst)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(dst.join("x.txt")).unwrap(), "hi");
    assert!(src.path().exists());
}

#[test]
fn move_subcommand_removes_source() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("f.txt");
    src.write_str("payload").unwrap();
    let dst = temp.path().join("moved.txt");

    treeops()
        .arg("move")
        .arg(src.path())
        .arg(&dst)
        .assert()
        .success();

    assert!(!src.path().exists());
    assert_eq!(std::fs::read_to_string(&dst).unwrap(), "payload");
}

#[test]
fn purge_missing_dir_exits_zero() {
    let temp = assert_fs::TempDir::new().unwrap();
    treeops()
        .arg("purge")
        .arg(temp.path().join("not-here"))
        .assert()
        .success();
}

#[test]
fn list_prints_entries() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("one.txt").touch().unwrap();
    temp.child("sub/two.txt").touch().unwrap();

    treeops()
        .arg("list")
        .arg(temp.path())
        .arg("--recursive")
        .assert()
        .success()
        .stdout(predicate::str::contains("one.txt").and(predicate::str::contains("two.txt")));
}

#[test]
fn copy_missing_source_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    treeops()
        .arg("copy")
        .arg(temp.path().join("ghost"))
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
