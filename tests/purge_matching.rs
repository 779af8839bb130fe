use assert_fs::prelude::*;
use treeops::{delete_all, delete_matching};

#[test]
fn delete_matching_by_name_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("a.txt").write_str("a")?;
    dir.child("b.txt").write_str("b")?;
    dir.child("sub/inner.txt").write_str("i")?;

    delete_matching(dir.path(), |e| {
        e.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('a'))
    })?;

    assert!(!dir.path().join("a.txt").exists());
    assert!(dir.path().join("b.txt").exists());
    assert!(dir.path().join("sub/inner.txt").exists());
    Ok(())
}

#[test]
fn delete_all_is_idempotent_on_missing_dir() {
    let dir = assert_fs::TempDir::new().unwrap();
    let missing = dir.path().join("never-created");
    assert!(delete_all(&missing).is_ok());
    assert!(delete_all(&missing).is_ok());
}

#[test]
fn delete_all_then_reuse_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("old/deep/file.txt").write_str("x")?;

    delete_all(dir.path())?;
    assert!(dir.path().is_dir());

    // The emptied root is immediately usable again.
    dir.child("new.txt").write_str("y")?;
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}
