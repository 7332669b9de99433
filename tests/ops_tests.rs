use assert_fs::prelude::*;
use filekit::{Error, ops, query};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;

fn path_str(child: &assert_fs::fixture::ChildPath) -> String {
    child.path().to_string_lossy().into_owned()
}

#[test]
fn test_create_dir_is_recursive() {
    let temp = assert_fs::TempDir::new().unwrap();
    let nested = temp.child("a/b/c");

    ops::create_dir(nested.path(), 0).unwrap();

    nested.assert(predicate::path::is_dir());
}

#[cfg(unix)]
#[test]
fn test_create_dir_applies_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp = assert_fs::TempDir::new().unwrap();
    let dir = temp.child("locked");

    ops::create_dir(dir.path(), 0o700).unwrap();

    let mode = fs::metadata(dir.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o700);
}

#[test]
fn test_delete_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("doomed.txt");
    file.touch().unwrap();

    ops::delete_file(file.path()).unwrap();

    file.assert(predicate::path::missing());
}

#[test]
fn test_delete_file_missing_is_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let result = ops::delete_file(temp.child("absent.txt").path());
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_delete_matching_uses_glob_syntax() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.log").touch().unwrap();
    temp.child("b.log").touch().unwrap();
    temp.child("keep.txt").touch().unwrap();

    let pattern = format!("{}/*.log", temp.path().to_string_lossy());
    ops::delete_matching(&pattern).unwrap();

    temp.child("a.log").assert(predicate::path::missing());
    temp.child("b.log").assert(predicate::path::missing());
    temp.child("keep.txt").assert(predicate::path::exists());
}

#[test]
fn test_delete_matching_invalid_glob() {
    let result = ops::delete_matching("[era/*");
    assert!(matches!(result, Err(Error::InvalidGlob { .. })));
}

#[test]
fn test_delete_dir_removes_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("tree");
    root.child("sub").create_dir_all().unwrap();
    root.child("sub/leaf.txt").touch().unwrap();

    ops::delete_dir(root.path()).unwrap();

    root.assert(predicate::path::missing());
}

#[test]
fn test_rename_file_moves_content() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("old.txt");
    source.write_str("payload").unwrap();
    let target = temp.child("new.txt");

    ops::rename_file(&path_str(&source), &path_str(&target)).unwrap();

    source.assert(predicate::path::missing());
    target.assert("payload");
}

#[test]
fn test_rename_file_onto_itself_is_noop() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("same.txt");
    file.write_str("unchanged").unwrap();

    ops::rename_file(&path_str(&file), &path_str(&file)).unwrap();

    file.assert("unchanged");
}

#[test]
fn test_rename_file_ignores_trailing_separators() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("same.txt");
    file.write_str("unchanged").unwrap();

    let with_slash = format!("{}/", path_str(&file));
    ops::rename_file(&path_str(&file), &with_slash).unwrap();

    file.assert("unchanged");
}

#[test]
fn test_rename_file_overwrites_existing_target() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("new_version.txt");
    source.write_str("new").unwrap();
    let target = temp.child("config.txt");
    target.write_str("old").unwrap();

    ops::rename_file(&path_str(&source), &path_str(&target)).unwrap();

    source.assert(predicate::path::missing());
    target.assert("new");
}

#[test]
fn test_rename_file_missing_source() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("absent.txt");
    let target = temp.child("target.txt");

    let result = ops::rename_file(&path_str(&source), &path_str(&target));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_move_file_is_rename_alias() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("from.txt");
    source.write_str("moved").unwrap();
    let target = temp.child("to.txt");

    ops::move_file(&path_str(&source), &path_str(&target)).unwrap();

    source.assert(predicate::path::missing());
    target.assert("moved");
}

#[test]
fn test_copy_file_yields_identical_bytes() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("source.bin");
    source.write_binary(&[0u8, 1, 2, 253, 254, 255]).unwrap();
    let target = temp.child("copy.bin");

    let copied = ops::copy_file(source.path(), target.path()).unwrap();

    assert_eq!(copied, 6);
    assert_eq!(
        fs::read(source.path()).unwrap(),
        fs::read(target.path()).unwrap()
    );
}

#[test]
fn test_copy_then_delete_source_leaves_only_target() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("source.txt");
    source.write_str("content").unwrap();
    let target = temp.child("copy.txt");

    ops::copy_file(source.path(), target.path()).unwrap();
    ops::delete_file(source.path()).unwrap();

    assert!(!query::file_exists(source.path()));
    target.assert("content");
}

#[test]
fn test_copy_file_rejects_directory_source() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dir = temp.child("a_directory");
    dir.create_dir_all().unwrap();

    let result = ops::copy_file(dir.path(), temp.child("copy").path());
    assert!(matches!(result, Err(Error::NotRegularFile { .. })));
}

#[test]
fn test_copy_file_missing_source() {
    let temp = assert_fs::TempDir::new().unwrap();
    let result = ops::copy_file(temp.child("absent").path(), temp.child("copy").path());
    assert!(matches!(result, Err(Error::Io { .. })));
}
