//! Tests for the integration file primitives

use pods_fs::NormalizedPath;
use pods_fs::io::{copy_overwrite, copy_tree, list_dir, move_replace, read_text, write_text};
use std::fs;
use tempfile::TempDir;

fn root(temp: &TempDir) -> NormalizedPath {
    NormalizedPath::new(temp.path())
}

#[test]
fn test_write_atomic_creates_parents() {
    let temp = TempDir::new().unwrap();
    let path = root(&temp).join("a/b/Podfile");

    write_text(&path, "platform :ios, '8.0'\n").unwrap();

    assert_eq!(read_text(&path).unwrap(), "platform :ios, '8.0'\n");
    let leftovers: Vec<_> = fs::read_dir(temp.path().join("a/b"))
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp file should be renamed away");
}

#[test]
fn test_move_replace_discards_existing_destination() {
    let temp = TempDir::new().unwrap();
    let base = root(&temp);
    let src = base.join("Pods/Foo.framework");
    let dest = base.join("Frameworks/Foo.framework");
    write_text(&src.join("Foo"), "new binary").unwrap();
    write_text(&dest.join("Stale"), "old").unwrap();

    move_replace(&src, &dest).unwrap();

    assert!(!src.exists());
    assert_eq!(read_text(&dest.join("Foo")).unwrap(), "new binary");
    assert!(!dest.join("Stale").exists(), "replace must not merge");
}

#[test]
fn test_copy_overwrite_replaces_file() {
    let temp = TempDir::new().unwrap();
    let base = root(&temp);
    let src = base.join("in/icon.png");
    let dest = base.join("out/icon.png");
    write_text(&src, "v2").unwrap();
    write_text(&dest, "v1").unwrap();

    copy_overwrite(&src, &dest).unwrap();

    assert_eq!(read_text(&dest).unwrap(), "v2");
    assert!(src.exists(), "copy keeps the source");
}

#[test]
fn test_copy_tree_is_recursive() {
    let temp = TempDir::new().unwrap();
    let base = root(&temp);
    write_text(&base.join("src/a.txt"), "a").unwrap();
    write_text(&base.join("src/nested/b.txt"), "b").unwrap();

    copy_tree(&base.join("src"), &base.join("dst")).unwrap();

    assert_eq!(read_text(&base.join("dst/a.txt")).unwrap(), "a");
    assert_eq!(read_text(&base.join("dst/nested/b.txt")).unwrap(), "b");
}

#[test]
fn test_list_dir_sorted() {
    let temp = TempDir::new().unwrap();
    let base = root(&temp);
    for name in ["c", "a", "b"] {
        write_text(&base.join(name), name).unwrap();
    }

    let names: Vec<String> = list_dir(&base)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}
