//! Integration tests for stagekit-core.
//!
//! These tests verify end-to-end workflows with real filesystem operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use stagekit_core::StageError;
use stagekit_core::archive::ZipSink;
use stagekit_core::archive_tree;
use stagekit_core::copy_by_suffix;
use std::fs;
use std::fs::File;
use std::io::Cursor;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_stage_then_pack_workflow() {
    // Typical CI flow: stage compiled artifacts, then zip the staging dir.
    let build = TempDir::new().unwrap();
    fs::write(build.path().join("engine.dll"), "code").unwrap();
    fs::write(build.path().join("engine.pdb"), "symbols").unwrap();
    fs::write(build.path().join("build.log"), "noise").unwrap();

    let stage = TempDir::new().unwrap();
    let bin_dir = stage.path().join("bin");
    copy_by_suffix(build.path(), ".dll", &bin_dir).unwrap();
    copy_by_suffix(build.path(), ".pdb", &bin_dir).unwrap();

    let out = TempDir::new().unwrap();
    let zip_path = out.path().join("release.zip");
    let file = File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    {
        let mut sink = ZipSink::new(&mut writer);
        let report = archive_tree(stage.path(), &mut sink).unwrap();
        assert_eq!(report.files_added, 2);
    }
    writer.finish().unwrap();

    let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["bin/engine.dll", "bin/engine.pdb"]);
}

#[test]
fn test_copy_spec_scenario_log_suffix() {
    // D contains x.log, y.log, z.txt; copying ".log" yields exactly
    // x.log and y.log.
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("x.log"), "x").unwrap();
    fs::write(source.path().join("y.log"), "y").unwrap();
    fs::write(source.path().join("z.txt"), "z").unwrap();

    let target = TempDir::new().unwrap();
    let report = copy_by_suffix(source.path(), ".log", target.path()).unwrap();

    assert_eq!(report.files_copied, 2);

    let mut staged: Vec<String> = fs::read_dir(target.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    staged.sort();
    assert_eq!(staged, vec!["x.log", "y.log"]);
}

#[test]
fn test_copy_preserves_exact_bytes() {
    let source = TempDir::new().unwrap();
    let payload: Vec<u8> = (0..200_000).map(|i| (i % 251) as u8).collect();
    fs::write(source.path().join("blob.dat"), &payload).unwrap();

    let target = TempDir::new().unwrap();
    copy_by_suffix(source.path(), ".dat", target.path()).unwrap();

    assert_eq!(fs::read(target.path().join("blob.dat")).unwrap(), payload);
}

#[test]
fn test_archive_spec_scenario_empty_subdirectory() {
    // root/a.txt, root/sub/b.txt, root/sub/empty/ archives to exactly
    // two entries: a.txt and sub/b.txt.
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::create_dir_all(root.join("sub/empty")).unwrap();
    fs::write(root.join("sub/b.txt"), "b").unwrap();

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(&mut cursor);
    {
        let mut sink = ZipSink::new(&mut writer);
        let report = archive_tree(root, &mut sink).unwrap();
        assert_eq!(report.files_added, 2);
    }
    writer.finish().unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
    assert_eq!(archive.len(), 2);
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.txt", "sub/b.txt"]);
}

#[test]
fn test_archive_root_with_trailing_separator() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/file.txt"), "content").unwrap();

    let with_sep = PathBuf::from(format!("{}/", root.display()));

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(&mut cursor);
    {
        let mut sink = ZipSink::new(&mut writer);
        archive_tree(&with_sep, &mut sink).unwrap();
    }
    writer.finish().unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
    let mut entry = archive.by_name("sub/file.txt").unwrap();
    let mut contents = String::new();
    entry.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "content");
}

#[test]
fn test_archive_deeply_nested_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let deep = root.join("a/b/c/d/e");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("leaf.txt"), "leaf").unwrap();
    fs::write(root.join("top.txt"), "top").unwrap();

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(&mut cursor);
    {
        let mut sink = ZipSink::new(&mut writer);
        let report = archive_tree(root, &mut sink).unwrap();
        assert_eq!(report.files_added, 2);
    }
    writer.finish().unwrap();

    let archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    assert!(names.contains(&"a/b/c/d/e/leaf.txt"));
    assert!(names.contains(&"top.txt"));
}

#[test]
fn test_copy_directory_entry_aborts_with_typed_error() {
    let source = TempDir::new().unwrap();
    fs::create_dir(source.path().join("dir.log")).unwrap();
    fs::write(source.path().join("plain.log"), "ok").unwrap();

    let target = TempDir::new().unwrap();
    let result = copy_by_suffix(source.path(), ".log", target.path());

    match result {
        Err(StageError::ExpectedFile { path }) => {
            assert!(path.ends_with("dir.log"));
        }
        other => panic!("expected ExpectedFile error, got {other:?}"),
    }
}

#[test]
fn test_missing_paths_surface_typed_errors() {
    let target = TempDir::new().unwrap();

    let copy_err = copy_by_suffix(Path::new("/no/such/dir"), ".log", target.path());
    assert!(matches!(copy_err, Err(StageError::SourceNotFound { .. })));

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(&mut cursor);
    let mut sink = ZipSink::new(&mut writer);
    let pack_err = archive_tree(Path::new("/no/such/tree"), &mut sink);
    assert!(matches!(pack_err, Err(StageError::SourceNotFound { .. })));
}
