use patch_credits::scanner::scan_patches;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_patch(root: &Path, relative: &str, subject: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("From: Jane Doe <jane@example.com>\nSubject: [PATCH] {subject}\n"))
        .unwrap();
}

fn subjects(root: &Path) -> Vec<String> {
    let mut subjects: Vec<String> =
        scan_patches(root).records.into_iter().map(|r| r.subject).collect();
    subjects.sort();
    subjects
}

#[test_log::test]
fn test_scan_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_patch(root, "core/0001-fix.patch", "Fix");
    write_patch(root, "core/nested/deeper/0002-deep.patch", "Deep");
    write_patch(root, "top.patch", "Top");

    let report = scan_patches(root);
    assert_eq!(report.records.len(), 3);
    assert!(report.failures.is_empty());

    let deep = report.records.iter().find(|r| r.subject == "Deep").unwrap();
    assert_eq!(deep.group, "deeper");
    let fix = report.records.iter().find(|r| r.subject == "Fix").unwrap();
    assert_eq!(fix.group, "core");
}

#[test_log::test]
fn test_only_patch_suffix_is_parsed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_patch(root, "core/0001-a.patch", "A");
    write_patch(root, "core/0002-b.PATCH", "B");
    write_patch(root, "core/0003-c.patch.orig", "C");
    write_patch(root, "core/README.md", "D");
    fs::create_dir_all(root.join("core/dir.patch")).unwrap();

    assert_eq!(subjects(root), vec!["A"]);
}

#[test_log::test]
fn test_removed_directories_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_patch(root, "core/0001-kept.patch", "Kept");
    write_patch(root, "removed/old/0001-x.patch", "Removed lower");
    write_patch(root, "core/REMOVED/0002-y.patch", "Removed upper");
    write_patch(root, "core/Removed/0003-z.patch", "Removed mixed");
    write_patch(root, "core/removed-later/0004-w.patch", "Not removed");

    assert_eq!(subjects(root), vec!["Kept", "Not removed"]);
}

#[test_log::test]
fn test_file_named_removed_is_not_a_directory_rule() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_patch(root, "core/removed.patch", "File called removed");

    assert_eq!(subjects(root), vec!["File called removed"]);
}

#[test_log::test]
fn test_bad_file_does_not_abort_scan() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_patch(root, "core/0001-good.patch", "Good");
    fs::write(root.join("core/0002-bad.patch"), "From: =?X-NOPE?Q?x?= <x@example.com>\n").unwrap();
    fs::write(root.join("core/0003-binary.patch"), b"Subject: \xff\xfe\n").unwrap();
    write_patch(root, "core/0004-also-good.patch", "Also good");

    let report = scan_patches(root);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.failures.len(), 2);
    assert!(report.failures.iter().any(|f| f.path.ends_with("0002-bad.patch")));
    assert!(report.failures.iter().any(|f| f.path.ends_with("0003-binary.patch")));
}

#[test_log::test]
fn test_missing_root_yields_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    let report = scan_patches(temp_dir.path().join("does-not-exist"));

    assert!(report.is_empty());
    assert!(report.failures.is_empty());
}

#[test_log::test]
fn test_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("core/empty")).unwrap();

    assert!(scan_patches(temp_dir.path()).is_empty());
}

#[test_log::test]
fn test_encounter_order_is_depth_first_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_patch(root, "b/0001.patch", "b1");
    write_patch(root, "a/z/0001.patch", "az1");
    write_patch(root, "a/0002.patch", "a2");
    write_patch(root, "a/0001.patch", "a1");

    let order: Vec<String> = scan_patches(root).records.into_iter().map(|r| r.subject).collect();
    assert_eq!(order, vec!["a1", "a2", "az1", "b1"]);
}
