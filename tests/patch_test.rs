use patch_credits::error::Error;
use patch_credits::patch::{parse_patch, parse_patch_file};
use std::fs;
use tempfile::TempDir;

const FIX_PATCH: &str = "\
From 3f2a9c1e4b5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f Mon Sep 17 00:00:00 2001
From: Jane Doe <jane@example.com>
Date: Tue, 4 Jun 2024 10:12:00 +0200
Subject: [PATCH] Fix the bug

Co-authored-by: John Roe <john@example.com>
---
 src/lib.rs | 2 +-
 1 file changed, 1 insertion(+), 1 deletion(-)

diff --git a/src/lib.rs b/src/lib.rs
-From: not a header
";

#[test]
fn test_parse_patch() {
    let record = parse_patch(FIX_PATCH, "core").unwrap();

    assert_eq!(record.group, "core");
    assert_eq!(record.author, "Jane Doe");
    assert_eq!(record.subject, "Fix the bug");
    assert_eq!(record.co_authors, vec!["John Roe"]);
}

#[test]
fn test_missing_headers_are_unknown() {
    let record = parse_patch("diff --git a/x b/x\n", "core").unwrap();

    assert_eq!(record.author, "Unknown");
    assert_eq!(record.subject, "Unknown");
    assert!(record.co_authors.is_empty());
}

#[test]
fn test_empty_values_are_unknown() {
    let record = parse_patch("From: <jane@example.com>\nSubject: [PATCH]   \n", "core").unwrap();

    assert_eq!(record.author, "Unknown");
    assert_eq!(record.subject, "Unknown");
}

#[test]
fn test_last_from_and_subject_win() {
    let content = "\
From: First Author <first@example.com>
Subject: [PATCH] First subject
From: Second Author <second@example.com>
Subject: [PATCH] Second subject
";
    let record = parse_patch(content, "core").unwrap();

    assert_eq!(record.author, "Second Author");
    assert_eq!(record.subject, "Second subject");
}

#[test]
fn test_co_authors_keep_order_and_duplicates() {
    let content = "\
Co-authored-by: B Person <b@example.com>
Co-authored-by: A Person <a@example.com>
Co-authored-by: B Person <b@example.com>
";
    let record = parse_patch(content, "core").unwrap();

    assert_eq!(record.co_authors, vec!["B Person", "A Person", "B Person"]);
    assert_eq!(record.co_author_string(), "B Person, A Person, B Person");
}

#[test]
fn test_prefixes_are_case_sensitive() {
    let content = "from: Jane Doe\nSUBJECT: Shouting\nco-authored-by: John Roe\n From: Indented\n";
    let record = parse_patch(content, "core").unwrap();

    assert_eq!(record.author, "Unknown");
    assert_eq!(record.subject, "Unknown");
    assert!(record.co_authors.is_empty());
}

#[test]
fn test_patch_tag_removal() {
    let record = parse_patch("Subject: [PATCH] Fix [PATCH] handling\n", "core").unwrap();
    assert_eq!(record.subject, "Fix  handling");

    let record = parse_patch("Subject: [PATCH v2] Fix it\n", "core").unwrap();
    assert_eq!(record.subject, "[PATCH v2] Fix it");
}

#[test]
fn test_encoded_names() {
    let content = "\
From: =?UTF-8?Q?Jos=C3=A9?= <jose@example.com>
Co-authored-by: =?UTF-8?B?SsO2cmc=?= <joerg@example.com>
";
    let record = parse_patch(content, "core").unwrap();

    assert_eq!(record.author, "José");
    assert_eq!(record.co_authors, vec!["Jörg"]);
}

#[test]
fn test_decoding_failure_fails_whole_patch() {
    let content = "From: Jane Doe <jane@example.com>\nCo-authored-by: =?X-NOPE?Q?x?= <x@example.com>\n";
    assert!(matches!(parse_patch(content, "core"), Err(Error::DecodingError { .. })));
}

#[test]
fn test_parse_patch_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("core");
    fs::create_dir(&dir).unwrap();
    let path = dir.join("0001-fix.patch");
    fs::write(&path, FIX_PATCH).unwrap();

    let record = parse_patch_file(&path).unwrap();
    assert_eq!(record.group, "core");
    assert_eq!(record.author, "Jane Doe");
}

#[test]
fn test_parse_patch_file_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("missing.patch");
    match parse_patch_file(&missing) {
        Err(Error::ParseError { path, source }) => {
            assert_eq!(path, missing);
            assert!(matches!(*source, Error::IoError(_)));
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }

    let invalid_utf8 = temp_dir.path().join("latin1.patch");
    fs::write(&invalid_utf8, b"From: Fran\xe7ois <f@example.com>\n").unwrap();
    assert!(matches!(parse_patch_file(&invalid_utf8), Err(Error::ParseError { .. })));
}
