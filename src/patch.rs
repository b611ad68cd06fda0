//! Extraction of authorship metadata from a single patch file.
//! Only the `From:`, `Subject:` and `Co-authored-by:` header lines are read;
//! the diff body is ignored.

use crate::constants::{CO_AUTHOR_PREFIX, FROM_PREFIX, PATCH_TAG, SUBJECT_PREFIX, UNKNOWN};
use crate::decoder::decode_header_value;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Authorship metadata of one patch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchRecord {
    /// Name of the directory containing the patch
    pub group: String,
    pub author: String,
    pub subject: String,
    /// Co-authors in the order they appear in the file. Duplicates are kept.
    pub co_authors: Vec<String>,
}

impl PatchRecord {
    /// Co-authors joined with `", "`.
    pub fn co_author_string(&self) -> String {
        self.co_authors.join(", ")
    }
}

/// Parses the headers of a patch.
///
/// # Arguments
/// * `content` - Full text of the patch file
/// * `group` - Name of the directory the patch lives in
///
/// # Returns
/// * `Result<PatchRecord>` - Parsed record; missing author or subject become `"Unknown"`
///
/// # Errors
/// * `Error::DecodingError` if an author or co-author name can not be decoded
///
/// When `From:` or `Subject:` appear more than once, the last line wins.
pub fn parse_patch(content: &str, group: &str) -> Result<PatchRecord> {
    let mut author = None;
    let mut subject = None;
    let mut co_authors = Vec::new();

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(FROM_PREFIX) {
            author = Some(parse_name(rest)?);
        } else if let Some(rest) = line.strip_prefix(SUBJECT_PREFIX) {
            subject = Some(rest.replace(PATCH_TAG, "").trim().to_string());
        } else if let Some(rest) = line.strip_prefix(CO_AUTHOR_PREFIX) {
            co_authors.push(parse_name(rest)?);
        }
    }

    Ok(PatchRecord {
        group: group.to_string(),
        author: or_unknown(author),
        subject: or_unknown(subject),
        co_authors,
    })
}

/// Reads a patch file as UTF-8 and parses it, using the parent directory name as group.
///
/// # Errors
/// * `Error::ParseError` wrapping the I/O or decoding failure, together with the file path
pub fn parse_patch_file<P: AsRef<Path>>(path: P) -> Result<PatchRecord> {
    let path = path.as_ref();
    let group = path
        .parent()
        .and_then(|parent| parent.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    fs::read_to_string(path)
        .map_err(Error::IoError)
        .and_then(|content| parse_patch(&content, &group))
        .map_err(|e| Error::ParseError { path: path.to_path_buf(), source: Box::new(e) })
}

/// `Jane Doe <jane@example.com>` -> `Jane Doe`
fn parse_name(value: &str) -> Result<String> {
    let name = value.split('<').next().unwrap_or_default().trim();
    decode_header_value(name)
}

fn or_unknown(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| UNKNOWN.to_string())
}
