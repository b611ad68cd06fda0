//! Recursive discovery and parsing of patch files.

use crate::constants::{PATCH_SUFFIX, REMOVED_DIR};
use crate::error::Error;
use crate::patch::{parse_patch_file, PatchRecord};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A patch file that could not be parsed.
#[derive(Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Result of scanning a patch directory.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Parsed patches in encounter order
    pub records: Vec<PatchRecord>,
    /// Files that were skipped, in encounter order
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Walks `root` depth-first and parses every `*.patch` file.
///
/// # Arguments
/// * `root` - Patch directory to scan
///
/// # Returns
/// * `ScanReport` - Parsed records plus the files that failed to parse
///
/// # Notes
/// - Directories named `removed` (in any case) are skipped with everything below them
/// - Entries of a directory are visited sorted by file name
/// - A missing or unreadable root yields an empty report
/// - A file that fails to parse is logged and recorded, the scan continues
pub fn scan_patches<P: AsRef<Path>>(root: P) -> ScanReport {
    let root = root.as_ref();
    let mut report = ScanReport::default();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_removed_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if e.depth() == 0 {
                    debug!("Unable to read patch directory '{}': {}", root.display(), e);
                } else {
                    warn!("Unable to read '{}': {}", display_walk_path(&e, root), e);
                }
                continue;
            }
        };

        if !is_patch_file(&entry) {
            continue;
        }

        let path = entry.path();
        match parse_patch_file(path) {
            Ok(record) => {
                debug!("Parsed '{}': {}", path.display(), record.subject);
                report.records.push(record);
            }
            Err(error) => {
                warn!("Exception while parsing '{}'! {}", path.display(), error);
                report.failures.push(ScanFailure { path: path.to_path_buf(), error });
            }
        }
    }

    report
}

/// The root itself is always scanned, whatever its name.
fn is_removed_dir(entry: &DirEntry) -> bool {
    let removed = entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().eq_ignore_ascii_case(REMOVED_DIR);
    if removed {
        debug!("Skipping removed directory '{}'", entry.path().display());
    }
    removed
}

fn is_patch_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(PATCH_SUFFIX)
}

fn display_walk_path(error: &walkdir::Error, root: &Path) -> String {
    error.path().unwrap_or(root).display().to_string()
}
