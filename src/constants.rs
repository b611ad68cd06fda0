//! Common constants used throughout patch-credits.

/// Supported configuration file names, looked up in the project directory
pub const CONFIG_FILES: [&str; 3] =
    ["patch-credits.json", "patch-credits.yml", "patch-credits.yaml"];

/// Default patch directory, relative to the project directory
pub const DEFAULT_PATCH_DIR: &str = "patches";

/// Default template source, relative to the project directory
pub const DEFAULT_TEMPLATE: &str = ".template.md";

/// Default generated file, relative to the project directory
pub const DEFAULT_OUTPUT: &str = "PATCHES.md";

/// Value used when a patch has no author or subject
pub const UNKNOWN: &str = "Unknown";

/// Directories with this name (any case) are never scanned
pub const REMOVED_DIR: &str = "removed";

/// Only files ending with this suffix are parsed
pub const PATCH_SUFFIX: &str = ".patch";

pub const FROM_PREFIX: &str = "From: ";
pub const SUBJECT_PREFIX: &str = "Subject: ";
pub const CO_AUTHOR_PREFIX: &str = "Co-authored-by: ";

/// Tag stripped from subject lines
pub const PATCH_TAG: &str = "[PATCH]";
