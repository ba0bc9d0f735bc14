use crate::error::{RenameError, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub const DEFAULT_EXTENSIONS: &str = "jpg jpeg tiff gif png";
pub const DEFAULT_SEPARATOR: &str = "__";

#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub image_dir: PathBuf,
    pub recursive: bool,
    pub dry_run: bool,
    pub undo: bool,
    pub extensions: BTreeSet<String>,
    pub separator: String,
    /// Skip files whose metadata or rename fails instead of aborting the run.
    pub keep_going: bool,
    /// Keep a per-file outcome in the run report, not just the rename count.
    pub report_files: bool,
}

impl RenameConfig {
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            recursive: false,
            dry_run: false,
            undo: false,
            extensions: parse_extensions(DEFAULT_EXTENSIONS),
            separator: DEFAULT_SEPARATOR.to_string(),
            keep_going: false,
            report_files: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(RenameError::InvalidSeparator);
        }
        Ok(())
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }
}

/// Lower-cases and splits a space-separated extension list.
pub fn parse_extensions(input: &str) -> BTreeSet<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
