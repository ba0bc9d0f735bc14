use crate::error::{RenameError, Result};
use crate::planner::{RenameDecision, SkipReason};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Apply,
    Strip,
    Skip(SkipReason),
}

impl From<&RenameDecision> for Action {
    fn from(decision: &RenameDecision) -> Self {
        match decision {
            RenameDecision::Apply { .. } => Action::Apply,
            RenameDecision::Strip { .. } => Action::Strip,
            RenameDecision::Skip(reason) => Action::Skip(*reason),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub dir: PathBuf,
    pub original_name: String,
    pub new_name: Option<String>,
    pub action: Action,
    pub renamed: bool,
}

/// A file skipped because of an error while running with `keep_going`.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    #[serde(skip)]
    keep_files: bool,
    pub files: Vec<FileOutcome>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
    pub renamed: usize,
}

impl RunReport {
    /// Outcomes are only kept when `keep_files` is set; the count always is.
    pub fn new(keep_files: bool) -> Self {
        Self {
            keep_files,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        if outcome.renamed {
            self.renamed += 1;
        }
        if self.keep_files {
            self.files.push(outcome);
        }
    }

    pub fn summary_line(&self) -> String {
        format!("Renamed {} files", self.renamed)
    }
}

pub fn yes_line(old_name: &str, new_name: &str) -> String {
    format!("[YES]: {} -> {}", old_name, new_name)
}

pub fn no_line(old_name: &str) -> String {
    format!("[ NO]: {}", old_name)
}

pub(crate) fn write_line(out: &mut impl Write, line: &str) -> Result<()> {
    writeln!(out, "{}", line).map_err(RenameError::Output)
}
