mod apply;
mod config;
mod error;
mod exif_reader;
mod metadata;
mod planner;
mod report;
mod run;
#[cfg(test)]
mod test_fixtures;
mod walker;

pub use apply::apply_rename;
pub use config::{parse_extensions, RenameConfig, DEFAULT_EXTENSIONS, DEFAULT_SEPARATOR};
pub use error::{RenameError, Result};
pub use exif_reader::read_capture_time;
pub use metadata::{CaptureLookup, CaptureTimestamp};
pub use planner::{
    decide, extension_of, has_valid_prefix, FilenameState, RenameDecision, SkipReason,
    PREFIX_DIGITS,
};
pub use report::{no_line, yes_line, Action, FileFailure, FileOutcome, RunReport};
pub use run::run_renames;
pub use walker::{collect_files, FileEntry};
