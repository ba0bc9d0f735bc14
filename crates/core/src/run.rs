use crate::apply::apply_rename;
use crate::config::RenameConfig;
use crate::error::{RenameError, Result};
use crate::exif_reader::read_capture_time;
use crate::metadata::CaptureLookup;
use crate::planner::decide;
use crate::report::{no_line, write_line, Action, FileFailure, FileOutcome, RunReport};
use crate::walker::{collect_files, FileEntry};
use std::error::Error as _;
use std::io::Write;

/// Walks `config.image_dir`, writing one `[YES]`/`[ NO]` line per file with a
/// capture time to `out`.
///
/// Files without a capture time are left out of both the log and the report.
/// Any error aborts the run unless `keep_going` is set and the error concerns a
/// single file.
pub fn run_renames(config: &RenameConfig, out: &mut impl Write) -> Result<RunReport> {
    config.validate()?;
    log::info!(
        "scanning {} (recursive: {}, dry run: {}, undo: {})",
        config.image_dir.display(),
        config.recursive,
        config.dry_run,
        config.undo
    );

    let entries = collect_files(&config.image_dir, config.recursive)?;
    log::debug!("found {} files", entries.len());

    let mut report = RunReport::new(config.report_files);
    for entry in entries {
        match process_file(&entry, config, out) {
            Ok(Some(outcome)) => report.record(outcome),
            Ok(None) => {}
            Err(err) if config.keep_going && err.is_per_file() => {
                let error = error_chain(&err);
                log::warn!("skipping {}: {}", entry.path().display(), error);
                report.failures.push(FileFailure {
                    path: entry.path(),
                    error,
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}

fn process_file(
    entry: &FileEntry,
    config: &RenameConfig,
    out: &mut impl Write,
) -> Result<Option<FileOutcome>> {
    let timestamp = match read_capture_time(&entry.path())? {
        CaptureLookup::Found(ts) => ts,
        CaptureLookup::NotFound => return Ok(None),
    };

    let decision = decide(&entry.name, &timestamp, config);
    let renamed = match decision.new_name() {
        Some(new_name) => apply_rename(&entry.dir, &entry.name, new_name, config.dry_run, out)?,
        None => {
            write_line(out, &no_line(&entry.name))?;
            false
        }
    };

    Ok(Some(FileOutcome {
        dir: entry.dir.clone(),
        original_name: entry.name.clone(),
        new_name: decision.new_name().map(str::to_string),
        action: Action::from(&decision),
        renamed,
    }))
}

fn error_chain(err: &RenameError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
