use crate::error::{RenameError, Result};
use crate::report::{write_line, yes_line};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Logs `old -> new` and renames inside `dir` unless `dry_run` is set.
///
/// Returns whether the filesystem was changed. An existing target is not
/// checked beforehand; whatever the OS rename does with it stands.
pub fn apply_rename(
    dir: &Path,
    old_name: &str,
    new_name: &str,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<bool> {
    write_line(out, &yes_line(old_name, new_name))?;
    if dry_run {
        return Ok(false);
    }

    let from = dir.join(old_name);
    let to = dir.join(new_name);
    fs::rename(&from, &to).map_err(|source| RenameError::Rename { from, to, source })?;
    Ok(true)
}
