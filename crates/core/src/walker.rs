use crate::error::{RenameError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub dir: PathBuf,
    pub name: String,
}

impl FileEntry {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Lists the files under `root`, descending into subdirectories only when
/// `recursive` is set. The listing is complete before it is returned so that
/// renames made while processing it are never revisited.
pub fn collect_files(root: &Path, recursive: bool) -> Result<Vec<FileEntry>> {
    if !root.is_dir() {
        return Err(RenameError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut out = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable subdirectories are skipped; only the root is required.
            Err(err) if err.depth() > 0 => {
                log::warn!("skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
            Err(source) => {
                return Err(RenameError::Walk {
                    path: root.to_path_buf(),
                    source,
                })
            }
        };
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let Some(dir) = path.parent() else {
            continue;
        };
        match entry.file_name().to_str() {
            Some(name) => out.push(FileEntry {
                dir: dir.to_path_buf(),
                name: name.to_string(),
            }),
            None => log::debug!("ignoring non UTF-8 file name: {}", path.display()),
        }
    }

    Ok(out)
}
