use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenameError>;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("image directory does not exist or is not a directory: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to walk directory tree under {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read metadata from {}", path.display())]
    MetadataOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed capture timestamp {raw:?} in {}", path.display())]
    MalformedTimestamp { path: PathBuf, raw: String },

    #[error("failed to rename {} -> {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write rename log")]
    Output(#[source] std::io::Error),

    #[error("separator must not be empty")]
    InvalidSeparator,
}

impl RenameError {
    /// Errors that `keep_going` may downgrade to a per-file skip.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            RenameError::MetadataOpen { .. }
                | RenameError::MalformedTimestamp { .. }
                | RenameError::Rename { .. }
        )
    }
}
