use crate::config::RenameConfig;
use crate::metadata::CaptureTimestamp;
use serde::Serialize;

/// Length of the `YYYYMMDDHHMMSS` prefix.
pub const PREFIX_DIGITS: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameState<'a> {
    pub extension: &'a str,
    pub has_prefix: bool,
}

impl<'a> FilenameState<'a> {
    pub fn inspect(name: &'a str, separator: &str) -> Self {
        Self {
            extension: extension_of(name),
            has_prefix: has_valid_prefix(name, separator),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnsupportedExtension,
    AlreadyPrefixed,
    NothingToUndo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameDecision {
    Skip(SkipReason),
    Apply { new_name: String },
    Strip { new_name: String },
}

impl RenameDecision {
    pub fn new_name(&self) -> Option<&str> {
        match self {
            RenameDecision::Apply { new_name } | RenameDecision::Strip { new_name } => {
                Some(new_name)
            }
            RenameDecision::Skip(_) => None,
        }
    }
}

/// Everything after the last `.`; the whole name when there is none.
pub fn extension_of(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// True when the text before the first `separator` is exactly 14 ASCII digits.
pub fn has_valid_prefix(name: &str, separator: &str) -> bool {
    name.split_once(separator)
        .map(|(head, _)| head.len() == PREFIX_DIGITS && head.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

pub fn decide(name: &str, timestamp: &CaptureTimestamp, config: &RenameConfig) -> RenameDecision {
    let separator = config.separator.as_str();

    if !config.accepts_extension(extension_of(name)) {
        return RenameDecision::Skip(SkipReason::UnsupportedExtension);
    }

    let state = FilenameState::inspect(name, separator);
    match (state.has_prefix, config.undo) {
        (true, true) => RenameDecision::Strip {
            new_name: name[PREFIX_DIGITS + separator.len()..].to_string(),
        },
        (true, false) => RenameDecision::Skip(SkipReason::AlreadyPrefixed),
        (false, false) => RenameDecision::Apply {
            new_name: format!("{}{}{}", timestamp.prefix(), separator, name),
        },
        (false, true) => RenameDecision::Skip(SkipReason::NothingToUndo),
    }
}
