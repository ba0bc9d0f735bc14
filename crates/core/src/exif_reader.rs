use crate::error::{RenameError, Result};
use crate::metadata::{CaptureLookup, CaptureTimestamp};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Reads the "date/time original" field of `path`.
///
/// A file that cannot be opened is an error. A file that opens but holds no
/// parsable metadata, or metadata without the field, is `NotFound`.
pub fn read_capture_time(path: &Path) -> Result<CaptureLookup> {
    let file = File::open(path).map_err(|source| RenameError::MetadataOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buf = BufReader::new(file);

    // Damaged fields elsewhere in the block must not hide DateTimeOriginal.
    let mut reader = Reader::new();
    reader.continue_on_error(true);
    let parsed = reader.read_from_container(&mut buf).or_else(|err| {
        err.distill_partial_result(|errors| {
            for error in errors {
                log::debug!("ignoring damaged metadata in {}: {}", path.display(), error);
            }
        })
    });

    let exif = match parsed {
        Ok(exif) => exif,
        Err(exif::Error::Io(err)) if err.kind() != ErrorKind::UnexpectedEof => {
            return Err(RenameError::MetadataOpen {
                path: path.to_path_buf(),
                source: err,
            });
        }
        Err(err) => {
            log::debug!("no readable metadata in {}: {}", path.display(), err);
            return Ok(CaptureLookup::NotFound);
        }
    };

    let Some(raw) = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .and_then(|field| ascii_value(&field.value))
    else {
        log::debug!("no date/time original field in {}", path.display());
        return Ok(CaptureLookup::NotFound);
    };

    match CaptureTimestamp::parse(&raw) {
        Some(ts) => Ok(CaptureLookup::Found(ts)),
        None => Err(RenameError::MalformedTimestamp {
            path: path.to_path_buf(),
            raw,
        }),
    }
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string())
            .filter(|s| !s.trim().is_empty()),
        _ => None,
    }
}
