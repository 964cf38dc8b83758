//! Game-state snapshot serialization.
//!
//! Snapshots are stored as `MessagePack` (`.msgpack`, `.mp`) or JSON
//! (`.json`), chosen by file extension.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use parley_foundation::{Error, ErrorKind, Result};
use parley_state::FuzzyState;

/// On-disk snapshot encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Compact binary, field names preserved
    MessagePack,
    /// Human-editable text
    Json,
}

impl Format {
    /// Picks the encoding for a path. Anything that is not `.json` is
    /// `MessagePack`.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::MessagePack,
        }
    }
}

/// Serializes a snapshot.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(state: &FuzzyState, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::MessagePack => rmp_serde::to_vec_named(state)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
        Format::Json => serde_json::to_vec_pretty(state)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
    }
}

/// Deserializes a snapshot.
///
/// # Errors
///
/// Returns an error if the bytes are not a snapshot in `format`.
pub fn from_bytes(bytes: &[u8], format: Format) -> Result<FuzzyState> {
    match format {
        Format::MessagePack => rmp_serde::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
        Format::Json => serde_json::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
    }
}

/// Saves a snapshot, creating or overwriting the file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &FuzzyState, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(state, Format::for_path(path))?;

    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;

    Ok(())
}

/// Loads a snapshot.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a snapshot.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FuzzyState> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    from_bytes(&bytes, Format::for_path(path))
}

fn io_error(action: &str, path: &Path, error: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!(
        "failed to {action} file '{}': {error}",
        path.display()
    )))
}
