//! File I/O utilities with atomic writes
//!
//! Every save writes a complete snapshot of the state; there is no append log.
//! Loads of the default data files are fail-soft: a missing or unreadable
//! file yields the empty state instead of an error. An unreadable file is
//! copied to `<name>.bak` first, since the next save overwrites it.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};

/// Read JSON from a file, falling back to the default value if the file is
/// missing, unreadable or malformed.
pub fn read_json_or_default<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no snapshot file, starting empty");
        return T::default();
    }

    match read_json_required(path) {
        Ok(data) => data,
        Err(e) => {
            let backup = backup_path(path);
            match fs::copy(path, &backup) {
                Ok(_) => warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "ignoring unreadable snapshot, starting empty"
                ),
                Err(copy_err) => warn!(
                    path = %path.display(),
                    error = %e,
                    backup_error = %copy_err,
                    "ignoring unreadable snapshot, starting empty; backup failed"
                ),
            }
            T::default()
        }
    }
}

/// Where an unreadable snapshot is preserved: `<path>.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> TrackerResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrackerError::NotFound {
            entity_type: "File",
            identifier: path.display().to_string(),
        });
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The output is pretty-printed with a four-space indent.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let file = File::create(temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    data.serialize(&mut serializer)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    drop(writer);

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    debug!(path = %path.display(), "snapshot written");
    Ok(())
}
