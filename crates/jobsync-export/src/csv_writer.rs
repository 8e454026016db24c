//! CSV serialization of an [`OutputTable`].
//!
//! Writes to a temporary file in the destination directory and persists it
//! over the destination only after every row is flushed, so a failed write
//! never leaves a truncated file behind.

use std::io::BufWriter;
use std::path::Path;

use csv::Writer;
use jobsync_core::{OutputTable, COLUMNS};
use tempfile::NamedTempFile;

use crate::error::SerializationError;

/// Writes `table` to `path` as comma-delimited text.
///
/// The first line is the fixed header ([`COLUMNS`]); each row follows in
/// table order with no index column. The lack-of-value marker is written as
/// an empty field and fields containing delimiters are quoted.
///
/// # Errors
///
/// Returns [`SerializationError`] if the temporary file cannot be created,
/// any record fails to write, or the file cannot be persisted to `path`.
pub fn write_table(table: &OutputTable, path: &Path) -> Result<(), SerializationError> {
    let path_str = path.display().to_string();

    let parent = match path.parent() {
        Some(dir) if dir.as_os_str().is_empty() => Path::new("."),
        Some(dir) => dir,
        None => {
            return Err(SerializationError::NoParentDir { path: path_str });
        }
    };

    let temp_file = NamedTempFile::new_in(parent).map_err(|e| SerializationError::Io {
        path: path_str.clone(),
        source: e,
    })?;

    let mut writer = Writer::from_writer(BufWriter::new(temp_file));
    let csv_err = |e: csv::Error| SerializationError::Csv {
        path: path_str.clone(),
        source: e,
    };

    writer.write_record(COLUMNS).map_err(csv_err)?;
    for row in table {
        writer.write_record(row.to_record()).map_err(csv_err)?;
    }

    let buf_writer = writer.into_inner().map_err(|e| SerializationError::Io {
        path: path_str.clone(),
        source: e.into_error(),
    })?;
    let temp_file = buf_writer
        .into_inner()
        .map_err(|e| SerializationError::Io {
            path: path_str.clone(),
            source: e.into_error(),
        })?;

    temp_file.persist(path).map_err(|e| SerializationError::Io {
        path: path_str.clone(),
        source: e.error,
    })?;

    tracing::debug!(path = %path_str, rows = table.len(), "wrote table to CSV");
    Ok(())
}
