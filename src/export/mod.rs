//! Output writers: the enriched earthquake CSV and the normalized reference
//! JSON files.
//!
//! Both go through [`write_atomically`] so a failed run never leaves a
//! truncated file at the destination.

pub mod csv_export;
pub mod reference_json;

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::util::error::{PrepError, Result};

/// Check that the directory `path` would be written into exists.
///
/// # Errors
/// Returns [`PrepError::Export`] naming the missing directory.
pub fn validate_export_path(path: &Path) -> Result<()> {
    let parent = output_dir(path);
    if !parent.is_dir() {
        return Err(PrepError::Export(format!(
            "Output directory does not exist: {}",
            parent.display()
        )));
    }
    Ok(())
}

/// Write a file by streaming into a temporary sibling and renaming it over
/// `path` once `write` has succeeded and the buffer is flushed.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    validate_export_path(path)?;
    let mut tmp = tempfile::NamedTempFile::new_in(output_dir(path))
        .map_err(|e| PrepError::Export(format!("Failed to create temporary file: {e}")))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        // Explicit flush so I/O errors are not silently swallowed by BufWriter::drop.
        writer
            .flush()
            .map_err(|e| PrepError::Export(format!("Failed to flush output: {e}")))?;
    }

    tmp.persist(path).map_err(|e| {
        PrepError::Export(format!("Failed to replace {}: {}", path.display(), e.error))
    })?;
    Ok(())
}

fn output_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
