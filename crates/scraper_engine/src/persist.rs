use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("output directory unusable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensures the download directory exists, creating it if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), SaveError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(SaveError::OutputDir(format!(
                "{} exists and is not a directory",
                dir.display()
            )));
        }
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|err| SaveError::OutputDir(err.to_string()))
}

/// Writes page HTML to `{dir}/{filename}` through a temp file and rename,
/// so an interrupted run never leaves a truncated capture behind. An
/// existing file with the same name is replaced.
pub fn write_html(dir: &Path, filename: &str, html: &str) -> Result<PathBuf, SaveError> {
    ensure_output_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(html.as_bytes())?;
    tmp.flush()?;

    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|err| SaveError::Io(err.error))?;
    Ok(target)
}
