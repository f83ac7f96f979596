//! Badge persistence.

use crate::errors::{Error, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `svg` to `path` as UTF-8, replacing any existing file.
///
/// The whole document is rendered before this is called, so a failure here
/// never follows a partially rendered badge. Parent directories are not
/// created.
pub fn write_badge(path: &Path, svg: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(svg.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = svg.len(), "wrote badge");
    Ok(())
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
