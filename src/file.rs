// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::Result;
use crate::store::{self, DataSet};

/// Write the session snapshot to `export.extracted_path()`.
/// Returns the final path written to.
pub fn export_extracted(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf> {
    let path = export.extracted_path();
    store::save_delimited(ds, &path, export.format.delim(), export.include_headers)?;
    Ok(path)
}

/// Write labeled results to `export.results_path()`. Headers are always
/// written: the Visualize page reads this file back by column name.
pub fn export_results(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf> {
    let path = export.results_path();
    store::save_delimited(ds, &path, export.format.delim(), true)?;
    Ok(path)
}

/// Write to a user-chosen path; the format follows the file extension.
pub fn export_to(path: &Path, ds: &DataSet) -> Result<PathBuf> {
    let sep = if path.extension().and_then(|e| e.to_str()) == Some("tsv") { '\t' } else { ',' };
    store::save_delimited(ds, path, sep, true)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}
