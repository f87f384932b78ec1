// src/store.rs
//
// Tabular data shared by every stage: extraction output, session snapshots,
// imported sheets and labeled results. Cells are `Option<String>`; `None`
// is the missing marker and is distinct from an empty string.
//
// Import goes through the ordered encoding candidates in `core::encoding`.

use std::fs;
use std::path::Path;

use crate::config::consts::{SHEET_EXPORT_SUFFIX, SHEET_HOST, SHEET_SHARE_SUFFIX};
use crate::core::{encoding::CANDIDATES, net};
use crate::csv::{self, parse_table};
use crate::error::{Error, Result};
use crate::file::ensure_directory;

pub type Cell = Option<String>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    #[inline] pub fn row_count(&self) -> usize { self.rows.len() }
    #[inline] pub fn header_count(&self) -> usize { self.headers.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Borrow one column by name; short rows read as missing.
    pub fn column(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let ix = self.column_index(name).ok_or_else(|| Error::MissingColumn(s!(name)))?;
        Ok(self.rows.iter()
            .map(|r| r.get(ix).and_then(|c| c.as_deref()))
            .collect())
    }

    /// Append a column (replacing one with the same name). `values` must have
    /// one entry per row.
    pub fn push_column(&mut self, name: &str, values: Vec<Cell>) {
        debug_assert_eq!(values.len(), self.rows.len());
        let width = self.headers.len();
        let ix = match self.column_index(name) {
            Some(ix) => ix,
            None => {
                self.headers.push(s!(name));
                width
            }
        };
        for (row, v) in self.rows.iter_mut().zip(values) {
            if row.len() <= ix { row.resize(ix + 1, None); }
            row[ix] = v;
        }
    }

    /// Serialize with the given delimiter. Missing cells become empty fields.
    pub fn to_delimited(&self, sep: char, include_headers: bool) -> String {
        let mut buf: Vec<u8> = Vec::new();
        if include_headers {
            let _ = csv::write_row(&mut buf, &self.headers, sep);
        }
        for r in &self.rows {
            let cells: Vec<&str> = r.iter().map(|c| c.as_deref().unwrap_or("")).collect();
            let _ = csv::write_row(&mut buf, &cells, sep);
        }
        match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        }
    }
}

/* ---------------- Export ---------------- */

/// Write `ds` to `path`, creating parent directories.
pub fn save_delimited(ds: &DataSet, path: &Path, sep: char, include_headers: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, ds.to_delimited(sep, include_headers))?;
    logf!("Store: Saved rows={} → {}", ds.row_count(), path.display());
    Ok(())
}

/* ---------------- Import ---------------- */

/// A table read from an external file, plus the encoding that worked.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub dataset: DataSet,
    pub encoding: &'static str,
    /// Malformed lines dropped during parsing.
    pub skipped: usize,
}

/// Try each candidate encoding in order; accept the first that decodes
/// strictly and yields a header row.
pub fn load_bytes(bytes: &[u8]) -> Result<Loaded> {
    let mut tried = Vec::with_capacity(CANDIDATES.len());

    for cand in CANDIDATES.iter() {
        tried.push(cand.name);

        let Some(text) = cand.decode(bytes) else {
            logd!("Store: decode with {} failed, trying next", cand.name);
            continue;
        };
        let sep = csv::sniff_delim(&text);
        let Some(parsed) = parse_table(&text, sep) else {
            logd!("Store: no header row under {}, trying next", cand.name);
            continue;
        };

        let width = parsed.headers.len();
        let rows = parsed.rows.into_iter()
            .map(|r| {
                let mut cells: Vec<Cell> = r.into_iter()
                    .map(|c| if c.is_empty() { None } else { Some(c) })
                    .collect();
                cells.resize(width, None);
                cells
            })
            .collect();

        logf!("Store: Read table with encoding {} (skipped {} line(s))", cand.name, parsed.skipped);
        return Ok(Loaded {
            dataset: DataSet { headers: parsed.headers, rows },
            encoding: cand.name,
            skipped: parsed.skipped,
        });
    }

    loge!("Store: All encodings failed ({})", tried.join(", "));
    Err(Error::Decode { tried })
}

pub fn load_path(path: &Path) -> Result<Loaded> {
    let bytes = fs::read(path)?;
    load_bytes(&bytes)
}

/// Rewrite a spreadsheet share link to its CSV export form. The share suffix
/// is rewritten anywhere; other `/edit` forms only on spreadsheet hosts.
/// Everything else passes through unchanged.
pub fn sheet_export_url(link: &str) -> String {
    let link = link.trim();
    if let Some(base) = link.strip_suffix(SHEET_SHARE_SUFFIX) {
        return join!(base, SHEET_EXPORT_SUFFIX);
    }
    if !link.contains(SHEET_HOST) {
        return s!(link);
    }
    // "/edit", "/edit#gid=0", "/edit?usp=drive_link", ...
    if let Some(ix) = link.rfind("/edit") {
        let tail = &link[ix + "/edit".len()..];
        if tail.is_empty() || tail.starts_with('?') || tail.starts_with('#') {
            return join!(&link[..ix], SHEET_EXPORT_SUFFIX);
        }
    }
    s!(link)
}

/// Fetch a remote sheet as CSV and decode it like a local file.
pub fn load_sheet(link: &str, timeout_secs: u64) -> Result<Loaded> {
    let url = sheet_export_url(link);
    if url != link.trim() {
        logf!("Store: Sheet link converted for CSV export → {url}");
    }
    let bytes = net::fetch_bytes(&url, timeout_secs)?;
    load_bytes(&bytes)
}
