// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub analysis: AnalysisOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            analysis: AnalysisOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Extract,
    Analysis,
    Visualize,
}

/// How review fields are paired up into rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtractMode {
    /// Five whole-document scans, padded to a common length. Rows line up by
    /// position only.
    Flat,
    /// One scan per review container; fields can't drift between reviews.
    Grouped,
}

impl ExtractMode {
    pub fn label(&self) -> &'static str {
        match self {
            ExtractMode::Flat => "Flat (positional)",
            ExtractMode::Grouped => "Grouped (per review)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub mode: ExtractMode,
    /// Localized prefix stripped from review dates.
    pub date_prefix: String,
    pub timeout_secs: u64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: ExtractMode::Flat,
            date_prefix: s!(DATE_PREFIX),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOptions {
    pub column: Option<String>,
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            column: None,
            positive_threshold: 0.5,
            negative_threshold: -0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// Where the session table is exported.
    pub fn extracted_path(&self) -> PathBuf {
        self.out_dir.join(join!(EXTRACTED_FILE, ".", self.format.ext()))
    }

    /// Where labeled results are written (and read back by the Visualize page).
    pub fn results_path(&self) -> PathBuf {
        self.out_dir.join(join!(RESULTS_FILE, ".", self.format.ext()))
    }

    /// Parse GUI text into the output directory.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { PathBuf::from(s) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_paths_follow_format() {
        let mut export = ExportOptions::default();
        assert!(export.extracted_path().ends_with("Amazon_Extracted_Data.csv"));
        export.format = ExportFormat::Tsv;
        assert!(export.results_path().ends_with("Sentiment_Analysis_Results.tsv"));
    }

    #[test]
    fn blank_dir_resets_to_default() {
        let mut export = ExportOptions::default();
        export.set_dir("  reports ");
        assert_eq!(export.out_dir, PathBuf::from("reports"));
        export.set_dir("   ");
        assert_eq!(export.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
    }
}
