// src/config/state.rs
use super::options::AppOptions;
use crate::viz::ChartKind;

/// Where the Analysis page reads its table from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Session,
    CsvFile,
    SheetLink,
}

impl InputSource {
    pub const ALL: [InputSource; 3] = [InputSource::Session, InputSource::CsvFile, InputSource::SheetLink];

    pub fn label(&self) -> &'static str {
        match self {
            InputSource::Session => "Extracted reviews",
            InputSource::CsvFile => "CSV file",
            InputSource::SheetLink => "Sheet link",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Extract page inputs
    pub url_text: String,
    pub next_url_text: String,
    pub out_dir_text: String,

    /// Analysis page inputs
    pub input_source: InputSource,
    pub csv_path_text: String,
    pub sheet_link_text: String,

    /// Visualize page inputs
    pub chart: ChartKind,
    pub viz_column: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            url_text: s!(),
            next_url_text: s!(),
            out_dir_text: s!(),
            input_source: InputSource::Session,
            csv_path_text: s!(),
            sheet_link_text: s!(),
            chart: ChartKind::None,
            viz_column: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        let options = AppOptions::default();
        let gui = GuiState {
            out_dir_text: options.export.out_dir.to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
