// src/gui/actions/analyze.rs
use std::path::Path;

use crate::{
    config::state::InputSource,
    error::Error,
    file,
    gui::{app::App, progress::GuiProgress},
    sentiment::{self, Thresholds, VaderScorer},
    store::{self, DataSet},
};

/// Read the CSV file or sheet link named on the Analysis page.
pub fn load_input(app: &mut App) {
    app.clear_notices();

    let res = match app.state.gui.input_source {
        InputSource::Session => return,
        InputSource::CsvFile => {
            let text = file::normalize_separators(app.state.gui.csv_path_text.trim());
            logf!("Import: Begin file={text}");
            store::load_path(Path::new(&text))
        }
        InputSource::SheetLink => {
            let link = app.state.gui.sheet_link_text.trim().to_string();
            logf!("Import: Begin sheet={link}");
            app.status("Fetching sheet…");
            store::load_sheet(&link, app.state.options.extract.timeout_secs)
        }
    };

    match res {
        Ok(loaded) => {
            let rows = loaded.dataset.row_count();
            app.info(format!("Loaded {rows} row(s) using {} encoding", loaded.encoding));
            if loaded.skipped > 0 {
                app.warn(format!("Skipped {} malformed line(s)", loaded.skipped));
            }
            app.input = Some(loaded);
            app.results = None;
            app.status("Ready");
        }
        Err(e) => {
            loge!("Import: Error: {e}");
            app.error(format!("Error reading data: {e}"));
            app.input = None;
        }
    }
}

/// The table the Analysis page works on right now, if any.
pub fn analysis_input(app: &App) -> Option<&DataSet> {
    match app.state.gui.input_source {
        InputSource::Session if app.session.is_empty() => None,
        InputSource::Session => Some(app.session.table()),
        _ => app.input.as_ref().map(|l| &l.dataset),
    }
}

/// Label the chosen column, keep the result for Visualize and write it to disk.
pub fn analyze(app: &mut App) {
    app.clear_notices();

    let Some(ds) = analysis_input(app).cloned() else {
        app.warn("No data available. Extract reviews, or load a file or sheet link.");
        return;
    };

    let Some(column) = app.state.options.analysis.column.clone() else {
        app.warn("Choose a column to analyze first.");
        return;
    };
    let thresholds = Thresholds::from_options(&app.state.options.analysis);

    let res = {
        let mut prog = GuiProgress::new(&mut app.status);
        sentiment::analyze(&ds, &column, &VaderScorer, &thresholds, Some(&mut prog))
    };

    let labeled = match res {
        Ok(d) => d,
        Err(e) => {
            report_failure(app, &column, &e);
            return;
        }
    };

    match file::export_results(&app.state.options.export, &labeled) {
        Ok(path) => {
            logf!("Analyze: Saved results → {}", path.display());
            app.success(format!("Results saved to {}", path.display()));
        }
        Err(e) => {
            loge!("Analyze: Save failed: {e}");
            app.warn(format!("Results not saved: {e}"));
        }
    }
    app.results = Some(labeled);
    app.status("Ready");
}

/// Missing prerequisites are warnings; anything else is an error.
fn report_failure(app: &mut App, column: &str, e: &Error) {
    match e {
        Error::MissingPrerequisite(what) => {
            logd!("Analyze: Skipped column={column}: {what}");
            app.warn(format!("Nothing to analyze: {what}"));
        }
        _ => {
            loge!("Analyze: Error column={column}: {e}");
            app.error(format!("Analysis failed: {e}"));
        }
    }
    app.status("Idle");
}

/// Pick up the last saved results when nothing was analyzed in this run.
pub fn load_results(app: &mut App) {
    if app.results.is_some() {
        return;
    }
    let path = app.state.options.export.results_path();
    if !path.exists() {
        logd!("Visualize: No results file at {}", path.display());
        app.warn("Please run sentiment analysis first!");
        return;
    }
    match store::load_path(&path) {
        Ok(loaded) => {
            logf!("Visualize: Loaded {} row(s) from {}", loaded.dataset.row_count(), path.display());
            app.results = Some(loaded.dataset);
        }
        Err(e) => {
            loge!("Visualize: Load failed {}: {e}", path.display());
            app.error(format!("Could not read {}: {e}", path.display()));
        }
    }
}
