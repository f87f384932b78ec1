// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export_session(app: &mut App) {
    app.clear_notices();

    if app.session.is_empty() {
        logd!("Export: Clicked, but the session is empty");
        app.warn("No reviews extracted yet!");
        return;
    }

    let ds = app.session.snapshot();
    logf!("Export: Begin rows={} format={:?}", ds.row_count(), app.state.options.export.format);

    match file::export_extracted(&app.state.options.export, &ds) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.success(format!("Saved {} row(s) to {}", ds.row_count(), path.display()));
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {e}");
            app.error(format!("Export error: {e}"));
        }
    }
}
