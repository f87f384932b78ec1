// src/gui/actions/extract.rs
use crate::{gui::app::App, gui::progress::GuiProgress, scrape};

/// Fetch `url`, extract reviews, and append them to the session table.
/// Empty pages leave the table untouched.
pub fn extract(app: &mut App, url: &str, success_msg: &str) {
    app.clear_notices();
    let opts = app.state.options.extract.clone();

    logf!("Extract: Begin url={url} mode={:?}", opts.mode);

    // → This is where the fetch happens ←
    let res = {
        let mut prog = GuiProgress::new(&mut app.status);
        scrape::collect_reviews(url, &opts, Some(&mut prog))
    };

    match res {
        Ok(out) if out.records.is_empty() => {
            logd!("Extract: No reviews found at {url}");
            app.warn("No reviews found. The page layout may have changed; try again or switch alignment.");
            app.status("Ready");
        }
        Ok(out) => {
            let mismatch = out.counts_mismatch();
            let outcome = app.session.append(out.records);
            logf!(
                "Extract: OK added={} total={} separated={}",
                outcome.added, outcome.total_rows, outcome.separated
            );
            app.success(success_msg);
            if mismatch {
                app.info("Some reviews were missing fields; rows were padded with empty cells.");
            }
            app.status(format!("{} row(s) in session", outcome.total_rows));
        }
        Err(e) => {
            loge!("Extract: Error url={url}: {e}");
            app.error(format!("Error fetching data: {e}"));
        }
    }
}

pub fn reset(app: &mut App) {
    app.clear_notices();
    app.session.reset();
    app.info("Data reset successfully!");
    app.status("Idle");
}
