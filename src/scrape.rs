// src/scrape.rs
//
// Fetch one listing page and turn it into review records. A failed fetch
// yields an error and no records; a page without reviews yields an empty
// extraction.

use crate::config::options::ExtractOptions;
use crate::core::net;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::reviews::{self, Extraction};

pub fn collect_reviews(
    url: &str,
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Extraction> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {url}…"));
    }

    let html = match net::fetch_page(url, opts.timeout_secs) {
        Ok(h) => h,
        Err(e) => {
            loge!("Scrape: {url}: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.failed(url, &e.to_string());
            }
            return Err(e);
        }
    };

    let out = reviews::extract(&html, opts);
    logf!(
        "Scrape: {url} → rows={} mode={:?} counts={:?}",
        out.records.len(), out.mode, out.field_counts
    );
    if out.counts_mismatch() {
        logd!("Scrape: field counts differ; rows are aligned by position only");
    }

    if let Some(p) = progress.as_deref_mut() {
        p.page_done(url, out.records.len());
    }
    Ok(out)
}
