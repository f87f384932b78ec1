// src/gui/progress.rs
use crate::progress::Progress;

/// Mirrors progress into the status bar text.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    pages: usize,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, pages: 0 }
    }
}

impl Progress for GuiProgress<'_> {
    fn log(&mut self, msg: &str) {
        *self.status = s!(msg);
    }
    fn page_done(&mut self, url: &str, rows: usize) {
        self.pages += 1;
        *self.status = format!("Fetched {url}: {rows} review(s)");
    }
    fn failed(&mut self, what: &str, err: &str) {
        *self.status = format!("Failed: {what}: {err}");
    }
}
