// src/progress.rs
/// Lightweight progress reporting for fetch/extract/analyze.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page was fetched and parsed into `rows` records.
    fn page_done(&mut self, _url: &str, _rows: usize) {}

    /// Called when one fetch/analysis unit fails.
    fn failed(&mut self, _what: &str, _err: &str) {}
}
