// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; pages only see actions::{extract, reset, ...}.

mod analyze;  // src/gui/actions/analyze.rs
mod export;   // src/gui/actions/export.rs
mod extract;  // src/gui/actions/extract.rs

pub use analyze::{analysis_input, analyze, load_input, load_results};
pub use export::export_session;
pub use extract::{extract, reset};
