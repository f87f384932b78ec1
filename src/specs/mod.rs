// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows **where the data lives in one site's markup** and how to
//! clean it. Specs are pure: markup in, records out. Fetching, session
//! accumulation and export live in higher layers (`scrape`, `session`, `file`).
//!
//! ## Conventions
//! - Field rules are declarative (`selector` + `cleanup`) so a layout change is
//!   a table edit, and every rule can be tested on its own.
//! - Parsing degrades per field: a rule that matches nothing yields an empty
//!   list, never an error.
//! - Specs are testable **offline** against captured fixtures.
//!
//! ```text
//! GUI / CLI → scrape::collect_reviews → core::net::fetch_page
//!                                     ↘ specs::reviews::extract
//! ```
pub mod reviews;
