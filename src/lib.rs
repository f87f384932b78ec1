// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod record;
pub mod scrape;
pub mod sentiment;
pub mod session;
pub mod store;
pub mod viz;

pub use error::{Error, Result};
