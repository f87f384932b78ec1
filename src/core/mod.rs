// src/core/mod.rs

pub mod encoding;
pub mod net;
pub mod sanitize;
