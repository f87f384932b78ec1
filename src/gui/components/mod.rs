// src/gui/components/mod.rs
pub mod charts;
pub mod data_table;
pub mod notice;
pub mod tabs;
