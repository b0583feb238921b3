// LogTriage - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or the filesystem.

pub mod filter;
pub mod model;
pub mod parser;
pub mod stats;
