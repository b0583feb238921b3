// LogTriage - lib.rs
//
// Library entry point, exposing every module for integration testing and
// programmatic use. The binary in `main.rs` only adds argument parsing.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
