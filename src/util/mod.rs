// LogTriage - util/mod.rs
//
// Utility modules: error types, named constants, colour policy, logging setup.
// No dependencies on core, app, ui, or platform layers.

pub mod color_mode;
pub mod constants;
pub mod error;
pub mod logging;
