// LogTriage - app/mod.rs
//
// Application layer: orchestration of a triage run.
// Dependencies: core, platform, ui.

pub mod pipeline;
