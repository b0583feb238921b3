// LogTriage - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: core (read-only models), comfy-table, owo-colors.
// Must NOT depend on: app, platform, direct I/O.

pub mod report;
pub mod theme;
