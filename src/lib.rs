//! Purpose: Library crate backing the `textfill` CLI and its tests.
//! Exports: `core` (errors), `text`, `document`, `report`, `fill`.
//! Role: Internal library for the binary; not a stable public SDK.
//! Invariants: Modules take explicit paths and values; no hidden global state.
pub mod core;
pub mod document;
pub mod fill;
mod json;
pub mod report;
pub mod text;
