//! Purpose: Internal JSON parsing boundary shared by the document loader.
//! Exports: `parse` module with decode helpers and failure categories.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
