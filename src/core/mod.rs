// Core modules shared by every pipeline step.
pub mod error;
