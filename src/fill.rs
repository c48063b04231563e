//! Purpose: Run the fill pipeline: load text, load document, inject, write back.
//! Exports: `FillConfig`, `FillOutcome`, `run_fill`, default path/key constants.
//! Role: Orchestration engine used by the CLI; keeps `main` free of file handling.
//! Invariants: Steps run strictly in order; the first failure aborts without writing.
//! Invariants: The destination is only touched by the final atomic save.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::Error;
use crate::document::Document;
use crate::report::char_count;
use crate::text::load_text;

pub const DEFAULT_TEXT_FILE: &str = "long-text.txt";
pub const DEFAULT_JSON_FILE: &str = "test-exceed-basic.json";
pub const DEFAULT_KEY: &str = "text";

#[derive(Clone, Debug)]
pub struct FillConfig {
    pub text_path: PathBuf,
    pub json_path: PathBuf,
    /// Destination; `None` overwrites `json_path` in place.
    pub output_path: Option<PathBuf>,
    pub key: String,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            text_path: PathBuf::from(DEFAULT_TEXT_FILE),
            json_path: PathBuf::from(DEFAULT_JSON_FILE),
            output_path: None,
            key: DEFAULT_KEY.to_string(),
        }
    }
}

impl FillConfig {
    pub fn destination(&self) -> &Path {
        self.output_path.as_deref().unwrap_or(self.json_path.as_path())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillOutcome {
    pub text_chars: usize,
    pub key: String,
    pub replaced: bool,
    pub output_path: PathBuf,
}

pub fn run_fill(config: &FillConfig) -> Result<FillOutcome, Error> {
    let text = load_text(&config.text_path)?;
    let mut document = Document::load(&config.json_path)?;
    let replaced = document.inject(&config.key, &text).is_some();

    let destination = config.destination();
    document.save(destination)?;

    let outcome = FillOutcome {
        text_chars: char_count(&text),
        key: config.key.clone(),
        replaced,
        output_path: destination.to_path_buf(),
    };
    info!(
        key = %outcome.key,
        chars = outcome.text_chars,
        replaced = outcome.replaced,
        path = %outcome.output_path.display(),
        "filled JSON document"
    );
    Ok(outcome)
}
