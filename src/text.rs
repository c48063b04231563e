//! Purpose: Load the text payload that gets injected into the document.
//! Exports: `load_text`, `normalize_newlines`, `trim_payload`.
//! Role: First pipeline step; turns a file path into a trimmed UTF-8 string.
//! Invariants: Input must be valid UTF-8; invalid bytes fail with `Encoding`.
//! Invariants: `\r\n` and lone `\r` become `\n` before trimming (text-mode read).
//! Invariants: Only leading/trailing whitespace is removed, including U+001C..=U+001F.
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::error::{Error, ErrorKind};

pub fn load_text(path: &Path) -> Result<String, Error> {
    let bytes =
        fs::read(path).map_err(|err| Error::from_io(err, path, "failed to read text file"))?;
    let byte_len = bytes.len();
    let raw = String::from_utf8(bytes).map_err(|err| {
        let offset = err.utf8_error().valid_up_to();
        Error::new(ErrorKind::Encoding)
            .with_message(format!("text file is not valid UTF-8 (byte offset {offset})"))
            .with_hint("Re-encode the file as UTF-8 before injecting it.")
            .with_path(path)
            .with_source(err)
    })?;
    let text = trim_payload(&normalize_newlines(&raw)).to_string();
    debug!(
        path = %path.display(),
        bytes = byte_len,
        trimmed_bytes = text.len(),
        "loaded text payload"
    );
    Ok(text)
}

pub fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\r') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
}

pub fn trim_payload(raw: &str) -> &str {
    raw.trim_matches(is_payload_space)
}

// Unicode White_Space plus the ASCII file/group/record/unit separators.
fn is_payload_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
