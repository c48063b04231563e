//! Purpose: Load, mutate, and write back the JSON document that receives the text.
//! Exports: `Document`.
//! Role: JSON loader, field injector, and JSON writer for the fill pipeline.
//! Invariants: The document root is always a JSON object; other roots fail with `Shape`.
//! Invariants: Output uses 2-space indentation and emits non-ASCII characters literally.
//! Invariants: Input key order is preserved; only the injected key changes.
//! Invariants: `save` replaces the destination atomically (temp file + rename in the same dir).
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let input = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::InvalidData {
                Error::new(ErrorKind::Encoding)
                    .with_message("JSON file is not valid UTF-8")
                    .with_path(path)
                    .with_source(err)
            } else {
                Error::from_io(err, path, "failed to read JSON file")
            }
        })?;
        let document = Self::parse_with_context(&input, &path.display().to_string())
            .map_err(|err| err.with_path(path))?;
        debug!(path = %path.display(), keys = document.fields.len(), "loaded JSON document");
        Ok(document)
    }

    pub fn from_json_str(input: &str) -> Result<Self, Error> {
        Self::parse_with_context(input, "inline document")
    }

    fn parse_with_context(input: &str, context: &str) -> Result<Self, Error> {
        let value: Value = parse::from_str(input).map_err(|err| {
            Error::new(ErrorKind::Parse)
                .with_message(format!("invalid JSON: {err}"))
                .with_hint(parse::hint_for_error(&err, context))
                .with_source(err)
        })?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::new(ErrorKind::Shape)
                .with_message(format!(
                    "document root is {}, expected an object",
                    value_kind(&other)
                ))
                .with_hint("The text can only be injected into a top-level JSON object.")),
        }
    }

    /// Set `key` to `text`, returning the placeholder it replaced, if any.
    pub fn inject(&mut self, key: &str, text: &str) -> Option<Value> {
        self.fields
            .insert(key.to_string(), Value::String(text.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn to_pretty_string(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(&self.fields).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to encode JSON document")
                .with_source(err)
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let body = self.to_pretty_string()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|err| Error::from_io(err, dir, "failed to create temporary file"))?;
        tmp.write_all(body.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|err| Error::from_io(err, tmp.path(), "failed to write temporary file"))?;

        // Keep the mode of the file being replaced; the temp file starts as 0600.
        match fs::metadata(path) {
            Ok(meta) => tmp
                .as_file()
                .set_permissions(meta.permissions())
                .map_err(|err| Error::from_io(err, path, "failed to copy file permissions"))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(Error::from_io(err, path, "failed to stat JSON file")),
        }

        tmp.persist(path)
            .map_err(|err| Error::from_io(err.error, path, "failed to replace JSON file"))?;
        debug!(path = %path.display(), bytes = body.len(), "wrote JSON document");
        Ok(())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
