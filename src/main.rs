//! Purpose: `textfill` CLI entry point.
//! Role: Binary crate root; parses args, runs the fill pipeline, prints the report line.
//! Invariants: Stdout carries exactly one report line on success and nothing on failure.
//! Invariants: Errors go to stderr: human text on a terminal, one JSON object otherwise.
//! Invariants: Process exit code is derived from `to_exit_code`.
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

use textfill::core::error::{Error, ErrorKind, to_exit_code};
use textfill::fill::{DEFAULT_JSON_FILE, DEFAULT_KEY, DEFAULT_TEXT_FILE, FillConfig, run_fill};
use textfill::report::report_line;

#[derive(Parser)]
#[command(
    name = "textfill",
    version,
    about = "Inject the contents of a text file into a field of a JSON document",
    long_about = None,
    after_help = r#"EXAMPLES
  $ textfill                                   # long-text.txt -> test-exceed-basic.json "text"
  $ textfill --text-file body.txt --json-file request.json
  $ textfill --key prompt --output filled.json

The JSON file is rewritten atomically with 2-space indentation; non-ASCII
text is written as-is. Set RUST_LOG=debug (or pass -v) to trace each step."#
)]
struct Cli {
    #[arg(
        long,
        default_value = DEFAULT_TEXT_FILE,
        help = "Text file whose trimmed contents are injected",
        value_hint = ValueHint::FilePath
    )]
    text_file: PathBuf,
    #[arg(
        long,
        default_value = DEFAULT_JSON_FILE,
        help = "JSON document to fill (top-level object)",
        value_hint = ValueHint::FilePath
    )]
    json_file: PathBuf,
    #[arg(
        long,
        short = 'o',
        help = "Write the filled document here instead of overwriting --json-file",
        value_hint = ValueHint::FilePath
    )]
    output: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_KEY, help = "Top-level key that receives the text")]
    key: String,
    #[arg(short, long, action = ArgAction::Count, help = "Log pipeline steps to stderr")]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> FillConfig {
        FillConfig {
            text_path: self.text_file,
            json_path: self.json_file,
            output_path: self.output,
            key: self.key,
        }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                return Ok(0);
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(clap_error_summary(&err))
                    .with_hint("Run `textfill --help` for usage."));
            }
        },
    };

    init_tracing(cli.verbose);
    if cli.key.is_empty() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("--key must not be empty")
            .with_hint("Pass the name of a top-level field, e.g. --key text."));
    }

    let outcome = run_fill(&cli.into_config())
        .map_err(add_io_hint)
        .map_err(add_internal_hint)?;
    println!("{}", report_line(outcome.text_chars));
    Ok(0)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("error: ").to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}

fn add_io_hint(err: Error) -> Error {
    if err.hint().is_some() {
        return err;
    }
    match err.kind() {
        ErrorKind::NotFound => err.with_hint(
            "File not found. Paths are relative to the working directory; see --text-file/--json-file.",
        ),
        ErrorKind::Permission => {
            err.with_hint("Permission denied. Check file and directory permissions.")
        }
        ErrorKind::Io => err.with_hint("I/O error. Check the path, filesystem, and disk space."),
        _ => err,
    }
}

fn add_internal_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Internal || err.hint().is_some() {
        return err;
    }
    err.with_hint("Unexpected internal failure. Retry with RUST_BACKTRACE=1 and RUST_LOG=debug.")
}

fn emit_error(err: &Error) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, true));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::Permission => "permission denied".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
        ErrorKind::Encoding => "invalid text encoding".to_string(),
        ErrorKind::Parse => "invalid JSON".to_string(),
        ErrorKind::Shape => "unexpected document shape".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn colorize_label(label: &str, enabled: bool, code: &str) -> String {
    if !enabled {
        return label.to_string();
    }
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, "31"),
        error_message(err)
    ));
    if let Some(path) = err.path() {
        lines.push(format!("  path: {}", path.display()));
    }
    for cause in error_causes(err) {
        lines.push(format!("  caused by: {cause}"));
    }
    if let Some(hint) = err.hint() {
        lines.push(format!("{} {hint}", colorize_label("hint:", use_color, "33")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{Cli, add_io_hint, error_json, error_text};
    use clap::Parser;
    use std::path::Path;
    use textfill::core::error::{Error, ErrorKind};

    #[test]
    fn defaults_match_fixed_file_names() {
        let config = Cli::try_parse_from(["textfill"]).expect("parse").into_config();
        assert_eq!(config.text_path, Path::new("long-text.txt"));
        assert_eq!(config.json_path, Path::new("test-exceed-basic.json"));
        assert!(config.output_path.is_none());
        assert_eq!(config.key, "text");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Cli::try_parse_from([
            "textfill",
            "--text-file",
            "a.txt",
            "--json-file",
            "b.json",
            "-o",
            "c.json",
            "--key",
            "prompt",
        ])
        .expect("parse")
        .into_config();
        assert_eq!(config.text_path, Path::new("a.txt"));
        assert_eq!(config.destination(), Path::new("c.json"));
        assert_eq!(config.key, "prompt");
    }

    #[test]
    fn error_json_carries_kind_hint_and_path() {
        let err = add_io_hint(
            Error::new(ErrorKind::NotFound)
                .with_message("failed to read text file")
                .with_path("long-text.txt"),
        );
        let value = error_json(&err);
        let inner = &value["error"];
        assert_eq!(inner["kind"], "NotFound");
        assert_eq!(inner["message"], "failed to read text file");
        assert_eq!(inner["path"], "long-text.txt");
        assert!(inner["hint"].as_str().unwrap().contains("--text-file"));
        assert!(inner.get("causes").is_none());
    }

    #[test]
    fn error_text_without_color_is_plain() {
        let err = Error::new(ErrorKind::Shape).with_hint("use an object");
        let text = error_text(&err, false);
        assert_eq!(text, "error: unexpected document shape\nhint: use an object");
    }
}
