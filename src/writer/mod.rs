//! Output stage: turn a `ParseResult` into text and put it somewhere.

pub mod csharp;
pub mod json;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::model::ParseResult;

/// Target representation for the parsed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    CSharp,
}

/// Knobs shared by the writers; each writer reads the ones it cares about.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    pub namespace: String,
    pub class_name: String,
    pub pretty: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            namespace: "BS".to_string(),
            class_name: "StatsAndAchievementsDefinitions".to_string(),
            pretty: false,
        }
    }
}

pub trait Serializer {
    fn serialize(&self, result: &ParseResult) -> Result<String>;
}

pub fn serializer_for(format: OutputFormat, options: &WriterOptions) -> Box<dyn Serializer> {
    match format {
        OutputFormat::Json => Box::new(json::JsonSerializer {
            pretty: options.pretty,
        }),
        OutputFormat::CSharp => Box::new(csharp::CSharpSerializer {
            namespace: options.namespace.clone(),
            class_name: options.class_name.clone(),
        }),
    }
}

/// Write `text` plus a trailing newline to `out`, or to stdout when no path
/// is given. Both destinations receive the same bytes.
pub fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            tracing::info!("Writing {} bytes to {}", text.len(), path.display());
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("Writing {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("Writing to stdout")?;
            stdout.flush().context("Flushing stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_emit_file_ends_with_newline() {
        let outfile = NamedTempFile::new().unwrap();

        emit("{\"stats\":[]}", Some(outfile.path())).unwrap();

        let written = std::fs::read_to_string(outfile.path()).unwrap();
        assert_eq!(written, "{\"stats\":[]}\n");
    }
}
