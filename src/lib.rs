pub mod cli;
pub mod model;
pub mod parser;
pub mod writer;

use anyhow::Context;

use crate::cli::Cli;
use crate::model::ParseResult;
use crate::writer::{OutputFormat, WriterOptions};

/// Parse `text` and render it in `format`.
pub fn convert(
    text: &str,
    format: OutputFormat,
    options: &WriterOptions,
) -> anyhow::Result<String> {
    let result: ParseResult = parser::parse(text);
    writer::serializer_for(format, options).serialize(&result)
}

pub fn run(args: &Cli) -> anyhow::Result<()> {
    // 1. ── Read ───────────────────────────────────────────────────────
    tracing::info!("File to parse: {}", args.input.display());
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    // invalid UTF-8 decodes to U+FFFD
    let text = String::from_utf8_lossy(&bytes);

    // 2. ── Parse + serialize ──────────────────────────────────────────
    let output = convert(&text, args.format(), &args.writer_options())
        .with_context(|| format!("Converting {}", args.input.display()))?;

    // 3. ── Write output ───────────────────────────────────────────────
    writer::emit(&output, args.output.as_deref())?;

    Ok(())
}

/// Diagnostics go to stderr so stdout only ever carries the converted file.
///
/// A subscriber installed earlier in the process is left in place.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
