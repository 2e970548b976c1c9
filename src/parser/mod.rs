//! Line-oriented parser for Steamworks raw stats/achievements dumps.
//
//  Shape of the records we care about (tab separated, one pair per line):
//
//      "name"      "ach_<id>"          identifying line, achievement
//      "english"   "<name>"            first english line  -> name
//      "english"   "<description>"     second english line -> display
//
//      "name"      "stat_<id>"         identifying line, stat
//      "name"      "<label>"           next name line      -> display
//
//  Everything else in the dump is skipped.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Achievement, ParseResult, Record, Stat};

static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""name"\s+".*"$"#).unwrap());
static RE_ENGLISH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""english"\s+".*"$"#).unwrap());

const ACHIEVEMENT_PREFIX: &str = "ach_";
const STAT_PREFIX: &str = "stat_";

/// Forward-only view over the trimmed lines of the input.
///
/// Every line handed out (matching or not) is gone for good; there is no way
/// to step back.
pub struct LineStream<'a> {
    lines: std::vec::IntoIter<&'a str>,
}

impl<'a> LineStream<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
        Self {
            lines: lines.into_iter(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 0
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Consume lines up to and including the first one matching `rx` and
    /// return its value cell. `None` once the stream is exhausted.
    pub fn take_until(&mut self, rx: &Regex) -> Option<String> {
        self.lines
            .find(|line| rx.is_match(line))
            .map(|line| value_cell(line).to_string())
    }
}

/// Second tab-separated field of `line` with the quotes trimmed off.
///
/// Runs of tabs between key and value count as a single separator. A line
/// with no second field yields an empty value.
pub fn value_cell(line: &str) -> &str {
    line.split('\t')
        .filter(|field| !field.is_empty())
        .nth(1)
        .unwrap_or("")
        .trim_matches('"')
}

/// Parse the whole dump into achievements and stats, in source order.
pub fn parse(text: &str) -> ParseResult {
    let mut stream = LineStream::new(text);
    let mut result = ParseResult::default();

    tracing::debug!("Parsing {} lines", stream.remaining());

    while let Some(record) = next_record(&mut stream) {
        if let Some(record) = record {
            result.push(record);
        }
    }

    tracing::info!(
        "Parsed {} achievements and {} stats",
        result.achievements.len(),
        result.stats.len()
    );
    result
}

/// One step of the outer scan.
///
/// Outer `None` means the stream is exhausted. Inner `None` means an
/// identifying line was consumed but its id belongs to neither category.
fn next_record(stream: &mut LineStream<'_>) -> Option<Option<Record>> {
    if stream.is_empty() {
        return None;
    }
    let id = stream.take_until(&RE_NAME)?;

    let record = if id.starts_with(ACHIEVEMENT_PREFIX) {
        Some(Record::Achievement(parse_achievement(id, stream)))
    } else if id.starts_with(STAT_PREFIX) {
        Some(Record::Stat(parse_stat(id, stream)))
    } else {
        tracing::debug!("Skipping unrecognised name `{id}`");
        None
    };
    Some(record)
}

fn parse_achievement(id: String, stream: &mut LineStream<'_>) -> Achievement {
    let name = stream.take_until(&RE_ENGLISH);
    let display = stream.take_until(&RE_ENGLISH);
    if name.is_none() || display.is_none() {
        tracing::debug!("Achievement `{id}` is missing english text");
    }
    Achievement { id, name, display }
}

fn parse_stat(id: String, stream: &mut LineStream<'_>) -> Stat {
    let display = stream.take_until(&RE_NAME);
    if display.is_none() {
        tracing::debug!("Stat `{id}` has no display name");
    }
    Stat { id, display }
}
