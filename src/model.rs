use serde::{Deserialize, Serialize};

/// One achievement as found in the raw dump.
///
/// `name` and `display` come from the first and second `"english"` lines
/// that follow the identifying line; either is `None` when the input ran out
/// before a matching line was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: Option<String>,
    pub display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    pub display: Option<String>,
}

/// Either kind of record, as produced by a single parse step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Achievement(Achievement),
    Stat(Stat),
}

/// Everything recovered from one input file, in discovery order.
///
/// Built once by the parser and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub achievements: Vec<Achievement>,
    pub stats: Vec<Stat>,
}

impl ParseResult {
    pub fn push(&mut self, record: Record) {
        match record {
            Record::Achievement(ach) => self.achievements.push(ach),
            Record::Stat(stat) => self.stats.push(stat),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty() && self.stats.is_empty()
    }
}
