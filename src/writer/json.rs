//! JSON passthrough of the parsed model.

use anyhow::{Context, Result};

use super::Serializer;
use crate::model::ParseResult;

#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    pub pretty: bool,
}

impl Serializer for JsonSerializer {
    fn serialize(&self, result: &ParseResult) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        text.context("Serializing records to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Achievement, Stat};

    fn sample() -> ParseResult {
        ParseResult {
            achievements: vec![
                Achievement {
                    id: "ach_first".to_string(),
                    name: Some("First".to_string()),
                    display: Some("First desc".to_string()),
                },
                Achievement {
                    id: "ach_empty".to_string(),
                    name: None,
                    display: None,
                },
            ],
            stats: vec![Stat {
                id: "stat_count".to_string(),
                display: Some("Count Stat".to_string()),
            }],
        }
    }

    #[test]
    fn test_compact_layout_and_field_order() {
        let json = JsonSerializer::default().serialize(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"achievements":[{"id":"ach_first","name":"First","display":"First desc"},{"id":"ach_empty","name":null,"display":null}],"stats":[{"id":"stat_count","display":"Count Stat"}]}"#
        );
    }

    #[test]
    fn test_empty_result() {
        let json = JsonSerializer::default()
            .serialize(&ParseResult::default())
            .unwrap();
        assert_eq!(json, r#"{"achievements":[],"stats":[]}"#);
    }

    #[test]
    fn test_pretty_reads_back_identically() {
        let json = JsonSerializer { pretty: true }.serialize(&sample()).unwrap();
        assert!(json.contains('\n'));
        let back: ParseResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_quotes_are_escaped() {
        let result = ParseResult {
            achievements: vec![],
            stats: vec![Stat {
                id: "stat_q".to_string(),
                display: Some("say \"hi\"".to_string()),
            }],
        };
        let json = JsonSerializer::default().serialize(&result).unwrap();
        assert!(json.contains(r#""display":"say \"hi\"""#));
    }
}
