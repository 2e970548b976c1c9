//! Emit a C# definitions class for the parsed achievements and stats.
//!
//! Ids are written as enum members verbatim and english text is dropped
//! into string literals as-is: nothing is escaped or sanitised, so a dump
//! with quotes in its text or odd characters in its ids produces C# that
//! does not compile.

use anyhow::Result;
use std::fmt::Write;

use super::Serializer;
use crate::model::ParseResult;

#[derive(Debug, Clone)]
pub struct CSharpSerializer {
    pub namespace: String,
    pub class_name: String,
}

impl Serializer for CSharpSerializer {
    fn serialize(&self, result: &ParseResult) -> Result<String> {
        let mut cs = String::new();

        writeln!(cs, "// Auto-generated – DO NOT EDIT")?;
        writeln!(cs, "using System.Collections;\n")?;
        writeln!(cs, "namespace {} {{", self.namespace)?;
        writeln!(cs, "    public static class {} {{", self.class_name)?;

        // ---------------------------------------------------------------
        // 1. Achievement enum, ordinals follow discovery order
        // ---------------------------------------------------------------
        writeln!(cs, "        public enum Achievement : int {{")?;
        for (idx, ach) in result.achievements.iter().enumerate() {
            writeln!(cs, "            {} = {},", ach.id, idx)?;
        }
        writeln!(cs, "        }};\n")?;

        // ---------------------------------------------------------------
        // 2. Definition table: enum member + english name + description
        // ---------------------------------------------------------------
        writeln!(cs, "        public class AchievementDef {{")?;
        writeln!(cs, "            public readonly Achievement Id;")?;
        writeln!(cs, "            public readonly string Name;")?;
        writeln!(cs, "            public readonly string Description;\n")?;
        writeln!(
            cs,
            "            public AchievementDef(Achievement id, string name, string description) {{"
        )?;
        writeln!(cs, "                Id = id;")?;
        writeln!(cs, "                Name = name;")?;
        writeln!(cs, "                Description = description;")?;
        writeln!(cs, "            }}")?;
        writeln!(cs, "        }}\n")?;

        writeln!(
            cs,
            "        public static readonly AchievementDef[] Achievements = {{"
        )?;
        for ach in &result.achievements {
            writeln!(
                cs,
                "            new AchievementDef(Achievement.{}, \"{}\", \"{}\"),",
                ach.id,
                ach.name.as_deref().unwrap_or_default(),
                ach.display.as_deref().unwrap_or_default()
            )?;
        }
        writeln!(cs, "        }};\n")?;

        // ---------------------------------------------------------------
        // 3. Stat enum
        // ---------------------------------------------------------------
        writeln!(cs, "        public enum Stat : int {{")?;
        for (idx, stat) in result.stats.iter().enumerate() {
            writeln!(cs, "            {} = {},", stat.id, idx)?;
        }
        writeln!(cs, "        }};")?;

        writeln!(cs, "    }}")?;
        writeln!(cs, "}}")?;

        Ok(cs)
    }
}
