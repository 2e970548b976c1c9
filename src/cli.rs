use clap::Parser;
use std::path::PathBuf;

use crate::writer::{OutputFormat, WriterOptions};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parse Steam raw stats and achievements into JSON or C#"
)]
pub struct Cli {
    /// Raw stats/achievements dump exported from Steamworks
    pub input: PathBuf,

    /// Write output as C# instead of JSON
    #[arg(short = 'c', long)]
    pub csharp: bool,

    /// Pretty-print JSON output
    #[arg(short = 'p', long)]
    pub pretty: bool,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Namespace wrapping the generated C# class
    #[arg(long, default_value = "BS")]
    pub namespace: String,

    /// Name of the generated C# class
    #[arg(long, default_value = "StatsAndAchievementsDefinitions")]
    pub class_name: String,

    /// Log parser diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn format(&self) -> OutputFormat {
        if self.csharp {
            OutputFormat::CSharp
        } else {
            OutputFormat::Json
        }
    }

    pub fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            namespace: self.namespace.clone(),
            class_name: self.class_name.clone(),
            pretty: self.pretty,
        }
    }
}
