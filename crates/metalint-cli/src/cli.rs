//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use metalint::{Language, StandardKind};
use std::path::PathBuf;

/// metalint: quality inspection for archival and museum metadata
#[derive(Parser)]
#[command(name = "metalint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a metadata document and report findings per record
    Inspect {
        /// EAD or LIDO document (XML or its JSON rendering), or a directory
        /// whose .xml files are inspected as one batch
        #[arg(value_name = "PATH")]
        file: PathBuf,

        /// Metadata standard of the document
        #[arg(short, long)]
        standard: StandardKind,

        /// JSON file with configuration overrides
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Language of rendered messages (en, de; others fall back to en)
        #[arg(short, long, default_value = "en", value_parser = parse_language)]
        lang: Language,

        /// With json format, emit one flat object per record with rendered messages
        #[arg(long)]
        flat: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference date for future-date checks (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<chrono::NaiveDate>,

        /// Field delimiter for csv format
        #[arg(long, default_value = ",")]
        delimiter: char,
    },

    /// Print the effective configuration of a standard
    Config {
        /// Metadata standard (ead, lido)
        #[arg(value_name = "STANDARD")]
        standard: StandardKind,

        /// JSON file with configuration overrides to apply first
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn parse_language(code: &str) -> Result<Language, String> {
    Ok(Language::from_code(code))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_inspect_defaults() {
        let cli = Cli::parse_from(["metalint", "inspect", "doc.json", "--standard", "lido"]);
        match cli.command {
            Commands::Inspect {
                standard,
                format,
                lang,
                delimiter,
                today,
                ..
            } => {
                assert_eq!(standard, StandardKind::Lido);
                assert_eq!(format, OutputFormat::Table);
                assert_eq!(lang, Language::En);
                assert_eq!(delimiter, ',');
                assert!(today.is_none());
            }
            Commands::Config { .. } => panic!("expected inspect"),
        }
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        let cli = Cli::parse_from([
            "metalint", "inspect", "doc.xml", "--standard", "ead", "--lang", "fr",
        ]);
        let Commands::Inspect { lang, .. } = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(lang, Language::En);

        let cli = Cli::parse_from(["metalint", "inspect", "doc.xml", "-s", "ead", "-l", "DE"]);
        let Commands::Inspect { lang, .. } = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(lang, Language::De);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    }
}
