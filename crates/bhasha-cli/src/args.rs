//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bhasha")]
#[command(about = "Bhasha Mitra - LLM-assisted Bengali proofreading")]
#[command(
    long_about = r#"Bhasha Mitra - LLM-assisted Bengali proofreading

USAGE:
  bhasha check <FILE>                    # Spelling, punctuation and euphony report
  bhasha check <FILE> --tone formal      # Also suggest rewrites toward a tone
  bhasha check <FILE> --style cholito    # Also suggest sadhu/cholito conversion
  bhasha fix <FILE>                      # Apply the first spelling candidate everywhere

SETTINGS:
  bhasha config show
  bhasha config set-key <KEY>
  bhasha config set-model <MODEL>
  bhasha config set-doc-type <TYPE>"#
)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, env = "BHASHA_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a file and print the suggestions
    Check {
        /// Text file to analyze
        file: PathBuf,

        /// Target tone: formal, informal, professional, friendly, respectful, persuasive, neutral, academic
        #[arg(long)]
        tone: Option<String>,

        /// Target style: sadhu or cholito
        #[arg(long)]
        style: Option<String>,

        /// Which suggestions to show: all, spelling or punctuation
        #[arg(long, default_value = "all")]
        filter: String,

        /// Document type, overriding the saved setting
        #[arg(long)]
        doc_type: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Analyze only the first occurrence of this passage
        #[arg(long)]
        select: Option<String>,
    },

    /// Apply the first candidate of every spelling suggestion
    Fix {
        /// Text file to correct
        file: PathBuf,

        /// Write the corrected text here instead of overwriting the input
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Settings management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display the current settings
    Show,

    /// Store the model service API key
    SetKey {
        /// The API key
        key: String,
    },

    /// Store the model identifier
    SetModel {
        /// Model identifier, e.g. gemini-2.5-flash
        model: String,
    },

    /// Store the default document type
    SetDocType {
        /// generic, academic, official, marketing or social
        doc_type: String,
    },
}
