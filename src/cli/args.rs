//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::payload::MeetingType;

/// discovery - Turn discovery meeting notes into an executive-ready report
#[derive(Parser, Debug)]
#[command(name = "discovery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Discovery Intelligence Report
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Skip the DOCX export
        #[arg(long)]
        no_docx: bool,

        /// Directory to write the report to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File name for the exports, without extension
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print the model request without sending it
    Prompt {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Convert a Markdown report to DOCX
    Convert {
        /// Markdown file to convert
        input: PathBuf,

        /// Output file path (defaults to the input with a .docx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Meeting inputs shared by `generate` and `prompt`
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Client name
    #[arg(short, long)]
    pub client: Option<String>,

    /// Project name
    #[arg(short, long)]
    pub project: Option<String>,

    /// Meeting type
    #[arg(short, long, value_enum)]
    pub meeting_type: Option<MeetingType>,

    /// Transcript or rough notes
    #[arg(long, conflicts_with = "notes_file")]
    pub notes: Option<String>,

    /// Read transcript or notes from a file ("-" for stdin)
    #[arg(short = 'f', long)]
    pub notes_file: Option<PathBuf>,

    /// TOML file with structured inputs (field = "text")
    #[arg(short, long)]
    pub inputs: Option<PathBuf>,

    /// Set a single field, e.g. --set kpi_burden="40 KPIs"
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Leave out the "Open Questions & Data Needed" section
    #[arg(long)]
    pub no_open_questions: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
