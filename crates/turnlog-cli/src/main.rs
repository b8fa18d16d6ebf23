mod cmd_check;
mod cmd_count;
mod cmd_parse;
mod config;

use clap::{Parser, Subcommand};
use cmd_parse::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "turnlog",
    version,
    about = "Turn loosely-structured dialogue logs into ordered role-tagged records"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a dialogue log into message records
    Parse {
        /// Path to the raw log file
        file: PathBuf,
        /// YAML marker config (defaults to the USER/GEMINI/AGENT vocabulary)
        #[arg(long)]
        markers: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Cut the conversation body out of its transcript banner lines first
        #[arg(long)]
        strip_banners: bool,
        /// Print the first and last N turns to stderr as a sanity check
        #[arg(long)]
        preview: Option<usize>,
        /// Exit with an error when zero turns are parsed
        #[arg(long)]
        deny_empty: bool,
    },
    /// Print the number of turns in a dialogue log
    Count {
        /// Path to the raw log file
        file: PathBuf,
        /// YAML marker config (defaults to the USER/GEMINI/AGENT vocabulary)
        #[arg(long)]
        markers: Option<PathBuf>,
        /// Cut the conversation body out of its transcript banner lines first
        #[arg(long)]
        strip_banners: bool,
    },
    /// Validate a marker config and print the resolved table
    Check {
        /// YAML marker config (defaults to the built-in vocabulary)
        #[arg(long)]
        markers: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Parse {
            file,
            markers,
            format,
            output,
            strip_banners,
            preview,
            deny_empty,
        } => cmd_parse::execute(cmd_parse::ParseParams {
            file: &file,
            markers: markers.as_deref(),
            format,
            output: output.as_deref(),
            strip_banners,
            preview,
            deny_empty,
        }),
        Command::Count {
            file,
            markers,
            strip_banners,
        } => cmd_count::execute(&file, markers.as_deref(), strip_banners),
        Command::Check { markers } => cmd_check::execute(markers.as_deref()),
    }
}
