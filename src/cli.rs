//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use doc_scan_checks::VERSION;
use doc_scan_checks::output::OutputMode;

/// doc-scan-checks - Inspect identity-verification check results
#[derive(Parser, Debug)]
#[command(
    name = "doc-scan-checks",
    version,
    about = "Inspect identity-verification check results",
    long_about = "Map the JSON returned by a document-scan session into typed checks.\n\n\
                  Missing or malformed fields are reported as absent, never as errors."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarise the checks in a session result, check list, or single check
    Inspect {
        /// JSON file to read ("-" for stdin)
        file: String,

        /// Only show checks of this kind (e.g. authenticity, face-match, liveness)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Inspect { file, kind }) => {
            commands::inspect(&file, kind.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("doc-scan-checks v{VERSION}");
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("doc-scan-checks v{VERSION}");
                println!("\nRun 'doc-scan-checks --help' for usage");
                println!("Run 'doc-scan-checks inspect <file>' to summarise a session");
            }
            Ok(())
        },
    }
}
