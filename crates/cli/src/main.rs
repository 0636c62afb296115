use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use plugmat_core::annotations;
use plugmat_core::generator::{GeneratorConfig, TriggerEvent};

mod commands;

/// Plugmat - CI build-matrix generator for Indico plugin repositories
#[derive(Parser)]
#[command(name = "plugmat")]
#[command(about = "Generates a CI build matrix for Indico plugin repositories")]
#[command(version)]
struct Cli {
    /// Path to the repository root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover plugins and append the matrix line to the CI output file
    Generate {
        /// Event that triggered the run (defaults to $GITHUB_EVENT_NAME)
        #[arg(long)]
        event: Option<String>,
        /// Repository in owner/name form (defaults to $GITHUB_REPOSITORY)
        #[arg(long)]
        repository: Option<String>,
        /// Pull-request number (defaults to $PR_NUMBER)
        #[arg(long)]
        pr_number: Option<String>,
        /// Output file for the matrix line (defaults to $GITHUB_OUTPUT)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List discovered plugins without writing any output
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            event,
            repository,
            pr_number,
            output,
        } => {
            let config = GeneratorConfig {
                repo_root: cli.root,
                event: TriggerEvent::from_event_name(
                    &event
                        .or_else(|| env::var("GITHUB_EVENT_NAME").ok())
                        .unwrap_or_default(),
                ),
                repository: repository.or_else(|| env::var("GITHUB_REPOSITORY").ok()),
                pr_number: pr_number.or_else(|| env::var("PR_NUMBER").ok()),
                output_path: output.or_else(|| env::var("GITHUB_OUTPUT").ok().map(PathBuf::from)),
            };
            commands::generate::execute(config)
        }
        Commands::List => commands::list::execute(&cli.root),
    };

    // Fatal errors surface as a single annotation so the CI log shows them
    if let Err(err) = result {
        annotations::error(&err);
        std::process::exit(1);
    }
}
