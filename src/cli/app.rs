//! CLI definitions and entry point

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use repo_conformance::output::OutputMode;

/// repo-conformance - Check repositories against shared project policies
#[derive(Parser, Debug)]
#[command(
    name = "repo-conformance",
    version,
    about = "Check repositories against shared project policies",
    long_about = "Check every repository in a manifest for conformance.\n\n\
                  Repo-level checks inspect GitHub settings. Worktree checks\n\
                  inspect a fresh checkout of the main branch."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Manifest to load instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check repositories in the manifest for conformance
    Check {
        /// Name of the repo to check, or all if omitted
        repo: Option<String>,

        /// Checks to skip (comma or space separated)
        #[arg(long, value_name = "NAMES")]
        exclude: Vec<String>,

        /// Disabled-by-default checks to run (comma or space separated)
        #[arg(long, value_name = "NAMES")]
        include: Vec<String>,

        /// Check this local working tree instead of a fresh clone
        #[arg(long, value_name = "PATH", requires = "repo")]
        worktree: Option<PathBuf>,
    },

    /// List repositories in the manifest
    List,

    /// List GitHub repositories of the manifest user
    ListRepos,

    /// List available checks and their default state
    Checks,

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

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let manifest = cli.manifest.as_deref();

    match cli.command {
        Some(Command::Check {
            repo,
            exclude,
            include,
            worktree,
        }) => commands::check(
            &commands::CheckArgs {
                repo,
                exclude,
                include,
                worktree,
            },
            manifest,
            output_mode,
        ),
        Some(Command::List) => commands::list(manifest, output_mode),
        Some(Command::ListRepos) => commands::list_repos(manifest, output_mode),
        Some(Command::Checks) => commands::checks(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": repo_conformance::VERSION
                    })
                );
            } else {
                println!("repo-conformance v{}", repo_conformance::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": repo_conformance::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("repo-conformance v{}", repo_conformance::VERSION);
                println!("\nRun 'repo-conformance --help' for usage");
                println!("Run 'repo-conformance check' to check the manifest");
            }
            Ok(())
        },
    }
}
