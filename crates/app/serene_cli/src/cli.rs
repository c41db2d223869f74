use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "serene", about = "Stress-management assistant in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat interactively; type `quit` to exit.
    Chat {
        /// Model provider (`gemini` or `local`); overrides `LLM_PROVIDER`.
        #[arg(long)]
        provider: Option<String>,

        /// Profile file loaded at start and saved on exit.
        #[arg(long, env = "PROFILE_PATH")]
        profile: Option<PathBuf>,
    },
    /// Print the version.
    Version,
}
