use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Socket Configurator - centralized Socket security policy management
#[derive(Parser, Debug)]
#[command(name = "socket-configurator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Tool configuration file (default: ./socket-configurator.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate policies and generate socket.yml for each repository
    Generate {
        /// Directory containing policy definitions
        #[arg(long)]
        policy_dir: Option<PathBuf>,

        /// Directory for generated socket.yml files
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Generate configuration for a specific repository only
        #[arg(short, long)]
        repo: Option<String>,

        /// Print configurations without writing to disk
        #[arg(long)]
        dry_run: bool,
    },

    /// Only validate policy definitions
    Validate {
        /// Directory containing policy definitions
        #[arg(long)]
        policy_dir: Option<PathBuf>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Validate a rendered socket.yml file
    Check {
        /// Path to socket.yml
        file: PathBuf,
    },

    /// Preview what generate would change in the output directory
    Diff {
        /// Directory containing policy definitions
        #[arg(long)]
        policy_dir: Option<PathBuf>,

        /// Directory holding previously generated files
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Diff a specific repository only
        #[arg(short, long)]
        repo: Option<String>,
    },
}
