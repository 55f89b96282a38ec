//! Command-line interface definitions.
//!
//! Defines the CLI structure for the fplopt application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fantasy football lineup and transfer optimiser
#[derive(Parser, Debug)]
#[command(name = "fplopt")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the fplopt CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick the best lineup for the current squad and suggest transfers
    Recommend(RecommendArgs),

    /// List the legal formations in evaluation order
    Formations,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `recommend` subcommand.
#[derive(Parser, Debug)]
pub struct RecommendArgs {
    /// Team id on the fantasy API (falls back to config / FPLOPT_TEAM_ID)
    #[arg(long)]
    pub team_id: Option<u64>,

    /// Number of transfers to suggest (0-11)
    #[arg(short, long, default_value_t = 1)]
    pub transfers: u8,

    /// Which upcoming fixture to optimise for (1 = next)
    #[arg(short, long, default_value_t = 1)]
    pub round: u32,

    /// Read the squad from a JSON file instead of the fantasy API
    #[arg(long)]
    pub squad: Option<PathBuf>,

    /// Prediction rows (overrides `data.predictions`)
    #[arg(short, long)]
    pub predictions: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Subcommands for `fplopt config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file.
    #[arg(default_value = "config.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(default_value = "config.toml")]
    pub config: PathBuf,
}
