use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use fplopt::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use fplopt::adapter::inbound::cli::output::{self, OutputConfig};
use fplopt::adapter::inbound::cli::{config, formations, recommend};
use fplopt::error::Result;
use fplopt::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet), cli.color);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Recommend(args) => {
            let mut config = Config::load_or_default(args.config.as_deref())?;
            if let Some(level) = verbosity_level(cli.verbose) {
                config.logging = config.logging.with_level(level);
            }
            config.init_logging();
            debug!(?args, "fplopt starting");
            recommend::execute(&args, &config).await
        }
        Commands::Formations => formations::execute(),
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(&args.path, args.force)
        }
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}

fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
