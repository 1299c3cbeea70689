//! instance-config CLI entry point.

use clap::Parser;

use instance_config::cli::{self, Cli, Commands};
use instance_config::infrastructure::config::ConfigLoader;
use instance_config::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => cli::handle_error(&err, cli.json),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => cli::handle_error(&err, cli.json),
    };

    let result = match cli.command {
        Commands::Seed(args) => cli::commands::seed::execute(args, &config, cli.json).await,
        Commands::List(args) => cli::commands::list::execute(args, &config, cli.json).await,
        Commands::Get(args) => cli::commands::get::execute(args, &config, cli.json).await,
        Commands::Catalog => cli::commands::catalog::execute(cli.json),
    };

    if let Err(err) = result {
        cli::handle_error(&err, cli.json);
    }
}
