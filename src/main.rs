use clap::Parser;
use reqres_client::cli::dispatcher::{Dispatcher, RunStatus};
use reqres_client::cli::main_types::{Cli, Commands};
use reqres_client::storage::config::Config;
use reqres_client::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load Config
    let config = match Config::load(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            if let Some(hint) = err.troubleshooting_hint() {
                eprintln!("Hint: {}", hint);
            }
            std::process::exit(1);
        }
    };

    let overrides = cli.overrides();
    let command = cli.command.unwrap_or(Commands::Fetch);
    let dispatcher = Dispatcher::new(config, cli.config, overrides);

    // Execute the command
    match dispatcher.dispatch(command).await {
        Ok(RunStatus::Success) => {}
        Ok(RunStatus::Failed) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.troubleshooting_hint() {
                eprintln!("Hint: {}", hint);
            }
            std::process::exit(1);
        }
    }
}
