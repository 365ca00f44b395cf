use clap::Parser;
use dvote_client::backend::{HttpBackend, VoteBackend};
use dvote_client::commands::{self, Cli};
use dvote_client::config::Config;
use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Using backend {} on {:?}", config.backend_url, config.network);
    if let Some(url) = config.identity_provider_url() {
        info!("Identity provider: {}", url);
    }

    let backend: Arc<dyn VoteBackend> = Arc::new(HttpBackend::from_config(&config));

    match commands::run(cli.command, backend, &config).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(why) => {
            error!("Command failed: {}", why);
            ExitCode::FAILURE
        }
    }
}
