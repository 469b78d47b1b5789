use clap::Parser;
use shortly_cli::cli::dispatcher::Dispatcher;
use shortly_cli::cli::main_types::Cli;
use shortly_cli::config::AppConfig;
use shortly_cli::core::services::build_service;
use shortly_cli::utils::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A .env file is honored, but real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    // Command-line overrides are part of one-time initialization; the config
    // is immutable from here on
    if cli.mock {
        config.use_mock_api = true;
    }
    if let Some(api_key) = cli.api_key.clone() {
        config.api_key = Some(api_key);
    }

    logging::init(config.enable_debug || cli.verbose);

    if cli.verbose {
        println!("Verbose mode is enabled");
        println!("Using API base URL: {}", config.api_url);
        if config.use_mock_api {
            println!("Using mock service (no network calls)");
        }
    }

    let service = match build_service(&config) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Error: {}", err.display_friendly());
            std::process::exit(1);
        }
    };

    let dispatcher = Dispatcher::new(config, service, cli.verbose);

    if let Err(err) = dispatcher.dispatch(cli.command).await {
        eprintln!("Error: {}", err.display_friendly());
        if let Some(hint) = err.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}
