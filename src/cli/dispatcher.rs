use crate::cli::main_types::{Commands, ConfigCommands};
use crate::config::AppConfig;
use crate::core::services::traits::UrlShortenerService;
use crate::display::ResultDisplay;
use crate::error::{AppError, CliError};
use crate::utils::logging::VerboseLogger;
use crate::utils::validation::validate_short_code;

/// Routes parsed commands to the selected service and renders outcomes.
///
/// The service (real or mock) is chosen once at startup and injected here;
/// the dispatcher never switches implementations at runtime.
pub struct Dispatcher {
    config: AppConfig,
    service: Box<dyn UrlShortenerService>,
    display: ResultDisplay,
    logger: VerboseLogger,
}

impl Dispatcher {
    pub fn new(config: AppConfig, service: Box<dyn UrlShortenerService>, verbose: bool) -> Self {
        Self {
            config,
            service,
            display: ResultDisplay::new(),
            logger: VerboseLogger::new(verbose),
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Shorten { url } => self.handle_shorten(&url).await,
            Commands::Expand { short_code } => self.handle_expand(&short_code).await,
            Commands::Stats { short_code } => self.handle_stats(&short_code).await,
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    async fn handle_shorten(&self, url: &str) -> Result<(), AppError> {
        self.logger.log(&format!("Shortening URL: {}", url));

        let result = self.service.shorten_url(url).await?;

        println!("✅ Short link created");
        println!("{}", self.display.render_shorten(&result));
        Ok(())
    }

    async fn handle_expand(&self, short_code: &str) -> Result<(), AppError> {
        validate_short_code(short_code)?;
        self.logger.log(&format!("Expanding short code: {}", short_code));

        let stats = self.service.get_original_url(short_code).await?;

        println!("{}", self.display.render_stats(&stats));
        Ok(())
    }

    async fn handle_stats(&self, short_code: &str) -> Result<(), AppError> {
        if !self.config.enable_analytics {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "Analytics are disabled; set SHORTLY_ENABLE_ANALYTICS=true to use this command"
                    .to_string(),
            )));
        }

        validate_short_code(short_code)?;
        self.logger.log(&format!("Fetching analytics for: {}", short_code));

        let payload = self.service.get_analytics(short_code).await?;

        println!("{}", self.display.render_analytics(&payload));
        Ok(())
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                println!("{}", self.display.render_config(&self.config));
                Ok(())
            }
        }
    }
}
