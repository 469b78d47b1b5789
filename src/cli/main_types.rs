use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shortly-cli")]
#[command(about = "Command line client for a URL shortening API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use the offline mock service regardless of configuration
    #[arg(long, global = true)]
    pub mock: bool,

    #[arg(long, global = true, env = "SHORTLY_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a long URL
    Shorten {
        /// The URL to shorten (must start with http:// or https://)
        url: String,
    },
    /// Look up the original URL behind a short code
    Expand {
        /// Short code to expand
        short_code: String,
    },
    /// Show click analytics for a short code
    Stats {
        /// Short code to inspect
        short_code: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,
}
