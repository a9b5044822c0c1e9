use crate::app::output::OutputFormat;
use crate::config::ApiConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "quake-feed")]
#[command(about = "Fetch the current earthquake list from the earthquake API")]
pub struct CliConfig {
    #[arg(long, help = "API root, e.g. https://quakes.example/api (defaults to $API_BASE_URL)")]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML file with an [api] table")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, help = "Check coordinates and code uniqueness of the fetched records")]
    pub check: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Picks the API configuration: `--config` file first, then `--base-url`,
    /// then the environment. `--timeout-seconds` applies on top of any of them.
    pub fn api_config(&self) -> Result<ApiConfig> {
        let config = if let Some(path) = &self.config {
            ApiConfig::from_file(path)?
        } else if let Some(base_url) = &self.base_url {
            ApiConfig::new(base_url.clone())
        } else {
            ApiConfig::from_env()?
        };

        Ok(match self.timeout_seconds {
            Some(seconds) => config.with_timeout_seconds(seconds),
            None => config,
        })
    }
}
