use clap::Parser;
use quake_feed::utils::error::ErrorCategory;
use quake_feed::utils::logger::{self, LogFormat};
use quake_feed::{
    render, validate_earthquakes, CliConfig, EarthquakeService, QuakeError, ReqwestApiClient,
    Validate,
};

async fn run(cli: &CliConfig) -> quake_feed::Result<usize> {
    let config = cli.api_config()?;
    config.validate()?;
    tracing::debug!("API config: {:?}", config);

    let client = ReqwestApiClient::new(&config)?;
    let service = EarthquakeService::new(client);

    let quakes = service.get_earthquakes().await?;
    tracing::info!("Fetched {} earthquakes", quakes.len());

    if cli.check {
        validate_earthquakes(&quakes)?;
        tracing::info!("All {} records passed checks", quakes.len());
    }

    let stdout = std::io::stdout();
    render(&quakes, cli.format, stdout.lock())?;
    Ok(quakes.len())
}

fn exit_code(e: &QuakeError) -> i32 {
    match e.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Network => 2,
        ErrorCategory::Io => 3,
        ErrorCategory::Validation => 4,
    }
}

#[tokio::main]
async fn main() {
    // A missing .env is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let cli = CliConfig::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ quake-feed failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}
