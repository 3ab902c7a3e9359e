use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::weather::WeatherClient;

mod app;
mod cli;
mod config;
mod core;
mod screens;
mod theme;
mod tui;
mod ui;
mod weather;

pub use theme::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting skycast");

    let args = cli::Args::parse();
    let config = config::load()?;
    let theme = theme::theme_from_name(&config.theme.name);

    let api_key = args
        .key
        .or_else(|| config.resolved_api_key())
        .ok_or_else(|| {
            let path = config::config_path().map_or_else(
                || "the config file".to_string(),
                |p| p.display().to_string(),
            );
            eyre!(
                "No weatherapi.com API key configured.\n\
                 Hint: set `api_key` in {path} or export SKYCAST_API_KEY."
            )
        })?;
    let location = args.location.unwrap_or(config.default_location);

    let client = WeatherClient::new(api_key);
    let mut app = App::new(client, location, config.forecast_days, theme);
    app.run().await?;

    Ok(())
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("skycast").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "skycast.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}
