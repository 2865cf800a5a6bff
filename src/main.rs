//! Wiring & DI. Entry point: parse CLI, resolve settings, hand off to the image saver.
//! No business logic here; validation is delegated to SettingsProvider.

use clap::Parser;
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use tags_cloud::adapters::cli::CliArgs;
use tags_cloud::adapters::persistence::{FsImageSaver, FsWordListSource};
use tags_cloud::domain::Bitmap;
use tags_cloud::ports::{ImageSaver, SettingsPort};
use tags_cloud::shared::config::AppConfig;
use tags_cloud::usecases::SettingsProvider;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let args = CliArgs::parse();
    let check_only = args.check;
    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });
    let options = args.into_options(&cfg);

    // --- Settings: resolved once, read-only afterwards ---
    let word_lists = FsWordListSource::new();
    let provider = SettingsProvider::new(&options, &word_lists);
    let settings = match provider.settings() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            anyhow::bail!("invalid configuration: {}", e);
        }
    };

    if check_only {
        println!("{}", serde_json::to_string_pretty(settings)?);
        return Ok(());
    }

    // --- Output: background canvas at the target resolution ---
    let coloring = provider
        .coloring_options()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let canvas = Bitmap::filled(settings.resolution(), coloring.background_fill.color)?;
    let saver = FsImageSaver::new();
    saver
        .save_image(Path::new(settings.output_path()), &canvas, settings.resolution())
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!(output = %settings.output_path(), "done");
    Ok(())
}
