//! ColorMood Demo — applies one mood preset to one photo.
//!
//! Usage: `colormood-demo <IMAGE> [MOOD] [--pipeline hsv|lab]`
//!
//! Writes the filtered PNG and an HTML comparison page (with an embedded
//! download link) into the output directory.

mod config;
mod image_loader;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colormood_core::{DownloadLink, MoodSession, PresetCatalog};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::AppConfig;
use image_loader::{ImageLoadError, load_image};
use report::Report;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Core(#[from] colormood_core::ColorMoodError),
    #[error(transparent)]
    Load(#[from] ImageLoadError),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    let config = AppConfig::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {e}");
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: AppConfig) -> Result<(), DemoError> {
    tracing::info!("ColorMood starting ({})", config.pipeline);
    let catalog = PresetCatalog::load(&config.presets_path)?;
    let mood = config.mood.clone().unwrap_or_else(|| catalog.first_mood().to_string());
    tracing::info!(
        "available moods: {}",
        catalog.names().collect::<Vec<_>>().join(", ")
    );

    let source = load_image(&config.image)?;
    let mut session = MoodSession::new(&catalog, &mood)?;
    let params = session.resolve(&catalog)?;
    let filtered = config.pipeline.run(&source, &params);

    let download = DownloadLink::with_filename(&filtered, &config.filename)?;
    let png_path = config.output_dir.join(&download.filename);
    write_file(&png_path, &download.png_bytes()?)?;

    let html = Report {
        mood: &mood,
        pipeline: config.pipeline,
        params: &params,
        before: &source,
        after: &filtered,
        download: &download,
    }
    .to_html()?;
    let html_path = config.output_dir.join("colormood_compare.html");
    write_file(&html_path, html.as_bytes())?;

    tracing::info!(
        "mood `{mood}` applied: {} and {}",
        png_path.display(),
        html_path.display()
    );
    Ok(())
}

fn write_file(path: &std::path::Path, bytes: &[u8]) -> Result<(), DemoError> {
    std::fs::write(path, bytes).map_err(|source| DemoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
