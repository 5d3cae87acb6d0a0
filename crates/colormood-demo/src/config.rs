//! Launcher configuration for the demo.
//!
//! Every option can also come from a `COLORMOOD_*` environment variable.

use std::path::PathBuf;

use clap::Parser;
use colormood_core::{DEFAULT_DOWNLOAD_FILENAME, Pipeline};

/// Runtime configuration for the ColorMood demo.
#[derive(Parser, Debug, Clone)]
#[command(name = "colormood-demo")]
#[command(version, about = "Apply a mood preset to a photo", long_about = None)]
pub struct AppConfig {
    /// JPEG or PNG image to filter
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Mood name from the preset catalog (first mood if omitted)
    #[arg(value_name = "MOOD")]
    pub mood: Option<String>,

    /// Preset catalog file
    #[arg(
        short = 'c',
        long = "presets",
        value_name = "FILE",
        env = "COLORMOOD_PRESETS",
        default_value = "color_moods.json"
    )]
    pub presets_path: PathBuf,

    /// Directory for the filtered PNG and the comparison page
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "COLORMOOD_OUTPUT_DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,

    /// Filter pipeline: `hsv` or `lab`
    #[arg(
        short,
        long,
        value_name = "PIPELINE",
        env = "COLORMOOD_PIPELINE",
        default_value = "hsv"
    )]
    pub pipeline: Pipeline,

    /// Suggested download filename
    #[arg(
        short,
        long,
        value_name = "NAME",
        env = "COLORMOOD_FILENAME",
        default_value = DEFAULT_DOWNLOAD_FILENAME
    )]
    pub filename: String,
}
