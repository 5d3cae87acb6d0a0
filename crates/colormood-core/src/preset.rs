//! Mood presets and the catalog they are loaded from.
//!
//! The preset file is a JSON object mapping mood name to a parameter
//! object. Every parameter is optional:
//!
//! ```json
//! {
//!   "calm":  { "hue": 10, "saturation": 0.8, "warm_shift": -10 },
//!   "vivid": { "saturation": 1.5, "contrast": 1.2, "a_shift": 8 }
//! }
//! ```
//!
//! Missing fields fall back to the identity value: 0 for shifts, 1.0 for
//! multipliers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ColorMoodError, Result};
use crate::transform::params::{HsvTemperatureParams, LabShiftParams, MoodParams};

/// A named bundle of filter parameters. Absent fields use the identity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Free-text description of the mood.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hue: Option<i32>,
    #[serde(default)]
    pub saturation: Option<f32>,
    #[serde(default)]
    pub brightness: Option<f32>,
    #[serde(default)]
    pub contrast: Option<f32>,
    #[serde(default)]
    pub warm_shift: Option<i32>,
    #[serde(default)]
    pub l_shift: Option<i32>,
    #[serde(default)]
    pub a_shift: Option<i32>,
    #[serde(default)]
    pub b_shift: Option<i32>,
}

impl Preset {
    /// HSV pipeline parameters with fallbacks applied.
    pub fn hsv_params(&self) -> HsvTemperatureParams {
        let identity = HsvTemperatureParams::default();
        HsvTemperatureParams {
            hue_shift: self.hue.unwrap_or(identity.hue_shift),
            saturation_scale: self.saturation.unwrap_or(identity.saturation_scale),
            brightness_scale: self.brightness.unwrap_or(identity.brightness_scale),
            contrast_scale: self.contrast.unwrap_or(identity.contrast_scale),
            warm_shift: self.warm_shift.unwrap_or(identity.warm_shift),
        }
    }

    /// Lab pipeline parameters with fallbacks applied.
    pub fn lab_params(&self) -> LabShiftParams {
        LabShiftParams {
            l_shift: self.l_shift.unwrap_or(0),
            a_shift: self.a_shift.unwrap_or(0),
            b_shift: self.b_shift.unwrap_or(0),
        }
    }

    /// Both parameter sets with fallbacks applied.
    pub fn params(&self) -> MoodParams {
        MoodParams {
            hsv: self.hsv_params(),
            lab: self.lab_params(),
        }
    }
}

/// Read-only mapping from mood name to [`Preset`], ordered by name.
///
/// Loaded once at startup. Share it between sessions behind an `Arc`; it
/// never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    moods: BTreeMap<String, Preset>,
}

impl PresetCatalog {
    /// Load and validate the catalog at `path`.
    ///
    /// Fails with [`ColorMoodError::PresetCatalogLoad`] if the file is
    /// missing, unreadable, malformed, or defines no moods. Callers should
    /// treat that as fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ColorMoodError::PresetCatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let catalog = Self::parse(&json, path)?;
        tracing::info!(
            "loaded {} mood presets from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from an in-memory JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::parse(json, Path::new("<memory>"))
    }

    fn parse(json: &str, path: &Path) -> Result<Self> {
        let load_error = |reason: String| ColorMoodError::PresetCatalogLoad {
            path: PathBuf::from(path),
            reason,
        };

        let moods: BTreeMap<String, Preset> =
            serde_json::from_str(json).map_err(|e| load_error(e.to_string()))?;
        if moods.is_empty() {
            return Err(load_error("catalog defines no moods".to_string()));
        }

        for (name, preset) in &moods {
            // Out-of-range presets still load; the pixel stages clamp.
            if let Err(e) = preset.params().check_ranges() {
                tracing::warn!("preset `{name}`: {e}");
            }
        }

        Ok(Self { moods })
    }

    /// Look up a mood by name.
    pub fn get(&self, mood: &str) -> Option<&Preset> {
        self.moods.get(mood)
    }

    /// Look up a mood, failing with [`ColorMoodError::UnknownMood`].
    pub fn require(&self, mood: &str) -> Result<&Preset> {
        self.get(mood)
            .ok_or_else(|| ColorMoodError::UnknownMood(mood.to_string()))
    }

    /// Mood names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.moods.keys().map(String::as_str)
    }

    /// The first mood in sorted order. A loaded catalog is never empty.
    pub fn first_mood(&self) -> &str {
        self.names().next().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }
}
