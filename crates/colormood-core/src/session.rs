//! Per-session control state and one-shot reset.
//!
//! Each user session owns a `MoodSession`. Nothing here is global: two
//! sessions sharing one [`PresetCatalog`] never see each other's controls
//! or reset requests.

use crate::error::Result;
use crate::image::MoodImage;
use crate::preset::PresetCatalog;
use crate::transform::filter::Pipeline;
use crate::transform::params::MoodParams;

/// Selected mood, live control values, and a pending-reset flag.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSession {
    mood: String,
    controls: MoodParams,
    reset_requested: bool,
}

impl MoodSession {
    /// Start a session on `mood`, seeding the controls from its preset.
    pub fn new(catalog: &PresetCatalog, mood: &str) -> Result<Self> {
        let controls = catalog.require(mood)?.params().clamped();
        Ok(Self {
            mood: mood.to_string(),
            controls,
            reset_requested: false,
        })
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    /// Current control values.
    pub fn controls(&self) -> &MoodParams {
        &self.controls
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_requested
    }

    /// Switch to another mood and re-seed the controls from its preset.
    ///
    /// On an unknown mood the session is left unchanged.
    pub fn select_mood(&mut self, catalog: &PresetCatalog, mood: &str) -> Result<()> {
        let controls = catalog.require(mood)?.params().clamped();
        tracing::debug!("session mood {} -> {mood}", self.mood);
        self.mood = mood.to_string();
        self.controls = controls;
        Ok(())
    }

    /// Replace the control values. Values outside the control ranges are
    /// clamped, matching what a slider would allow.
    pub fn set_controls(&mut self, controls: MoodParams) {
        if let Err(e) = controls.check_ranges() {
            tracing::warn!("clamping control input: {e}");
        }
        self.controls = controls.clamped();
    }

    /// Edit the control values in place, then clamp them.
    pub fn update_controls(&mut self, edit: impl FnOnce(&mut MoodParams)) {
        let mut controls = self.controls;
        edit(&mut controls);
        self.set_controls(controls);
    }

    /// Ask for the next [`resolve`](Self::resolve) to return preset defaults.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    /// Effective parameters for the next filter run.
    ///
    /// With a reset pending, returns the preset's values (fallbacks applied),
    /// re-seeds the controls from them, and clears the flag. Otherwise
    /// returns the live controls.
    pub fn resolve(&mut self, catalog: &PresetCatalog) -> Result<MoodParams> {
        if !self.reset_requested {
            return Ok(self.controls);
        }

        let defaults = catalog.require(&self.mood)?.params();
        self.controls = defaults.clamped();
        self.reset_requested = false;
        tracing::info!("reset `{}` to preset defaults", self.mood);
        Ok(defaults)
    }

    /// Resolve parameters and run `pipeline` over `image`.
    pub fn render(
        &mut self,
        catalog: &PresetCatalog,
        pipeline: Pipeline,
        image: &MoodImage,
    ) -> Result<MoodImage> {
        let params = self.resolve(catalog)?;
        Ok(pipeline.run(image, &params))
    }
}
