//! Self-contained HTML page showing the before/after pair and the download
//! link. Everything is inlined as `data:` URIs.

use colormood_core::compare::side_by_side;
use colormood_core::export::escape_html;
use colormood_core::{DownloadLink, MoodImage, MoodParams, Pipeline, Result};

/// Divider between the halves of the comparison strip.
const DIVIDER_WIDTH: u32 = 4;

/// Inputs for one comparison page.
pub struct Report<'a> {
    pub mood: &'a str,
    pub pipeline: Pipeline,
    pub params: &'a MoodParams,
    pub before: &'a MoodImage,
    pub after: &'a MoodImage,
    pub download: &'a DownloadLink,
}

impl Report<'_> {
    pub fn to_html(&self) -> Result<String> {
        let strip = side_by_side(self.before, self.after, DIVIDER_WIDTH)?;
        let strip_link = DownloadLink::with_filename(&strip, "comparison.png")?;

        let settings = match self.pipeline {
            Pipeline::HsvTemperature => {
                let p = &self.params.hsv;
                format!(
                    "hue {} · saturation {:.1} · brightness {:.1} · contrast {:.1} · warm {}",
                    p.hue_shift,
                    p.saturation_scale,
                    p.brightness_scale,
                    p.contrast_scale,
                    p.warm_shift
                )
            }
            Pipeline::LabShift => {
                let p = &self.params.lab;
                format!("L {} · a {} · b {}", p.l_shift, p.a_shift, p.b_shift)
            }
        };

        Ok(format!(
            "<!DOCTYPE html>\n<html>\n\
             <head><meta charset=\"utf-8\"><title>ColorMood</title></head>\n<body>\n\
             <h1>ColorMood: {mood}</h1>\n<p>{pipeline} ({settings})</p>\n\
             <p>Before | After</p>\n<img src=\"{strip}\" style=\"max-width:100%\">\n\
             <hr>\n<p>{anchor}</p>\n</body>\n</html>\n",
            mood = escape_html(self.mood),
            pipeline = escape_html(self.pipeline.label()),
            settings = escape_html(&settings),
            strip = strip_link.data_uri(),
            anchor = self.download.to_html_anchor("Download filtered image"),
        ))
    }
}
