use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::animation::camera::CameraPresets;
use crate::assets::color::ColorDef;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};

/// Timeline-wide render settings: frame rate, canvas, camera presets and overlay theme.
///
/// Every field has a default, so `{}` is a valid config file. The defaults describe the 30fps
/// 1080x1920 vertical format of short-form news clips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output frame rate; `30` and `{"num": 30000, "den": 1001}` are both accepted.
    #[serde(deserialize_with = "fps_repr")]
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Ken-Burns bounds per camera pattern.
    pub camera: CameraPresets,
    /// Broadcast overlay and caption styling.
    pub theme: OverlayTheme,
    /// Gradient stops used when a scene's gradient has no usable colors.
    pub fallback_gradient: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1080,
                height: 1920,
            },
            camera: CameraPresets::default(),
            theme: OverlayTheme::default(),
            fallback_gradient: vec!["#667eea".to_owned(), "#764ba2".to_owned()],
        }
    }
}

fn fps_repr<'de, D>(deserializer: D) -> Result<Fps, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(u32),
        Rational { num: u32, den: u32 },
    }

    let (num, den) = match Repr::deserialize(deserializer)? {
        Repr::Int(n) => (n, 1),
        Repr::Rational { num, den } => (num, den),
    };
    Fps::new(num, den).map_err(serde::de::Error::custom)
}

impl RenderConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ReelError::serde(format!("parse render config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ReelError::serde(format!("parse render config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings no frame could be rendered with.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if !self
            .fallback_gradient
            .iter()
            .any(|c| ColorDef::parse(c).is_ok())
        {
            return Err(ReelError::validation(
                "fallback_gradient needs at least one valid color",
            ));
        }
        self.theme.layout.validate()
    }

    /// Fallback gradient stops, parsed. Never empty for a validated config.
    pub fn fallback_colors(&self) -> Vec<ColorDef> {
        let colors: Vec<ColorDef> = self
            .fallback_gradient
            .iter()
            .filter_map(|c| ColorDef::parse(c).ok())
            .collect();
        if colors.is_empty() {
            vec![ColorDef::rgba8(0x66, 0x7e, 0xea, 255)]
        } else {
            colors
        }
    }
}

/// Colors and labels of the broadcast overlay and the element-mode caption box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayTheme {
    /// Badge text when a scene does not name its channel.
    pub channel_name: String,
    /// Text of the breaking label.
    pub breaking_label: String,
    /// Channel badge background.
    pub badge_fill: ColorDef,
    /// Channel badge text.
    pub badge_text: ColorDef,
    /// Breaking label background.
    pub breaking_fill: ColorDef,
    /// Breaking label text.
    pub breaking_text: ColorDef,
    /// Headline bar frame.
    pub headline_frame: ColorDef,
    /// Headline bar inner fill.
    pub headline_fill: ColorDef,
    /// Headline text.
    pub headline_text: ColorDef,
    /// Sub-headline bar background.
    pub sub_headline_fill: ColorDef,
    /// Sub-headline text.
    pub sub_headline_text: ColorDef,
    /// Subtitle band and caption box background.
    pub subtitle_fill: ColorDef,
    /// Subtitle and caption text.
    pub subtitle_text: ColorDef,
    /// Geometry.
    pub layout: OverlayLayout,
}

impl Default for OverlayTheme {
    fn default() -> Self {
        let red = |a| ColorDef::rgba8(200, 30, 30, a);
        Self {
            channel_name: "FJ News 24".to_owned(),
            breaking_label: "BREAKING NEWS".to_owned(),
            badge_fill: red(200),
            badge_text: ColorDef::WHITE,
            breaking_fill: red(250),
            breaking_text: ColorDef::WHITE,
            headline_frame: red(255),
            headline_fill: ColorDef::rgba8(255, 255, 255, 250),
            headline_text: ColorDef::rgba8(0, 0, 0, 255),
            sub_headline_fill: ColorDef::rgba8(30, 30, 35, 230),
            sub_headline_text: ColorDef::rgba8(230, 230, 230, 255),
            subtitle_fill: ColorDef::rgba8(0, 0, 0, 166),
            subtitle_text: ColorDef::WHITE,
            layout: OverlayLayout::default(),
        }
    }
}

/// Overlay geometry as fractions of the canvas.
///
/// `*_x`, `*_w` and `headline_border` are fractions of the canvas width; `*_y`, `*_h` and
/// `caption_bottom` of the canvas height. `*_font` values are fractions of the height of the
/// bar the text sits in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayLayout {
    /// Channel badge left edge.
    pub badge_x: f64,
    /// Channel badge top edge.
    pub badge_y: f64,
    /// Channel badge width.
    pub badge_w: f64,
    /// Channel badge height.
    pub badge_h: f64,
    /// Channel name left edge.
    pub badge_text_x: f64,
    /// Channel name size.
    pub badge_font: f64,
    /// Breaking label width.
    pub breaking_w: f64,
    /// Breaking label height.
    pub breaking_h: f64,
    /// Breaking text left edge.
    pub breaking_text_x: f64,
    /// Breaking text size.
    pub breaking_font: f64,
    /// Headline bar height.
    pub headline_h: f64,
    /// Headline frame thickness.
    pub headline_border: f64,
    /// Headline and sub-headline text left edge.
    pub headline_text_x: f64,
    /// Headline text size.
    pub headline_font: f64,
    /// Sub-headline bar height.
    pub sub_headline_h: f64,
    /// Sub-headline text size.
    pub sub_headline_font: f64,
    /// Overlay subtitle band top edge.
    pub subtitle_y: f64,
    /// Overlay subtitle band width, centered.
    pub subtitle_w: f64,
    /// Overlay subtitle band height.
    pub subtitle_h: f64,
    /// Subtitle and caption text size.
    pub subtitle_font: f64,
    /// Caption box width, centered.
    pub caption_w: f64,
    /// Caption box height.
    pub caption_h: f64,
    /// Gap between the caption box and the bottom edge.
    pub caption_bottom: f64,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            badge_x: 0.03,
            badge_y: 0.02,
            badge_w: 0.35,
            badge_h: 0.04,
            badge_text_x: 0.05,
            badge_font: 0.6,
            breaking_w: 0.45,
            breaking_h: 0.035,
            breaking_text_x: 0.014,
            breaking_font: 0.65,
            headline_h: 0.12,
            headline_border: 0.0056,
            headline_text_x: 0.05,
            headline_font: 0.45,
            sub_headline_h: 0.05,
            sub_headline_font: 0.5,
            subtitle_y: 0.62,
            subtitle_w: 0.9,
            subtitle_h: 0.07,
            subtitle_font: 0.4,
            caption_w: 0.9,
            caption_h: 0.07,
            caption_bottom: 0.08,
        }
    }
}

impl OverlayLayout {
    /// Every ratio must be finite and within `[0, 1]`.
    pub fn validate(&self) -> ReelResult<()> {
        let fields = [
            ("badge_x", self.badge_x),
            ("badge_y", self.badge_y),
            ("badge_w", self.badge_w),
            ("badge_h", self.badge_h),
            ("badge_text_x", self.badge_text_x),
            ("badge_font", self.badge_font),
            ("breaking_w", self.breaking_w),
            ("breaking_h", self.breaking_h),
            ("breaking_text_x", self.breaking_text_x),
            ("breaking_font", self.breaking_font),
            ("headline_h", self.headline_h),
            ("headline_border", self.headline_border),
            ("headline_text_x", self.headline_text_x),
            ("headline_font", self.headline_font),
            ("sub_headline_h", self.sub_headline_h),
            ("sub_headline_font", self.sub_headline_font),
            ("subtitle_y", self.subtitle_y),
            ("subtitle_w", self.subtitle_w),
            ("subtitle_h", self.subtitle_h),
            ("subtitle_font", self.subtitle_font),
            ("caption_w", self.caption_w),
            ("caption_h", self.caption_h),
            ("caption_bottom", self.caption_bottom),
        ];
        for (name, v) in fields {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(ReelError::validation(format!(
                    "overlay layout '{name}' must be a ratio in [0,1], got {v}"
                )));
            }
        }
        if self.breaking_h + self.headline_h + self.sub_headline_h > 1.0 {
            return Err(ReelError::validation(
                "overlay banner stack is taller than the canvas",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
