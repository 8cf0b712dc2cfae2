use serde::Serialize;

use crate::animation::camera::{CameraMotion, segment_progress};
use crate::assets::color::ColorDef;
use crate::config::RenderConfig;
use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, Transform2D, Vec2};
use crate::scene::model::{BackgroundDef, SceneData};

/// Resting gradient angle in degrees.
pub const GRADIENT_BASE_DEG: f64 = 135.0;
/// Swing of the gradient angle either side of the base.
pub const GRADIENT_SWING_DEG: f64 = 10.0;
/// Angular frequency of the swing, radians per second.
pub const GRADIENT_RATE: f64 = 0.5;

/// Background state at one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedBackground {
    /// Linear gradient over the full canvas.
    Gradient {
        /// Stops in order, evenly spaced.
        colors: Vec<ColorDef>,
        /// CSS `linear-gradient` angle in degrees.
        angle_deg: f64,
    },
    /// Flat fill.
    Solid {
        /// Fill color.
        color: ColorDef,
    },
    /// Image under Ken-Burns camera motion.
    Image {
        /// Handle passed through from the scene.
        image_path: String,
        /// Pattern picked from the scene number.
        camera: CameraMotion,
        /// Position along the full camera curve.
        progress: f64,
        /// Uniform image scale.
        scale: f64,
        /// Pan in canvas pixels.
        translate: Vec2,
        /// Scale about the canvas center, then pan.
        transform: Affine,
    },
}

/// Gradient angle `t` seconds into a scene. Always within `135 ± 10` degrees.
pub fn gradient_angle_deg(t_secs: f64) -> f64 {
    GRADIENT_BASE_DEG + GRADIENT_SWING_DEG * (GRADIENT_RATE * t_secs).sin()
}

/// Resolve the background of `scene` at scene-local `frame`.
pub fn resolve_background(
    scene: &SceneData,
    frame: FrameIndex,
    fps: Fps,
    canvas: Canvas,
    config: &RenderConfig,
) -> ResolvedBackground {
    match &scene.background {
        BackgroundDef::Gradient { colors } => {
            let mut stops: Vec<ColorDef> = colors
                .iter()
                .filter_map(|c| ColorDef::parse(c).ok())
                .collect();
            if stops.is_empty() {
                tracing::debug!(
                    scene = scene.scene_number,
                    given = colors.len(),
                    "no usable gradient colors, using fallback"
                );
                stops = config.fallback_colors();
            }
            ResolvedBackground::Gradient {
                colors: stops,
                angle_deg: gradient_angle_deg(fps.frames_to_secs(frame.0 as f64)),
            }
        }
        BackgroundDef::Solid { color } => {
            let fallback = config.fallback_colors()[0];
            ResolvedBackground::Solid {
                color: ColorDef::parse_or(Some(color), fallback),
            }
        }
        BackgroundDef::Image { image_path } => {
            let camera = scene.camera_motion();
            let progress = segment_progress(
                frame.0,
                scene.total_frames(fps),
                scene.animation_start,
                scene.animation_end,
            );
            let (scale, translate) = config.camera.get(camera).sample(progress);
            let transform =
                Transform2D::uniform(scale, translate, canvas.center().to_vec2()).to_affine();
            ResolvedBackground::Image {
                image_path: image_path.clone(),
                camera,
                progress,
                scale,
                translate,
                transform,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/background.rs"]
mod tests;
