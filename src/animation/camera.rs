//! Ken-Burns camera motion over a still background image.
//!
//! A scene picks one of eight patterns purely from its ordinal, so consecutive scenes vary
//! without any randomness. Each pattern is a [`MotionPreset`]: scale and pan spans that are
//! linearly interpolated by the scene's motion progress.

use serde::{Deserialize, Serialize};

use crate::animation::interp::Lerp;
use crate::foundation::core::Vec2;

/// Named camera-motion pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraMotion {
    /// Slow push in.
    ZoomIn,
    /// Pan toward the left edge.
    PanLeft,
    /// Slow pull out.
    ZoomOut,
    /// Pan toward the right edge.
    PanRight,
    /// Push in while panning left.
    ZoomPanLeft,
    /// Pan upward.
    PanUp,
    /// Push in while panning right.
    ZoomPanRight,
    /// Pan downward.
    PanDown,
}

impl CameraMotion {
    /// Patterns in scene-assignment order.
    pub const ALL: [Self; 8] = [
        Self::ZoomIn,
        Self::PanLeft,
        Self::ZoomOut,
        Self::PanRight,
        Self::ZoomPanLeft,
        Self::PanUp,
        Self::ZoomPanRight,
        Self::PanDown,
    ];

    /// Index into [`CameraMotion::ALL`] for a 1-based scene number: `(n - 1) mod 8`.
    ///
    /// Scene number `0` is treated as `1`.
    pub fn pattern_index(scene_number: u32) -> usize {
        (scene_number.saturating_sub(1) as usize) % Self::ALL.len()
    }

    /// Pattern for a 1-based scene number.
    pub fn for_scene(scene_number: u32) -> Self {
        Self::ALL[Self::pattern_index(scene_number)]
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom-in",
            Self::PanLeft => "pan-left",
            Self::ZoomOut => "zoom-out",
            Self::PanRight => "pan-right",
            Self::ZoomPanLeft => "zoom-pan-left",
            Self::PanUp => "pan-up",
            Self::ZoomPanRight => "zoom-pan-right",
            Self::PanDown => "pan-down",
        }
    }
}

/// `from -> to` bounds of one animated quantity. A bare number in JSON is a constant span.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Span {
    /// Value at progress 0.
    pub from: f64,
    /// Value at progress 1.
    pub to: f64,
}

impl Span {
    /// Span moving from `from` to `to`.
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Span holding `v` throughout.
    pub const fn constant(v: f64) -> Self {
        Self { from: v, to: v }
    }

    /// Linear sample; progress outside `[0,1]` extrapolates.
    pub fn sample(self, progress: f64) -> f64 {
        f64::lerp(&self.from, &self.to, progress)
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Constant(f64),
            Arr([f64; 2]),
            Obj { from: f64, to: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Constant(v) => Ok(Self::constant(v)),
            Repr::Arr([from, to]) => Ok(Self::new(from, to)),
            Repr::Obj { from, to } => Ok(Self::new(from, to)),
        }
    }
}

/// Scale and pan bounds of one camera pattern. Pan values are canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionPreset {
    /// Uniform image scale.
    pub scale: Span,
    /// Horizontal pan.
    #[serde(default = "zero_span")]
    pub translate_x: Span,
    /// Vertical pan.
    #[serde(default = "zero_span")]
    pub translate_y: Span,
}

fn zero_span() -> Span {
    Span::constant(0.0)
}

impl MotionPreset {
    const fn zoom(scale: Span) -> Self {
        Self {
            scale,
            translate_x: Span::constant(0.0),
            translate_y: Span::constant(0.0),
        }
    }

    /// `(scale, translate)` at `progress`.
    pub fn sample(&self, progress: f64) -> (f64, Vec2) {
        (
            self.scale.sample(progress),
            Vec2::new(
                self.translate_x.sample(progress),
                self.translate_y.sample(progress),
            ),
        )
    }
}

/// Preset table for all eight patterns; any subset can be overridden from config JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CameraPresets {
    /// `zoom-in` bounds.
    pub zoom_in: MotionPreset,
    /// `pan-left` bounds.
    pub pan_left: MotionPreset,
    /// `zoom-out` bounds.
    pub zoom_out: MotionPreset,
    /// `pan-right` bounds.
    pub pan_right: MotionPreset,
    /// `zoom-pan-left` bounds.
    pub zoom_pan_left: MotionPreset,
    /// `pan-up` bounds.
    pub pan_up: MotionPreset,
    /// `zoom-pan-right` bounds.
    pub zoom_pan_right: MotionPreset,
    /// `pan-down` bounds.
    pub pan_down: MotionPreset,
}

impl Default for CameraPresets {
    fn default() -> Self {
        const PAN_SCALE: Span = Span::constant(1.15);
        const PUSH: Span = Span::new(1.0, 1.2);
        Self {
            zoom_in: MotionPreset::zoom(PUSH),
            pan_left: MotionPreset {
                translate_x: Span::new(30.0, -30.0),
                ..MotionPreset::zoom(PAN_SCALE)
            },
            zoom_out: MotionPreset::zoom(Span::new(1.2, 1.0)),
            pan_right: MotionPreset {
                translate_x: Span::new(-30.0, 30.0),
                ..MotionPreset::zoom(PAN_SCALE)
            },
            zoom_pan_left: MotionPreset {
                translate_x: Span::new(20.0, -20.0),
                ..MotionPreset::zoom(PUSH)
            },
            pan_up: MotionPreset {
                translate_y: Span::new(30.0, -30.0),
                ..MotionPreset::zoom(PAN_SCALE)
            },
            zoom_pan_right: MotionPreset {
                translate_x: Span::new(-20.0, 20.0),
                ..MotionPreset::zoom(PUSH)
            },
            pan_down: MotionPreset {
                translate_y: Span::new(-30.0, 30.0),
                ..MotionPreset::zoom(PAN_SCALE)
            },
        }
    }
}

impl CameraPresets {
    /// Bounds for `motion`.
    pub fn get(&self, motion: CameraMotion) -> &MotionPreset {
        match motion {
            CameraMotion::ZoomIn => &self.zoom_in,
            CameraMotion::PanLeft => &self.pan_left,
            CameraMotion::ZoomOut => &self.zoom_out,
            CameraMotion::PanRight => &self.pan_right,
            CameraMotion::ZoomPanLeft => &self.zoom_pan_left,
            CameraMotion::PanUp => &self.pan_up,
            CameraMotion::ZoomPanRight => &self.zoom_pan_right,
            CameraMotion::PanDown => &self.pan_down,
        }
    }
}

/// Progress along a scene's slice `[start, end]` of the full camera curve.
///
/// `total_frames == 0` samples the slice start.
pub fn segment_progress(frame: u64, total_frames: u64, start: f64, end: f64) -> f64 {
    if total_frames == 0 {
        return start;
    }
    let local = frame as f64 / total_frames as f64;
    start + local * (end - start)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/camera.rs"]
mod tests;
