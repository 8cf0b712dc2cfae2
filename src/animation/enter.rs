use serde::{Deserialize, Serialize};

use crate::animation::interp::{Lerp, interpolate_clamped};
use crate::animation::spring::{SpringConfig, damped_spring};
use crate::foundation::core::{Fps, Vec2};

/// Spring behind the plain fade/slide/zoom curves and the fallback curve.
pub const BASE_SPRING: SpringConfig = SpringConfig::new(12.0, 100.0);
/// Spring behind `bounce-in`.
pub const BOUNCE_SPRING: SpringConfig = SpringConfig::new(8.0, 200.0);
/// Spring behind `pop-in`.
pub const POP_SPRING: SpringConfig = SpringConfig::new(10.0, 300.0);
/// Length of the `count-up` ramp.
pub const COUNT_UP_SECS: f64 = 1.5;

/// Named entrance curve of a scene element.
///
/// Unknown names resolve to [`EnterAnimation::Default`] instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnterAnimation {
    /// Opacity follows the base spring.
    FadeIn,
    /// Fade while rising 50px into place.
    FadeInUp,
    /// Fade while sliding in from 200px left.
    SlideInLeft,
    /// Fade while sliding in from 200px right.
    SlideInRight,
    /// Fade while growing from half size.
    ZoomIn,
    /// Bouncy scale-in; opacity saturates at half progress.
    BounceIn,
    /// Snappy scale-in.
    PopIn,
    /// Numeric ticker from zero to the content's value.
    CountUp,
    /// Plain spring fade.
    #[default]
    Default,
}

impl EnterAnimation {
    /// Every curve, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::FadeIn,
        Self::FadeInUp,
        Self::SlideInLeft,
        Self::SlideInRight,
        Self::ZoomIn,
        Self::BounceIn,
        Self::PopIn,
        Self::CountUp,
        Self::Default,
    ];

    /// Resolve a curve name (case-insensitive, `_` accepted for `-`).
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "fade-in" => Self::FadeIn,
            "fade-in-up" => Self::FadeInUp,
            "slide-in-left" => Self::SlideInLeft,
            "slide-in-right" => Self::SlideInRight,
            "zoom-in" => Self::ZoomIn,
            "bounce-in" => Self::BounceIn,
            "pop-in" => Self::PopIn,
            "count-up" => Self::CountUp,
            _ => Self::Default,
        }
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::FadeInUp => "fade-in-up",
            Self::SlideInLeft => "slide-in-left",
            Self::SlideInRight => "slide-in-right",
            Self::ZoomIn => "zoom-in",
            Self::BounceIn => "bounce-in",
            Self::PopIn => "pop-in",
            Self::CountUp => "count-up",
            Self::Default => "default",
        }
    }

    /// Sample the curve `local_frames` after the element's delay elapsed.
    ///
    /// `local_frames <= 0` yields the curve's zero state. `count-up` does not animate
    /// opacity or geometry; its text is produced by [`count_up_text`].
    pub fn sample(self, local_frames: f64, fps: Fps) -> MotionState {
        let spring = |cfg| damped_spring(local_frames, fps, cfg);
        match self {
            Self::FadeIn | Self::Default => MotionState::faded(spring(BASE_SPRING)),
            Self::FadeInUp => {
                let p = spring(BASE_SPRING);
                MotionState {
                    translate: Vec2::new(0.0, f64::lerp(&50.0, &0.0, p)),
                    ..MotionState::faded(p)
                }
            }
            Self::SlideInLeft | Self::SlideInRight => {
                let p = spring(BASE_SPRING);
                let from = if self == Self::SlideInLeft {
                    -200.0
                } else {
                    200.0
                };
                MotionState {
                    translate: Vec2::new(f64::lerp(&from, &0.0, p), 0.0),
                    ..MotionState::faded(p)
                }
            }
            Self::ZoomIn => {
                let p = spring(BASE_SPRING);
                MotionState {
                    scale: f64::lerp(&0.5, &1.0, p),
                    ..MotionState::faded(p)
                }
            }
            Self::BounceIn => {
                let p = spring(BOUNCE_SPRING);
                MotionState {
                    opacity: (2.0 * p).clamp(0.0, 1.0),
                    scale: p,
                    ..MotionState::REST
                }
            }
            Self::PopIn => {
                let p = spring(POP_SPRING);
                MotionState {
                    scale: p,
                    ..MotionState::faded(p)
                }
            }
            Self::CountUp => MotionState::REST,
        }
    }
}

impl<'de> Deserialize<'de> for EnterAnimation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(v.as_ref()
            .and_then(serde_json::Value::as_str)
            .map(Self::from_name)
            .unwrap_or_default())
    }
}

/// Animated opacity/geometry of an element, relative to its resting layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Opacity in `[0,1]`.
    pub opacity: f64,
    /// Offset from the resting position in pixels.
    pub translate: Vec2,
    /// Uniform scale about the element's anchor; may overshoot.
    pub scale: f64,
}

impl MotionState {
    /// Fully visible, untransformed.
    pub const REST: Self = Self {
        opacity: 1.0,
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    fn faded(opacity: f64) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..Self::REST
        }
    }
}

/// Content split around its first numeric run, e.g. `"¥1,200円"` -> `("¥", 1200, "円")`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericContent<'a> {
    /// Text before the number, kept verbatim.
    pub prefix: &'a str,
    /// Parsed target value.
    pub value: f64,
    /// Text after the number, kept verbatim.
    pub suffix: &'a str,
}

impl<'a> NumericContent<'a> {
    /// Split `content`, or `None` when it holds no parseable number.
    pub fn parse(content: &'a str) -> Option<Self> {
        let start = content.find(|c: char| c.is_ascii_digit())?;
        let run_len = content[start..]
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .unwrap_or(content.len() - start);
        let end = start + run_len;
        let digits: String = content[start..end].chars().filter(|&c| c != ',').collect();
        let digits = digits.trim_end_matches('.');
        let value = digits.parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self {
            prefix: &content[..start],
            value,
            suffix: &content[end..],
        })
    }

    /// Display string for the ticker at `progress` in `[0,1]`.
    pub fn display(&self, progress: f64) -> String {
        let shown = (self.value * progress.clamp(0.0, 1.0)).floor();
        format!("{}{shown:.0}{}", self.prefix, self.suffix)
    }
}

/// Ticker text for a `count-up` element, `local_frames` after its delay.
///
/// Counts linearly from zero to the content's value over [`COUNT_UP_SECS`], floored to an
/// integer. `None` when the content has no number, in which case callers render it literally.
pub fn count_up_text(content: &str, local_frames: f64, fps: Fps) -> Option<String> {
    let numeric = NumericContent::parse(content)?;
    let window = fps.secs_to_frames(COUNT_UP_SECS);
    let mut progress = interpolate_clamped(local_frames, (0.0, window), (0.0, 1.0));
    // delay * fps carries float noise; the last frame of the ramp must show the full value
    if 1.0 - progress < 1e-9 {
        progress = 1.0;
    }
    Some(numeric.display(progress))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/enter.rs"]
mod tests;
