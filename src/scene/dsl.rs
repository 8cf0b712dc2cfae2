use serde::{Deserialize, Serialize};

use crate::animation::enter::EnterAnimation;
use crate::foundation::error::ReelResult;
use crate::scene::model::{
    BackgroundDef, ElementDef, ElementKind, HAnchor, NarrationDef, NewsOverlayDef, SceneData,
    SizeName, VAnchor, WeightName,
};

/// Caption length kept for the headline text element of a motion-graphics scene.
pub const CAPTION_CHARS: usize = 30;
/// Subtitle length kept for a motion-graphics scene.
pub const SUBTITLE_CHARS: usize = 50;

/// Emotional tone of a story, mapped to a two-stop gradient palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Warm reds.
    #[default]
    Exciting,
    /// Soft greens.
    Heartwarming,
    /// Yellows.
    Funny,
    /// Crimson into navy.
    Shocking,
    /// Teals.
    Informative,
}

impl Mood {
    /// Resolve a mood name; unknown names read as [`Mood::Exciting`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "heartwarming" => Self::Heartwarming,
            "funny" => Self::Funny,
            "shocking" => Self::Shocking,
            "informative" => Self::Informative,
            _ => Self::Exciting,
        }
    }

    /// Gradient stops for this mood.
    pub fn palette(self) -> [&'static str; 2] {
        match self {
            Self::Exciting => ["#FF6B6B", "#FF8E53"],
            Self::Heartwarming => ["#A8E6CF", "#DCEDC1"],
            Self::Funny => ["#FFE66D", "#FFB347"],
            Self::Shocking => ["#E94560", "#1A1A2E"],
            Self::Informative => ["#4ECDC4", "#44A08D"],
        }
    }
}

const EMOJI_KEYWORDS: &[(&str, &str)] = &[
    ("猫", "🐱"),
    ("犬", "🐶"),
    ("家", "🏠"),
    ("車", "🚗"),
    ("飛行機", "✈️"),
    ("海", "🌊"),
    ("山", "⛰️"),
    ("火", "🔥"),
    ("愛", "❤️"),
    ("驚", "😱"),
    ("笑", "😂"),
    ("泣", "😭"),
    ("旅", "🧳"),
    ("走", "🏃"),
    ("歩", "🚶"),
];

/// Pick an emoji for a visual description by keyword; the first table hit wins.
pub fn emoji_for_description(description: &str) -> &'static str {
    EMOJI_KEYWORDS
        .iter()
        .find(|(keyword, _)| description.contains(keyword))
        .map(|(_, emoji)| *emoji)
        .unwrap_or("📰")
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Builder for [`SceneData`].
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    scene: SceneData,
}

impl SceneBuilder {
    /// Start a scene with the given ordinal and duration.
    pub fn new(scene_number: u32, duration: f64) -> Self {
        Self {
            scene: SceneData {
                scene_number,
                duration,
                ..SceneData::default()
            },
        }
    }

    /// Emoji-plus-caption scene over a mood gradient.
    ///
    /// The emoji bounces in above center; the caption (narration cut to
    /// [`CAPTION_CHARS`] characters) rises in below it half a second later.
    pub fn motion_graphics(
        scene_number: u32,
        duration: f64,
        visual_description: &str,
        narration: &str,
        mood: Mood,
    ) -> Self {
        let caption = if narration.chars().count() > CAPTION_CHARS {
            format!("{}...", truncate_chars(narration, CAPTION_CHARS))
        } else {
            narration.to_owned()
        };
        Self::new(scene_number, duration)
            .gradient(mood.palette())
            .element(
                ElementBuilder::emoji(emoji_for_description(visual_description))
                    .size(SizeName::Xxl)
                    .offset(0.0, -100.0)
                    .enter(EnterAnimation::BounceIn)
                    .build(),
            )
            .element(
                ElementBuilder::text(caption)
                    .size(SizeName::Lg)
                    .weight(WeightName::Bold)
                    .color("#FFFFFF")
                    .offset(0.0, 100.0)
                    .enter(EnterAnimation::FadeInUp)
                    .delay(0.5)
                    .build(),
            )
            .subtitle(truncate_chars(narration, SUBTITLE_CHARS))
    }

    /// Image-backed scene with the broadcast overlay.
    pub fn news(
        scene_number: u32,
        duration: f64,
        image_path: impl Into<String>,
        overlay: NewsOverlayDef,
    ) -> Self {
        Self::new(scene_number, duration)
            .image(image_path)
            .news_overlay(overlay)
    }

    /// Gradient background.
    pub fn gradient<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scene.background = BackgroundDef::Gradient {
            colors: colors.into_iter().map(Into::into).collect(),
        };
        self
    }

    /// Flat background.
    pub fn solid(mut self, color: impl Into<String>) -> Self {
        self.scene.background = BackgroundDef::Solid {
            color: color.into(),
        };
        self
    }

    /// Image background.
    pub fn image(mut self, image_path: impl Into<String>) -> Self {
        self.scene.background = BackgroundDef::Image {
            image_path: image_path.into(),
        };
        self
    }

    /// Slice of the camera curve this scene plays.
    pub fn animation_range(mut self, start: f64, end: f64) -> Self {
        self.scene.animation_start = start;
        self.scene.animation_end = end;
        self
    }

    /// Append an element on top of the existing ones.
    pub fn element(mut self, element: impl Into<ElementDef>) -> Self {
        self.scene.elements.push(element.into());
        self
    }

    /// Switch the scene into overlay mode.
    pub fn news_overlay(mut self, overlay: NewsOverlayDef) -> Self {
        self.scene.news_overlay = Some(overlay);
        self
    }

    /// Narration subtitle.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.scene.narration = NarrationDef {
            subtitle: Some(subtitle.into()),
        };
        self
    }

    /// Pre-rendered overlay passthrough.
    pub fn overlay_path(mut self, path: impl Into<String>) -> Self {
        self.scene.overlay_path = Some(path.into());
        self
    }

    /// Build and validate the scene.
    pub fn build(self) -> ReelResult<SceneData> {
        self.scene.validate()?;
        Ok(self.scene)
    }

    /// Return the scene without validation.
    pub fn build_unchecked(self) -> SceneData {
        self.scene
    }
}

/// Builder for [`ElementDef`] values. Anchors default to the canvas center.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: ElementDef,
}

impl ElementBuilder {
    fn with_kind(kind: ElementKind, content: impl Into<String>) -> Self {
        Self {
            element: ElementDef {
                kind,
                content: content.into(),
                ..ElementDef::default()
            },
        }
    }

    /// Text element.
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Text, content)
    }

    /// Emoji element.
    pub fn emoji(content: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Emoji, content)
    }

    /// Number element, ticking up from zero.
    pub fn number(content: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Number, content).enter(EnterAnimation::CountUp)
    }

    /// Named size.
    pub fn size(mut self, size: SizeName) -> Self {
        self.element.style.size = size;
        self
    }

    /// Named weight.
    pub fn weight(mut self, weight: WeightName) -> Self {
        self.element.style.weight = weight;
        self
    }

    /// CSS color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.element.style.color = Some(color.into());
        self
    }

    /// Anchors.
    pub fn at(mut self, x: HAnchor, y: VAnchor) -> Self {
        self.element.position.x = x;
        self.element.position.y = y;
        self
    }

    /// Pixel offsets from the anchor.
    pub fn offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.element.position.offset_x = offset_x;
        self.element.position.offset_y = offset_y;
        self
    }

    /// Entrance curve.
    pub fn enter(mut self, enter: EnterAnimation) -> Self {
        self.element.animation.enter = enter;
        self
    }

    /// Seconds before the entrance starts.
    pub fn delay(mut self, delay: f64) -> Self {
        self.element.animation.delay = delay;
        self
    }

    /// Finish the element.
    pub fn build(self) -> ElementDef {
        self.element
    }
}

impl From<ElementBuilder> for ElementDef {
    fn from(b: ElementBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
