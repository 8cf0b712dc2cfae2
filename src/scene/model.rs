use serde::{Deserialize, Deserializer, Serialize};

use crate::animation::camera::CameraMotion;
use crate::animation::enter::EnterAnimation;
use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// One timed scene as produced by the upstream planning stage.
///
/// JSON keys are camelCase. Every field is optional on input and takes the documented default;
/// nothing in the render path mutates a `SceneData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneData {
    /// 1-based ordinal; selects the camera pattern.
    #[serde(default = "default_scene_number")]
    pub scene_number: u32,
    /// Length in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Start of this scene's slice of the camera curve.
    #[serde(default)]
    pub animation_start: f64,
    /// End of this scene's slice of the camera curve.
    #[serde(default = "default_animation_end")]
    pub animation_end: f64,
    /// Background layer.
    #[serde(default)]
    pub background: BackgroundDef,
    /// Free elements, back to front. Ignored in overlay mode.
    #[serde(default, deserialize_with = "lenient_elements")]
    pub elements: Vec<ElementDef>,
    /// Broadcast overlay; presence switches the scene into overlay mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_overlay: Option<NewsOverlayDef>,
    /// Narration attached to the scene.
    #[serde(default, deserialize_with = "null_as_default")]
    pub narration: NarrationDef,
    /// Pre-rendered overlay image produced upstream; carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_path: Option<String>,
}

fn default_scene_number() -> u32 {
    1
}

fn default_duration() -> f64 {
    5.0
}

fn default_animation_end() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a record from whatever JSON is present; anything that does not fit becomes the default.
fn lenient_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(v.and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

/// Elements parse one by one so a malformed entry renders with defaults instead of sinking the
/// scene.
fn lenient_elements<'de, D>(deserializer: D) -> Result<Vec<ElementDef>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(items)) = v else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                tracing::debug!(element = i, error = %e, "malformed element, using defaults");
                ElementDef::default()
            })
        })
        .collect())
}

/// Strings stay strings; numbers and booleans are printed; anything else is empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Numbers, or numeric strings such as `"0.5"`; zero otherwise.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.trim().is_empty())
}

impl Default for SceneData {
    fn default() -> Self {
        Self {
            scene_number: default_scene_number(),
            duration: default_duration(),
            animation_start: 0.0,
            animation_end: default_animation_end(),
            background: BackgroundDef::default(),
            elements: Vec::new(),
            news_overlay: None,
            narration: NarrationDef::default(),
            overlay_path: None,
        }
    }
}

impl SceneData {
    /// Parse a bare scene record from JSON.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// `true` when the broadcast overlay replaces the element set.
    pub fn is_overlay_mode(&self) -> bool {
        self.news_overlay.is_some()
    }

    /// Narration subtitle; an empty string counts as absent.
    pub fn subtitle(&self) -> Option<&str> {
        non_blank(&self.narration.subtitle)
    }

    /// Output frame count, `ceil(duration * fps)`.
    pub fn total_frames(&self, fps: Fps) -> u64 {
        fps.secs_to_frames_ceil(self.duration)
    }

    /// Camera pattern assigned to this scene's ordinal.
    pub fn camera_motion(&self) -> CameraMotion {
        CameraMotion::for_scene(self.scene_number)
    }

    /// Strict input check for callers that want malformed scenes rejected up front.
    ///
    /// Rendering never requires this: the resolvers degrade every field listed here to a
    /// default on their own.
    pub fn validate(&self) -> ReelResult<()> {
        if self.scene_number == 0 {
            return Err(ReelError::validation("sceneNumber must be >= 1"));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ReelError::validation(format!(
                "scene {}: duration must be finite and > 0, got {}",
                self.scene_number, self.duration
            )));
        }
        for (name, v) in [
            ("animationStart", self.animation_start),
            ("animationEnd", self.animation_end),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ReelError::validation(format!(
                    "scene {}: {name} must be within [0,1], got {v}",
                    self.scene_number
                )));
            }
        }
        if let BackgroundDef::Image { image_path } = &self.background
            && image_path.trim().is_empty()
        {
            return Err(ReelError::validation(format!(
                "scene {}: image background needs an imagePath",
                self.scene_number
            )));
        }
        for (i, el) in self.elements.iter().enumerate() {
            let delay = el.animation.delay;
            if !delay.is_finite() || delay < 0.0 {
                return Err(ReelError::validation(format!(
                    "scene {}: elements[{i}] delay must be finite and >= 0, got {delay}",
                    self.scene_number
                )));
            }
            if !el.position.offset_x.is_finite() || !el.position.offset_y.is_finite() {
                return Err(ReelError::validation(format!(
                    "scene {}: elements[{i}] offsets must be finite",
                    self.scene_number
                )));
            }
        }
        if self.is_overlay_mode() && !self.elements.is_empty() {
            return Err(ReelError::validation(format!(
                "scene {}: newsOverlay and elements are mutually exclusive ({} elements would be dropped)",
                self.scene_number,
                self.elements.len()
            )));
        }
        Ok(())
    }
}

/// Scene background, tagged by `type` in JSON.
///
/// Unknown types and image backgrounds without a path read as a gradient, so a bad background
/// never rejects the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackgroundDef {
    /// Linear gradient; an empty list uses the configured fallback colors.
    Gradient {
        /// CSS color strings in stop order.
        colors: Vec<String>,
    },
    /// Flat fill.
    Solid {
        /// CSS color string.
        color: String,
    },
    /// Still image with Ken-Burns camera motion.
    Image {
        /// Opaque handle resolved by the external asset layer.
        #[serde(rename = "imagePath")]
        image_path: String,
    },
}

impl Default for BackgroundDef {
    fn default() -> Self {
        Self::Gradient { colors: Vec::new() }
    }
}

impl<'de> Deserialize<'de> for BackgroundDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr {
            #[serde(rename = "type", default)]
            kind: Option<String>,
            #[serde(default)]
            colors: Option<Vec<String>>,
            #[serde(default)]
            color: Option<String>,
            #[serde(default)]
            image_path: Option<String>,
        }

        let Some(r) = Option::<Repr>::deserialize(deserializer)? else {
            return Ok(Self::default());
        };
        let colors = r.colors.unwrap_or_default();
        let kind = r.kind.as_deref().map(str::trim).unwrap_or("gradient");
        Ok(match kind.to_ascii_lowercase().as_str() {
            "image" => match r.image_path.filter(|p| !p.trim().is_empty()) {
                Some(image_path) => Self::Image { image_path },
                None => Self::Gradient { colors },
            },
            "solid" => Self::Solid {
                color: r
                    .color
                    .or_else(|| colors.into_iter().next())
                    .unwrap_or_default(),
            },
            _ => Self::Gradient { colors },
        })
    }
}

/// Semantic kind of an element's content. Rendering treats all kinds alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Plain text.
    #[default]
    Text,
    /// Emoji glyphs.
    Emoji,
    /// Number, usually paired with `count-up`.
    Number,
}

/// Named font size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeName {
    /// 32px.
    Sm,
    /// 48px.
    #[default]
    Md,
    /// 72px.
    Lg,
    /// 96px.
    Xl,
    /// 128px.
    Xxl,
}

impl SizeName {
    /// Font size in pixels.
    pub fn px(self) -> f64 {
        match self {
            Self::Sm => 32.0,
            Self::Md => 48.0,
            Self::Lg => 72.0,
            Self::Xl => 96.0,
            Self::Xxl => 128.0,
        }
    }
}

/// Named font weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightName {
    /// 400.
    #[default]
    Normal,
    /// 700.
    Bold,
    /// 900.
    Black,
}

impl WeightName {
    /// Numeric CSS font weight.
    pub fn value(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Bold => 700,
            Self::Black => 900,
        }
    }
}

/// Horizontal anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAnchor {
    /// 50px from the left edge.
    Left,
    /// Canvas center.
    #[default]
    Center,
    /// 50px from the right edge.
    Right,
}

/// Vertical anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAnchor {
    /// 100px from the top edge.
    Top,
    /// Canvas center.
    #[default]
    Center,
    /// 100px from the bottom edge.
    Bottom,
}

/// Names that resolve to a variant or fall back to the default.
trait Lenient: Default {
    fn from_name(name: &str) -> Option<Self>;
}

impl Lenient for ElementKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "emoji" => Some(Self::Emoji),
            "number" => Some(Self::Number),
            _ => None,
        }
    }
}

impl Lenient for SizeName {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "xxl" => Some(Self::Xxl),
            _ => None,
        }
    }
}

impl Lenient for WeightName {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::Normal),
            "bold" => Some(Self::Bold),
            "black" => Some(Self::Black),
            _ => None,
        }
    }
}

impl Lenient for HAnchor {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl Lenient for VAnchor {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

macro_rules! lenient_deserialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
                    Ok(v.as_ref()
                        .and_then(serde_json::Value::as_str)
                        .and_then(|s| <$ty as Lenient>::from_name(&s.trim().to_ascii_lowercase()))
                        .unwrap_or_default())
                }
            }
        )*
    };
}

lenient_deserialize!(ElementKind, SizeName, WeightName, HAnchor, VAnchor);

/// One free element of an element-mode scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementDef {
    /// Content kind.
    #[serde(rename = "type", default)]
    pub kind: ElementKind,
    /// Literal content; `count-up` reads a number out of it. Numbers are printed.
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
    /// Typography.
    #[serde(default, deserialize_with = "lenient_record")]
    pub style: StyleDef,
    /// Anchor and offsets.
    #[serde(default, deserialize_with = "lenient_record")]
    pub position: PositionDef,
    /// Entrance curve and delay.
    #[serde(default, deserialize_with = "lenient_record")]
    pub animation: AnimationDef,
}

/// Element typography.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDef {
    /// Named size, `md` when absent or unknown.
    #[serde(default)]
    pub size: SizeName,
    /// Named weight, `normal` when absent or unknown.
    #[serde(default)]
    pub weight: WeightName,
    /// CSS color; white when absent or unparseable.
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,
}

/// Element anchor plus pixel offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDef {
    /// Horizontal anchor.
    #[serde(default)]
    pub x: HAnchor,
    /// Vertical anchor.
    #[serde(default)]
    pub y: VAnchor,
    /// Added to the anchored x.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub offset_x: f64,
    /// Added to the anchored y.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub offset_y: f64,
}

/// Element entrance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationDef {
    /// Entrance curve.
    #[serde(default)]
    pub enter: EnterAnimation,
    /// Seconds before the element's clock starts.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub delay: f64,
}

/// Broadcast overlay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsOverlayDef {
    /// Badge text; the configured channel name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    /// Headline; blank suppresses the whole banner stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Sub-headline bar text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_headline: Option<String>,
    /// Show the `BREAKING NEWS` label above the headline.
    #[serde(default = "yes")]
    pub is_breaking: bool,
    /// Show the banner stack at all; usually set only on a lead-in scene.
    #[serde(default = "yes", alias = "showOverlay")]
    pub show_banner: bool,
}

impl Default for NewsOverlayDef {
    fn default() -> Self {
        Self {
            channel_name: None,
            headline: None,
            sub_headline: None,
            is_breaking: true,
            show_banner: true,
        }
    }
}

impl NewsOverlayDef {
    /// Non-blank channel name.
    pub fn channel_name(&self) -> Option<&str> {
        non_blank(&self.channel_name)
    }

    /// Non-blank headline.
    pub fn headline(&self) -> Option<&str> {
        non_blank(&self.headline)
    }

    /// Non-blank sub-headline.
    pub fn sub_headline(&self) -> Option<&str> {
        non_blank(&self.sub_headline)
    }
}

/// Narration attached to a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrationDef {
    /// Subtitle text; empty means none.
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
