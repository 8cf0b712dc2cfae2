use serde::Serialize;

use crate::assets::color::ColorDef;
use crate::config::RenderConfig;
use crate::eval::background::{ResolvedBackground, resolve_background};
use crate::eval::element::{ResolvedElement, resolve_element};
use crate::eval::overlay::{resolve_caption, resolve_overlay};
use crate::foundation::core::{Canvas, Fps, FrameIndex, Point, Rect, Vec2};
use crate::scene::model::SceneData;

/// Timeline-wide inputs shared by every frame of a render.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext<'a> {
    /// Output frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Presets and theme.
    pub config: &'a RenderConfig,
}

impl<'a> FrameContext<'a> {
    /// Context using the frame rate and canvas of `config`.
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            fps: config.fps,
            canvas: config.canvas,
            config,
        }
    }

    /// Same context on a different canvas.
    pub fn with_canvas(self, canvas: Canvas) -> Self {
        Self { canvas, ..self }
    }
}

/// Which content a scene shows on top of its background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneMode {
    /// Free elements plus an optional caption box.
    Elements,
    /// Broadcast overlay chrome.
    Overlay,
}

/// What a layer is part of. Lets consumers and tests check mode exclusivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    /// Gradient, solid or image background.
    Background,
    /// One free element.
    Element,
    /// Element-mode subtitle box.
    Caption,
    /// Channel badge.
    OverlayBadge,
    /// Overlay subtitle band.
    OverlaySubtitle,
    /// Breaking-news label.
    OverlayBreaking,
    /// Headline bar.
    OverlayHeadline,
    /// Sub-headline bar.
    OverlaySubHeadline,
}

impl LayerRole {
    /// Part of the broadcast overlay chrome.
    pub fn is_overlay(self) -> bool {
        matches!(
            self,
            Self::OverlayBadge
                | Self::OverlaySubtitle
                | Self::OverlayBreaking
                | Self::OverlayHeadline
                | Self::OverlaySubHeadline
        )
    }

    /// Only ever present in element mode.
    pub fn is_element_mode(self) -> bool {
        matches!(self, Self::Element | Self::Caption)
    }
}

/// Filled axis-aligned rectangle in canvas pixels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RectPrim {
    /// Bounds.
    pub rect: Rect,
    /// Straight-alpha fill.
    pub fill: ColorDef,
}

/// Single run of text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextPrim {
    /// Text to draw.
    pub text: String,
    /// Reference point in canvas pixels.
    pub position: Point,
    /// Which point of the text box sits on `position`.
    pub pivot: Vec2,
    /// Font size in pixels.
    pub font_size: f64,
    /// Numeric font weight.
    pub font_weight: u16,
    /// Straight-alpha color.
    pub color: ColorDef,
    /// Width the renderer should fit the text into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

/// Draw primitive of a layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Scene background.
    Background(ResolvedBackground),
    /// Element with its animated state.
    Element(ResolvedElement),
    /// Filled rectangle.
    Rect(RectPrim),
    /// Text run.
    Text(TextPrim),
}

/// One entry of a frame's paint list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layer {
    /// Purpose of the layer.
    pub role: LayerRole,
    /// What to draw.
    pub primitive: Primitive,
}

/// Paint list of one scene at one frame, back to front.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneFrame {
    /// Scene-local frame.
    pub frame: FrameIndex,
    /// Content mode the scene resolved to.
    pub mode: SceneMode,
    /// Layers in paint order.
    pub layers: Vec<Layer>,
}

impl SceneFrame {
    /// Layers with the given role.
    pub fn layers_with_role(&self, role: LayerRole) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(move |l| l.role == role)
    }
}

/// Resolve `scene` at scene-local `frame`.
///
/// Paint order is fixed: background, then either the overlay chrome or the elements, then
/// (element mode only) the caption box. A scene carrying both `newsOverlay` and `elements`
/// renders in overlay mode. There is no upper bound on `frame`; motion extrapolates past the
/// scene's end, so drivers clamp.
#[tracing::instrument(level = "trace", skip(scene, ctx), fields(scene = scene.scene_number))]
pub fn compose(scene: &SceneData, frame: FrameIndex, ctx: &FrameContext<'_>) -> SceneFrame {
    let mut layers = vec![Layer {
        role: LayerRole::Background,
        primitive: Primitive::Background(resolve_background(
            scene, frame, ctx.fps, ctx.canvas, ctx.config,
        )),
    }];

    let mode = match &scene.news_overlay {
        Some(overlay) => {
            if !scene.elements.is_empty() {
                tracing::debug!(
                    dropped = scene.elements.len(),
                    "newsOverlay present, elements suppressed"
                );
            }
            layers.extend(resolve_overlay(
                overlay,
                scene.subtitle(),
                ctx.canvas,
                &ctx.config.theme,
            ));
            SceneMode::Overlay
        }
        None => {
            layers.extend(scene.elements.iter().map(|el| Layer {
                role: LayerRole::Element,
                primitive: Primitive::Element(resolve_element(el, frame, ctx.fps, ctx.canvas)),
            }));
            if let Some(subtitle) = scene.subtitle() {
                layers.extend(resolve_caption(subtitle, ctx.canvas, &ctx.config.theme));
            }
            SceneMode::Elements
        }
    };

    SceneFrame {
        frame,
        mode,
        layers,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/compositor.rs"]
mod tests;
