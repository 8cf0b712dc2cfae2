use serde::Serialize;

use crate::animation::enter::{EnterAnimation, count_up_text};
use crate::assets::color::ColorDef;
use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, Point, Transform2D, Vec2};
use crate::scene::model::{ElementDef, ElementKind, HAnchor, VAnchor};

/// Inset of left/right anchors from the canvas edge, in pixels.
pub const EDGE_INSET_X: f64 = 50.0;
/// Inset of top/bottom anchors from the canvas edge, in pixels.
pub const EDGE_INSET_Y: f64 = 100.0;

/// Fully resolved visual state of one element at one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedElement {
    /// Content kind, carried through for renderers that pick fonts by it.
    pub kind: ElementKind,
    /// Text to draw, with any `count-up` value already substituted.
    pub content: String,
    /// Anchored resting point in canvas pixels, offsets applied.
    pub position: Point,
    /// Which point of the text box sits on `position`: `(0|0.5|1, 0|0.5|1)`.
    pub pivot: Vec2,
    /// Font size in pixels.
    pub font_size: f64,
    /// Numeric font weight.
    pub font_weight: u16,
    /// Straight-alpha text color.
    pub color: ColorDef,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Entrance offset from `position`.
    pub translate: Vec2,
    /// Entrance scale about `position`.
    pub scale: f64,
    /// `translate` and `scale` flattened into one matrix.
    pub transform: Affine,
}

/// Frames elapsed on an element's own clock, which starts `delay_secs` into the scene.
///
/// Non-finite or negative delays count as zero.
pub fn local_frames(frame: FrameIndex, delay_secs: f64, fps: Fps) -> f64 {
    let delay = if delay_secs.is_finite() {
        delay_secs.max(0.0)
    } else {
        0.0
    };
    (frame.0 as f64 - fps.secs_to_frames(delay)).max(0.0)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Resting point and pivot for an element's anchors on `canvas`.
pub fn anchor_point(element: &ElementDef, canvas: Canvas) -> (Point, Vec2) {
    let pos = &element.position;
    let (x, px) = match pos.x {
        HAnchor::Left => (EDGE_INSET_X, 0.0),
        HAnchor::Center => (canvas.w() * 0.5, 0.5),
        HAnchor::Right => (canvas.w() - EDGE_INSET_X, 1.0),
    };
    let (y, py) = match pos.y {
        VAnchor::Top => (EDGE_INSET_Y, 0.0),
        VAnchor::Center => (canvas.h() * 0.5, 0.5),
        VAnchor::Bottom => (canvas.h() - EDGE_INSET_Y, 1.0),
    };
    (
        Point::new(x + finite_or_zero(pos.offset_x), y + finite_or_zero(pos.offset_y)),
        Vec2::new(px, py),
    )
}

/// Resolve `element` at scene-local `frame`.
///
/// Never fails: unknown names were already mapped to defaults at parse time, an unparseable
/// color renders white and `count-up` content without a number renders literally.
pub fn resolve_element(
    element: &ElementDef,
    frame: FrameIndex,
    fps: Fps,
    canvas: Canvas,
) -> ResolvedElement {
    let anim = element.animation.enter;
    let local = local_frames(frame, element.animation.delay, fps);
    let motion = anim.sample(local, fps);

    let content = match anim {
        EnterAnimation::CountUp => count_up_text(&element.content, local, fps)
            .unwrap_or_else(|| element.content.clone()),
        _ => element.content.clone(),
    };

    let (position, pivot) = anchor_point(element, canvas);
    let transform =
        Transform2D::uniform(motion.scale, motion.translate, position.to_vec2()).to_affine();

    ResolvedElement {
        kind: element.kind,
        content,
        position,
        pivot,
        font_size: element.style.size.px(),
        font_weight: element.style.weight.value(),
        color: ColorDef::parse_or(element.style.color.as_deref(), ColorDef::WHITE),
        opacity: motion.opacity,
        translate: motion.translate,
        scale: motion.scale,
        transform,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/element.rs"]
mod tests;
