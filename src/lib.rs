//! scenereel resolves short vertical-video scenes into per-frame paint lists.
//!
//! A scene is described by [`SceneData`] (background, animated elements or a broadcast news
//! overlay, optional subtitle). Every frame is a pure function of the scene, the frame index
//! and a [`FrameContext`]:
//!
//! - [`compose`] resolves one frame into a [`SceneFrame`] (layers back to front)
//! - [`render_scene`] / [`render_timeline`] drive every frame into a [`LayerSink`]
//! - [`SceneBuilder`] assembles scenes the way the upstream generator lays them out
//!
//! Rasterization is left to the consumer of the layer list.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod animation;
pub(crate) mod compile;
pub(crate) mod config;
pub(crate) mod encode;
pub(crate) mod eval;
pub(crate) mod render;
pub(crate) mod scene;

pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Transform2D, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::camera::{
    CameraMotion, CameraPresets, MotionPreset, Span, segment_progress,
};
pub use crate::animation::enter::{
    BASE_SPRING, BOUNCE_SPRING, COUNT_UP_SECS, EnterAnimation, MotionState, NumericContent,
    POP_SPRING, count_up_text,
};
pub use crate::animation::spring::{SpringConfig, damped_spring};
pub use crate::assets::color::ColorDef;
pub use crate::compile::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::config::{OverlayLayout, OverlayTheme, RenderConfig};
pub use crate::encode::sink::{InMemorySink, JsonLinesSink, LayerSink, SinkConfig};
pub use crate::eval::background::{
    GRADIENT_BASE_DEG, GRADIENT_RATE, GRADIENT_SWING_DEG, ResolvedBackground, gradient_angle_deg,
    resolve_background,
};
pub use crate::eval::compositor::{
    FrameContext, Layer, LayerRole, Primitive, RectPrim, SceneFrame, SceneMode, TextPrim, compose,
};
pub use crate::eval::element::{
    EDGE_INSET_X, EDGE_INSET_Y, ResolvedElement, anchor_point, local_frames, resolve_element,
};
pub use crate::eval::overlay::{resolve_caption, resolve_overlay};
pub use crate::render::pipeline::{
    RenderOpts, RenderStats, render_frame, render_scene, render_scene_range, render_timeline,
    total_frames,
};
pub use crate::scene::dsl::{
    CAPTION_CHARS, ElementBuilder, Mood, SUBTITLE_CHARS, SceneBuilder, emoji_for_description,
};
pub use crate::scene::model::{
    AnimationDef, BackgroundDef, ElementDef, ElementKind, HAnchor, NarrationDef, NewsOverlayDef,
    PositionDef, SceneData, SizeName, StyleDef, VAnchor, WeightName,
};
pub use crate::scene::props::ScenePropsFile;
pub use crate::scene::timeline::{ImageGroup, Timeline};
