use xxhash_rust::xxh3::Xxh3;

use crate::animation::camera::CameraMotion;
use crate::assets::color::ColorDef;
use crate::eval::background::ResolvedBackground;
use crate::eval::compositor::{Layer, LayerRole, Primitive, SceneFrame, SceneMode, TextPrim};
use crate::eval::element::ResolvedElement;
use crate::foundation::core::{Affine, Point, Rect, Vec2};
use crate::scene::model::ElementKind;

const XXH3_SEED: u64 = 0x5ce7_e4ee_1d0c_a11f;

/// Stable 128-bit fingerprint of a resolved frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint the visual content of `frame`.
///
/// The frame index is not hashed, so two frames that paint the same picture share a
/// fingerprint; the driver uses this to count static frames.
pub fn fingerprint_frame(frame: &SceneFrame) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u8(match frame.mode {
        SceneMode::Elements => 0,
        SceneMode::Overlay => 1,
    });
    h.write_u32(frame.layers.len() as u32);
    for layer in &frame.layers {
        write_layer(&mut h, layer);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 paint the same
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_layer(h: &mut StableHasher, layer: &Layer) {
    h.write_u8(match layer.role {
        LayerRole::Background => 0,
        LayerRole::Element => 1,
        LayerRole::Caption => 2,
        LayerRole::OverlayBadge => 3,
        LayerRole::OverlaySubtitle => 4,
        LayerRole::OverlayBreaking => 5,
        LayerRole::OverlayHeadline => 6,
        LayerRole::OverlaySubHeadline => 7,
    });
    match &layer.primitive {
        Primitive::Background(bg) => {
            h.write_u8(0);
            write_background(h, bg);
        }
        Primitive::Element(el) => {
            h.write_u8(1);
            write_element(h, el);
        }
        Primitive::Rect(r) => {
            h.write_u8(2);
            write_rect(h, r.rect);
            write_color(h, r.fill);
        }
        Primitive::Text(t) => {
            h.write_u8(3);
            write_text(h, t);
        }
    }
}

fn write_background(h: &mut StableHasher, bg: &ResolvedBackground) {
    match bg {
        ResolvedBackground::Gradient { colors, angle_deg } => {
            h.write_u8(0);
            h.write_u32(colors.len() as u32);
            for c in colors {
                write_color(h, *c);
            }
            h.write_f64(*angle_deg);
        }
        ResolvedBackground::Solid { color } => {
            h.write_u8(1);
            write_color(h, *color);
        }
        ResolvedBackground::Image {
            image_path,
            camera,
            progress: _,
            scale: _,
            translate: _,
            transform,
        } => {
            // progress/scale/translate are folded into `transform`
            h.write_u8(2);
            h.write_str(image_path);
            write_camera(h, *camera);
            write_affine(h, *transform);
        }
    }
}

fn write_camera(h: &mut StableHasher, c: CameraMotion) {
    h.write_u8(CameraMotion::ALL.iter().position(|m| *m == c).unwrap_or(0) as u8);
}

fn write_element(h: &mut StableHasher, el: &ResolvedElement) {
    h.write_u8(match el.kind {
        ElementKind::Text => 0,
        ElementKind::Emoji => 1,
        ElementKind::Number => 2,
    });
    h.write_str(&el.content);
    write_point(h, el.position);
    write_vec2(h, el.pivot);
    h.write_f64(el.font_size);
    h.write_u16(el.font_weight);
    write_color(h, el.color);
    h.write_f64(el.opacity);
    write_affine(h, el.transform);
}

fn write_text(h: &mut StableHasher, t: &TextPrim) {
    h.write_str(&t.text);
    write_point(h, t.position);
    write_vec2(h, t.pivot);
    h.write_f64(t.font_size);
    h.write_u16(t.font_weight);
    write_color(h, t.color);
    match t.max_width {
        Some(w) => {
            h.write_u8(1);
            h.write_f64(w);
        }
        None => h.write_u8(0),
    }
}

fn write_color(h: &mut StableHasher, c: ColorDef) {
    h.write_f64(c.r);
    h.write_f64(c.g);
    h.write_f64(c.b);
    h.write_f64(c.a);
}

fn write_point(h: &mut StableHasher, p: Point) {
    h.write_f64(p.x);
    h.write_f64(p.y);
}

fn write_vec2(h: &mut StableHasher, v: Vec2) {
    h.write_f64(v.x);
    h.write_f64(v.y);
}

fn write_rect(h: &mut StableHasher, r: Rect) {
    h.write_f64(r.x0);
    h.write_f64(r.y0);
    h.write_f64(r.x1);
    h.write_f64(r.y1);
}

fn write_affine(h: &mut StableHasher, a: Affine) {
    for c in a.as_coeffs() {
        h.write_f64(c);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
