use crate::foundation::core::Vec2;

pub(crate) trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Linear map of `x` from `input` to `output`, clamped to the output bounds.
///
/// A degenerate input range returns `output.1` once `x` reaches it and `output.0` before.
pub(crate) fn interpolate_clamped(x: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (x0, x1) = input;
    let span = x1 - x0;
    let t = if span.abs() < f64::EPSILON {
        if x >= x1 { 1.0 } else { 0.0 }
    } else {
        ((x - x0) / span).clamp(0.0, 1.0)
    };
    f64::lerp(&output.0, &output.1, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
