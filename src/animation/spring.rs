use crate::foundation::core::Fps;

/// Physical parameters of a damped spring driven from rest at 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient.
    pub damping: f64,
    /// Spring stiffness.
    pub stiffness: f64,
    /// Oscillating mass.
    #[serde(default = "unit_mass")]
    pub mass: f64,
}

fn unit_mass() -> f64 {
    1.0
}

impl SpringConfig {
    /// Spring with unit mass.
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    /// Damping ratio `zeta`; `< 1` overshoots.
    pub fn damping_ratio(self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(10.0, 100.0)
    }
}

/// Progress of a damped spring `elapsed_frames` after release.
///
/// Closed-form step response with `x(0)=0`, `v(0)=0`, so any frame can be sampled in any
/// order. Non-positive or non-finite elapsed time samples the rest state `0`. Underdamped
/// configurations overshoot past `1` before settling.
pub fn damped_spring(elapsed_frames: f64, fps: Fps, config: SpringConfig) -> f64 {
    if !elapsed_frames.is_finite() || elapsed_frames <= 0.0 {
        return 0.0;
    }
    let t = fps.frames_to_secs(elapsed_frames);
    spring_step(t, config)
}

fn spring_step(t: f64, config: SpringConfig) -> f64 {
    let k = config.stiffness.max(0.0);
    let m = config.mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return 1.0;
    }
    let zeta = config.damping_ratio();

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
    } else {
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
