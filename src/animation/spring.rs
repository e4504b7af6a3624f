use crate::foundation::core::Fps;
use crate::foundation::error::{DemoreelError, DemoreelResult};

/// Damped harmonic oscillator configuration, unit-step normalized.
///
/// [`SpringConfig::sample`] evaluates the closed-form step response of
/// `m·x'' + c·x' + k·x = k` released from rest at `x = 0`, so the output
/// starts at 0 and converges to 1. Under-damped configurations overshoot and
/// ring; critically and over-damped configurations approach 1 monotonically.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub mass: f64,
    pub damping: f64,
    pub stiffness: f64,
    /// Cap the output at 1 even when the under-damped solution would
    /// overshoot. Never clamps below 0.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl SpringConfig {
    pub const fn new(mass: f64, damping: f64, stiffness: f64) -> Self {
        Self {
            mass,
            damping,
            stiffness,
            overshoot_clamping: false,
        }
    }

    /// Heavily over-damped glide with no overshoot (page content, slides).
    pub const fn smooth() -> Self {
        Self::new(1.0, 200.0, 100.0)
    }

    /// Quick entrance with a small ring (badges, tooltips).
    pub const fn snappy() -> Self {
        Self::new(1.0, 20.0, 200.0)
    }

    /// Pronounced overshoot and ring (logo pops, playful accents).
    pub const fn bouncy() -> Self {
        Self::new(1.0, 8.0, 100.0)
    }

    /// Slow, weighty settle.
    pub const fn heavy() -> Self {
        Self::new(2.0, 15.0, 80.0)
    }

    pub const fn with_overshoot_clamping(mut self, on: bool) -> Self {
        self.overshoot_clamping = on;
        self
    }

    /// Validate physical plausibility: positive finite mass and stiffness,
    /// non-negative finite damping.
    pub fn validate(&self) -> DemoreelResult<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(DemoreelError::validation(
                "spring mass must be finite and > 0",
            ));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(DemoreelError::validation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(DemoreelError::validation(
                "spring damping must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Damping ratio ζ; < 1 rings, 1 is critical, > 1 glides.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }

    /// Progress of the spring at `frame`, started `delay` frames in.
    ///
    /// Returns exactly 0 for `frame < delay`. For any valid configuration
    /// with positive damping, `|x - 1| -> 0` as elapsed time grows; there is
    /// no state carried between calls, so out-of-order and parallel sampling
    /// are safe.
    pub fn sample(&self, frame: u64, fps: Fps, delay: u64) -> DemoreelResult<f64> {
        self.validate()?;
        if frame < delay {
            return Ok(0.0);
        }

        let t = fps.frames_to_secs(frame - delay);
        let omega0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        let x = if (zeta - 1.0).abs() < 1e-9 {
            // Critically damped.
            1.0 - (-omega0 * t).exp() * (1.0 + omega0 * t)
        } else if zeta < 1.0 {
            // Under-damped: decaying oscillation around 1.
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            1.0 - envelope * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
        } else {
            // Over-damped: both characteristic roots are real and negative.
            // Formulated on the root pair (not cosh/sinh) so heavily
            // over-damped configurations cannot overflow the exponentials.
            let s = omega0 * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega0 + s;
            let r2 = -zeta * omega0 - s;
            1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
        };

        Ok(if self.overshoot_clamping { x.min(1.0) } else { x })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
