use crate::config::{ensure, ConfigError};
use item_core::Vec2;
use serde::{Deserialize, Serialize};

/// Front-loaded lunge response
///
/// Maps a progress fraction `f` in `[0, 1]` to a speed multiplier:
/// zero below `threshold`, then `max(0, peak - (falloff * f)^2)`.
/// The motion starts after a short delay at close to `peak` and tapers off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LungeCurve {
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    #[serde(default = "default_peak")]
    pub peak: f32,
    #[serde(default = "default_falloff")]
    pub falloff: f32,
}

impl Default for LungeCurve {
    fn default() -> Self {
        LungeCurve {
            threshold: default_threshold(),
            peak: default_peak(),
            falloff: default_falloff(),
        }
    }
}

fn default_threshold() -> f32 {
    0.1
}
fn default_peak() -> f32 {
    2.0
}
fn default_falloff() -> f32 {
    1.5
}

impl LungeCurve {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure((0.0..1.0).contains(&self.threshold), || {
            format!("lunge threshold must be in [0, 1), got {}", self.threshold)
        })?;
        ensure(self.peak.is_finite() && self.peak > 0.0, || {
            format!("lunge peak must be positive, got {}", self.peak)
        })?;
        ensure(self.falloff.is_finite() && self.falloff >= 0.0, || {
            format!("lunge falloff must be non-negative, got {}", self.falloff)
        })
    }

    /// Speed multiplier at progress `f`
    pub fn speed(&self, f: f32) -> f32 {
        if f < self.threshold {
            return 0.0;
        }
        (self.peak - (self.falloff * f).powi(2)).max(0.0)
    }

    /// Area under [`speed`](Self::speed) from 0 to `f` (clamped to `[0, 1]`)
    pub fn integral(&self, f: f32) -> f32 {
        let upper = f.clamp(0.0, 1.0).min(self.cutoff());
        if upper <= self.threshold {
            return 0.0;
        }
        self.antiderivative(upper) - self.antiderivative(self.threshold)
    }

    /// Fraction of the full lunge distance covered at `f`
    ///
    /// 0 below the threshold and 1 (the maximum) at `f = 1`.
    pub fn progress(&self, f: f32) -> f32 {
        let total = self.integral(1.0);
        if total <= 0.0 {
            return 0.0;
        }
        (self.integral(f) / total).clamp(0.0, 1.0)
    }

    /// Progress where speed reaches zero
    fn cutoff(&self) -> f32 {
        if self.falloff <= 0.0 {
            f32::INFINITY
        } else {
            self.peak.max(0.0).sqrt() / self.falloff
        }
    }

    fn antiderivative(&self, x: f32) -> f32 {
        self.peak * x - self.falloff * self.falloff * x.powi(3) / 3.0
    }
}

/// Straight-line lunge handed to the wielder's locomotion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LungePath {
    /// Unit direction, or zero
    pub direction: Vec2,
    /// Speed at a curve multiplier of 1
    pub speed: f32,
    pub curve: LungeCurve,
}

impl LungePath {
    pub fn new(direction: Vec2, speed: f32, curve: LungeCurve) -> Self {
        LungePath {
            direction: direction.normalize_or_zero(),
            speed,
            curve,
        }
    }

    /// Velocity at progress `f`
    pub fn velocity_at(&self, f: f32) -> Vec2 {
        self.direction * self.speed * self.curve.speed(f)
    }

    /// Offset from the start at progress `f`, for a lunge lasting one time unit
    pub fn displacement_at(&self, f: f32) -> Vec2 {
        self.direction * self.speed * self.curve.integral(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_zero_below_threshold() {
        let curve = LungeCurve::default();
        assert_eq!(curve.speed(0.0), 0.0);
        assert_eq!(curve.speed(0.05), 0.0);
        assert_eq!(curve.progress(0.05), 0.0);
    }

    #[test]
    fn test_speed_front_loaded() {
        let curve = LungeCurve::default();
        assert!((curve.speed(0.1) - 1.9775).abs() < EPSILON);
        assert!(curve.speed(0.2) > curve.speed(0.5));
        assert!(curve.speed(0.5) > curve.speed(0.9));
        // 2 - 1.5^2 < 0
        assert_eq!(curve.speed(1.0), 0.0);
    }

    #[test]
    fn test_progress_reaches_maximum_at_end() {
        let curve = LungeCurve::default();
        assert!((curve.progress(1.0) - 1.0).abs() < EPSILON);
        let mut last = 0.0;
        for step in 0..=20 {
            let p = curve.progress(step as f32 / 20.0);
            assert!(p >= last - EPSILON);
            last = p;
        }
    }

    #[test]
    fn test_integral_flat_after_cutoff() {
        let curve = LungeCurve::default();
        // speed hits zero at sqrt(2) / 1.5
        assert!((curve.integral(0.95) - curve.integral(1.0)).abs() < EPSILON);
    }

    #[test]
    fn test_path_direction_normalized() {
        let path = LungePath::new(Vec2::new(3.0, 4.0), 2.0, LungeCurve::default());
        assert!((path.direction.length() - 1.0).abs() < EPSILON);
        assert_eq!(path.velocity_at(0.05), Vec2::ZERO);
        let v = path.velocity_at(0.1);
        assert!((v.length() - 2.0 * 1.9775).abs() < 1e-4);
    }

    #[test]
    fn test_validate() {
        assert!(LungeCurve::default().validate().is_ok());
        let bad = LungeCurve {
            threshold: 1.5,
            ..LungeCurve::default()
        };
        assert!(bad.validate().is_err());
        let bad = LungeCurve {
            peak: 0.0,
            ..LungeCurve::default()
        };
        assert!(bad.validate().is_err());
    }
}
