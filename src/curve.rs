//! Scale-over-time curves
//!
//! The spawner samples a curve at normalized animation time [0, 1] to get
//! the uniform scale factor for that frame. The curve is authored data and
//! treated as opaque: values above 1.0 (overshoot) and below 0.0 pass
//! through untouched.

use serde::{Deserialize, Serialize};

/// Evaluator sampled at normalized time `t` in [0, 1].
///
/// Implemented by [`Curve`] for authored keyframe data, and by any plain
/// `Fn(f32) -> f32` so tests can stub a known function.
pub trait ScaleCurve {
    fn evaluate(&self, t: f32) -> f32;
}

impl<F: Fn(f32) -> f32> ScaleCurve for F {
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

/// A piecewise-linear keyframe curve over normalized time.
///
/// Keys are (time, value) pairs sorted by time. Sampling outside the keyed
/// range clamps to the first/last value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    keys: Vec<(f32, f32)>,
}

impl Curve {
    /// Build a curve from keyframes. Keys are sorted by time; at least one
    /// key is required.
    pub fn new(mut keys: Vec<(f32, f32)>) -> Result<Self, String> {
        if keys.is_empty() {
            return Err("curve needs at least one keyframe".to_string());
        }
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { keys })
    }

    /// Sample the curve at `t` with linear interpolation between keys.
    pub fn evaluate(&self, t: f32) -> f32 {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        // t is strictly inside the keyed range, so a bracketing pair exists
        for pair in self.keys.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            if t <= t1 {
                if t1 - t0 <= f32::EPSILON {
                    return v1;
                }
                let f = (t - t0) / (t1 - t0);
                return v0 + (v1 - v0) * f;
            }
        }
        last.1
    }

    /// Keyframes in sorted order.
    pub fn keys(&self) -> &[(f32, f32)] {
        &self.keys
    }
}

impl Default for Curve {
    /// Pop-in shape: grow past full size, then settle back to 1.0.
    fn default() -> Self {
        Self {
            keys: vec![(0.0, 0.0), (0.2, 1.3), (0.5, 1.0), (1.0, 1.0)],
        }
    }
}

impl ScaleCurve for Curve {
    fn evaluate(&self, t: f32) -> f32 {
        Curve::evaluate(self, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_curve_is_rejected() {
        assert!(Curve::new(vec![]).is_err());
    }

    #[test]
    fn test_single_key_is_constant() {
        let curve = Curve::new(vec![(0.5, 2.0)]).unwrap();
        assert_eq!(curve.evaluate(0.0), 2.0);
        assert_eq!(curve.evaluate(0.5), 2.0);
        assert_eq!(curve.evaluate(1.0), 2.0);
    }

    #[test]
    fn test_linear_interpolation_between_keys() {
        let curve = Curve::new(vec![(0.0, 0.0), (1.0, 2.0)]).unwrap();
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert!((curve.evaluate(0.25) - 0.5).abs() < 1e-6);
        assert!((curve.evaluate(0.5) - 1.0).abs() < 1e-6);
        assert_eq!(curve.evaluate(1.0), 2.0);
    }

    #[test]
    fn test_samples_clamp_outside_keyed_range() {
        let curve = Curve::new(vec![(0.2, 1.0), (0.8, 3.0)]).unwrap();
        assert_eq!(curve.evaluate(-1.0), 1.0);
        assert_eq!(curve.evaluate(0.0), 1.0);
        assert_eq!(curve.evaluate(1.0), 3.0);
        assert_eq!(curve.evaluate(5.0), 3.0);
    }

    #[test]
    fn test_unsorted_keys_are_sorted_on_build() {
        let curve = Curve::new(vec![(1.0, 2.0), (0.0, 0.0)]).unwrap();
        assert_eq!(curve.keys(), &[(0.0, 0.0), (1.0, 2.0)]);
    }

    #[test]
    fn test_overshoot_and_negative_values_pass_through() {
        let curve = Curve::new(vec![(0.0, -0.5), (1.0, 1.8)]).unwrap();
        assert!(curve.evaluate(0.0) < 0.0);
        assert!(curve.evaluate(1.0) > 1.0);
    }

    #[test]
    fn test_closure_works_as_curve_stub() {
        let identity = |t: f32| t;
        assert_eq!(ScaleCurve::evaluate(&identity, 0.25), 0.25);
    }
}
