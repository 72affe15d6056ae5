//! Function Sampler Module
//! Samples y(x) = a1*sin(b1*x) + a2*sin(b2*x) + a3*sin(b3*x) over a range.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on samples produced by one evaluation.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Slack for the last step so that `xk` is kept when float division lands just below it.
const STEP_EPSILON: f64 = 1e-9;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid value for {field}")]
    InvalidNumber { field: String },
    #[error("{field} must be a finite number")]
    NonFinite { field: String },
    #[error("Step dx must be positive")]
    NonPositiveStep,
    #[error("Start x0 must be less than end xk")]
    EmptyRange,
    #[error("Range yields {count} samples, limit is {limit}")]
    TooManySamples { count: usize, limit: usize },
}

/// Amplitudes (a) and frequencies (b) of the three sine terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a1: f64,
    pub b1: f64,
    pub a2: f64,
    pub b2: f64,
    pub a3: f64,
    pub b3: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            a1: 1.0,
            b1: 1.0,
            a2: 0.5,
            b2: 2.0,
            a3: 0.3,
            b3: 3.0,
        }
    }
}

impl Coefficients {
    /// y(x) for these coefficients.
    pub fn value_at(&self, x: f64) -> f64 {
        self.a1 * (self.b1 * x).sin()
            + self.a2 * (self.b2 * x).sin()
            + self.a3 * (self.b3 * x).sin()
    }

    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            ("a1", self.a1),
            ("b1", self.b1),
            ("a2", self.a2),
            ("b2", self.b2),
            ("a3", self.a3),
            ("b3", self.b3),
        ];
        check_finite(&fields)
    }
}

/// Sampling range: start, end (inclusive when reached) and step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub x0: f64,
    pub xk: f64,
    pub dx: f64,
}

impl Default for SampleRange {
    fn default() -> Self {
        Self {
            x0: 0.0,
            xk: 10.0,
            dx: 0.1,
        }
    }
}

impl SampleRange {
    pub fn validate(&self) -> Result<(), InputError> {
        check_finite(&[("x0", self.x0), ("xk", self.xk), ("dx", self.dx)])?;

        if self.dx <= 0.0 {
            return Err(InputError::NonPositiveStep);
        }
        if self.x0 >= self.xk {
            return Err(InputError::EmptyRange);
        }

        let count = self.sample_count();
        if count > MAX_SAMPLES {
            return Err(InputError::TooManySamples {
                count,
                limit: MAX_SAMPLES,
            });
        }
        Ok(())
    }

    /// Number of points x0, x0+dx, ... not exceeding xk.
    ///
    /// Saturates at `usize::MAX` when the step count overflows, so `validate`
    /// reports such ranges as `TooManySamples`.
    pub fn sample_count(&self) -> usize {
        let steps = ((self.xk - self.x0) / self.dx + STEP_EPSILON).floor();
        if steps.is_nan() || steps < 0.0 {
            0
        } else if steps.is_infinite() {
            usize::MAX
        } else {
            (steps as usize).saturating_add(1)
        }
    }

    /// The i-th sample position.
    pub fn x_at(&self, i: usize) -> f64 {
        self.x0 + i as f64 * self.dx
    }
}

/// One (x, y) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

fn check_finite(fields: &[(&str, f64)]) -> Result<(), InputError> {
    match fields.iter().find(|(_, v)| !v.is_finite()) {
        Some((field, _)) => Err(InputError::NonFinite {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

/// Sample y(x) at x0, x0+dx, ... up to xk.
///
/// Positions are computed as `x0 + i*dx` rather than by repeated addition, so the
/// last point does not drift past `xk`.
pub fn evaluate(
    coefficients: &Coefficients,
    range: &SampleRange,
) -> Result<Vec<SamplePoint>, InputError> {
    coefficients.validate()?;
    range.validate()?;

    let points: Vec<SamplePoint> = (0..range.sample_count())
        .map(|i| {
            let x = range.x_at(i);
            SamplePoint {
                x,
                y: coefficients.value_at(x),
            }
        })
        .collect();

    debug!(
        "sampled {} points over [{}, {}] step {}",
        points.len(),
        range.x0,
        range.xk,
        range.dx
    );
    Ok(points)
}

/// Flat-argument form of [`evaluate`].
#[allow(clippy::too_many_arguments)]
pub fn evaluate_raw(
    a1: f64,
    b1: f64,
    a2: f64,
    b2: f64,
    a3: f64,
    b3: f64,
    x0: f64,
    xk: f64,
    dx: f64,
) -> Result<Vec<(f64, f64)>, InputError> {
    let coefficients = Coefficients {
        a1,
        b1,
        a2,
        b2,
        a3,
        b3,
    };
    let range = SampleRange { x0, xk, dx };

    Ok(evaluate(&coefficients, &range)?
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect())
}

/// (min, max) of the sampled y values, or `None` for no samples.
pub fn y_extent(points: &[SamplePoint]) -> Option<(f64, f64)> {
    points.iter().fold(None, |acc, p| match acc {
        None => Some((p.y, p.y)),
        Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_default_range_includes_both_ends() {
        let points = evaluate(&Coefficients::default(), &SampleRange::default()).unwrap();
        assert_eq!(points.len(), 101);
        assert_eq!(points[0].x, 0.0);
        assert!((points[100].x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_values_match_formula() {
        let c = Coefficients {
            a1: 2.0,
            b1: 1.0,
            a2: 0.0,
            b2: 5.0,
            a3: -1.0,
            b3: 0.5,
        };
        let range = SampleRange {
            x0: 0.0,
            xk: PI,
            dx: PI / 2.0,
        };
        let points = evaluate(&c, &range).unwrap();
        assert_eq!(points.len(), 3);
        assert!(points[0].y.abs() < 1e-12);
        // 2*sin(pi/2) - sin(pi/4)
        let expected = 2.0 - (PI / 4.0).sin();
        assert!((points[1].y - expected).abs() < 1e-12);
    }

    #[test]
    fn test_endpoint_excluded_when_step_overshoots() {
        let range = SampleRange {
            x0: 0.0,
            xk: 1.0,
            dx: 0.3,
        };
        let points = evaluate(&Coefficients::default(), &range).unwrap();
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 4);
        assert!((xs[3] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_step() {
        for dx in [0.0, -0.1] {
            let range = SampleRange {
                x0: 0.0,
                xk: 1.0,
                dx,
            };
            assert_eq!(range.validate(), Err(InputError::NonPositiveStep));
        }
    }

    #[test]
    fn test_rejects_degenerate_range() {
        let range = SampleRange {
            x0: 1.0,
            xk: 1.0,
            dx: 0.1,
        };
        assert_eq!(
            evaluate(&Coefficients::default(), &range),
            Err(InputError::EmptyRange)
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let c = Coefficients {
            b2: f64::NAN,
            ..Coefficients::default()
        };
        assert_eq!(
            evaluate(&c, &SampleRange::default()),
            Err(InputError::NonFinite {
                field: "b2".to_string()
            })
        );

        let range = SampleRange {
            xk: f64::INFINITY,
            ..SampleRange::default()
        };
        assert!(matches!(
            range.validate(),
            Err(InputError::NonFinite { field }) if field == "xk"
        ));
    }

    #[test]
    fn test_rejects_too_many_samples() {
        let range = SampleRange {
            x0: 0.0,
            xk: 1.0,
            dx: 1e-9,
        };
        assert!(matches!(
            range.validate(),
            Err(InputError::TooManySamples { limit: MAX_SAMPLES, .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_span() {
        // xk - x0 overflows to infinity
        let range = SampleRange {
            x0: -1e308,
            xk: 1e308,
            dx: 1.0,
        };
        assert_eq!(range.sample_count(), usize::MAX);
        assert_eq!(
            range.validate(),
            Err(InputError::TooManySamples {
                count: usize::MAX,
                limit: MAX_SAMPLES
            })
        );
        assert!(evaluate(&Coefficients::default(), &range).is_err());
    }

    #[test]
    fn test_raw_form_matches() {
        let raw = evaluate_raw(1.0, 1.0, 0.5, 2.0, 0.3, 3.0, 0.0, 10.0, 0.1).unwrap();
        let typed = evaluate(&Coefficients::default(), &SampleRange::default()).unwrap();
        assert_eq!(raw.len(), typed.len());
        assert_eq!(raw[42], (typed[42].x, typed[42].y));
    }

    #[test]
    fn test_y_extent() {
        assert_eq!(y_extent(&[]), None);
        let points = [
            SamplePoint { x: 0.0, y: 1.5 },
            SamplePoint { x: 1.0, y: -2.0 },
            SamplePoint { x: 2.0, y: 0.0 },
        ];
        assert_eq!(y_extent(&points), Some((-2.0, 1.5)));
    }

    proptest! {
        #[test]
        fn test_samples_stay_in_range(
            x0 in -100.0f64..100.0,
            span in 0.01f64..50.0,
            dx in 0.01f64..5.0,
        ) {
            let range = SampleRange { x0, xk: x0 + span, dx };
            let points = evaluate(&Coefficients::default(), &range).unwrap();
            prop_assert!(!points.is_empty());
            prop_assert_eq!(points[0].x, x0);
            for p in &points {
                prop_assert!(p.x <= range.xk + dx * 1e-6);
                // |y| is bounded by the sum of amplitudes
                prop_assert!(p.y.abs() <= 1.8 + 1e-12);
            }
        }

        #[test]
        fn test_smaller_step_never_yields_fewer_samples(
            span in 0.1f64..20.0,
            dx in 0.01f64..2.0,
        ) {
            let coarse = SampleRange { x0: 0.0, xk: span, dx };
            let fine = SampleRange { dx: dx / 2.0, ..coarse };
            prop_assert!(fine.sample_count() >= coarse.sample_count());
        }
    }
}
