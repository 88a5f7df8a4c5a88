use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};

/// Closed interval `[lo, hi]` sampled at `count` evenly spaced points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

impl AxisSpec {
    pub fn new(lo: f64, hi: f64, count: usize) -> Self {
        AxisSpec { lo, hi, count }
    }

    pub fn validate(&self) -> Result<()> {
        let finite = self.lo.is_finite() && self.hi.is_finite();
        if self.count < 1 || !finite || self.lo > self.hi {
            return Err(FieldError::invalid_range(self.lo, self.hi, self.count));
        }
        Ok(())
    }
}

/// Evenly spaced samples of an [`AxisSpec`], read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledAxis {
    spec: AxisSpec,
    values: Vec<f64>,
}

impl SampledAxis {
    pub fn build(spec: AxisSpec) -> Result<Self> {
        spec.validate()?;

        let values = if spec.count == 1 {
            vec![spec.lo]
        } else {
            let last = spec.count - 1;
            let span = spec.hi - spec.lo;
            let step = span / last as f64;
            // Each value from lo directly; both endpoints are pinned.
            (0..spec.count)
                .map(|i| {
                    if i == 0 {
                        spec.lo
                    } else if i == last {
                        spec.hi
                    } else if span.is_finite() {
                        spec.lo + i as f64 * step
                    } else {
                        // hi - lo overflows: blend the endpoints instead.
                        let t = i as f64 / last as f64;
                        spec.lo * (1.0 - t) + spec.hi * t
                    }
                })
                .collect()
        };

        Ok(SampledAxis { spec, values })
    }

    pub fn spec(&self) -> AxisSpec {
        self.spec
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Spacing between neighbouring samples, zero for a single sample.
    /// Infinite when `hi - lo` overflows.
    pub fn step(&self) -> f64 {
        if self.spec.count > 1 {
            (self.spec.hi - self.spec.lo) / (self.spec.count - 1) as f64
        } else {
            0.0
        }
    }
}
