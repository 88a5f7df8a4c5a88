use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};
use crate::math::C;

/// One sampled coordinate pair, read as c = x + iy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    pub fn new(x: f64, y: f64) -> Self {
        GridPoint { x, y }
    }

    pub fn to_c(&self) -> C {
        C::new(self.x, self.y)
    }
}

/// Which role the grid point plays in z <- z^2 + c.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recurrence {
    /// z0 = c = point.
    #[default]
    Mandelbrot,
    /// z0 = point, c fixed.
    Julia { re: f64, im: f64 },
    /// Real line only: z0 = c = point.x, y ignored.
    Real,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EscapeConfig {
    pub max_iterations: u32,
    pub divergence_radius: f64,
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        EscapeConfig {
            max_iterations: 64,
            divergence_radius: 2.0,
            recurrence: Recurrence::Mandelbrot,
        }
    }
}

impl EscapeConfig {
    pub fn new(max_iterations: u32, divergence_radius: f64) -> Self {
        EscapeConfig { max_iterations, divergence_radius, recurrence: Recurrence::Mandelbrot }
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let r = self.divergence_radius;
        if !r.is_finite() || r <= 0.0 {
            return Err(FieldError::InvalidConfig(format!(
                "divergence radius must be a positive finite number, got {}", r
            )));
        }
        if let Recurrence::Julia { re, im } = self.recurrence {
            if !C::new(re, im).is_finite() {
                return Err(FieldError::InvalidConfig(format!(
                    "julia constant must be finite, got {} + {}i", re, im
                )));
            }
        }
        Ok(())
    }
}

/// Iterations taken before `point` escapes, or `max_iterations` if it never does.
pub fn evaluate(point: GridPoint, cfg: &EscapeConfig) -> Result<u32> {
    cfg.validate()?;
    Ok(escape_time(point, cfg))
}

/// Escape threshold. Squared magnitude against squared radius, unless the
/// squared radius overflows; then the true modulus for every point alike.
#[derive(Clone, Copy, Debug)]
struct Threshold {
    radius: f64,
    radius_sq: f64,
}

impl Threshold {
    fn new(radius: f64) -> Self {
        Threshold { radius, radius_sq: radius * radius }
    }

    fn exceeded_by(&self, z: C) -> bool {
        if self.radius_sq.is_finite() {
            z.abs_sq() > self.radius_sq
        } else {
            z.abs() > self.radius
        }
    }
}

/// Unchecked kernel; `cfg` must already be validated.
pub(crate) fn escape_time(point: GridPoint, cfg: &EscapeConfig) -> u32 {
    let threshold = Threshold::new(cfg.divergence_radius);
    match cfg.recurrence {
        Recurrence::Mandelbrot => {
            let c = point.to_c();
            complex_escapes(c, c, threshold, cfg.max_iterations)
        }
        Recurrence::Julia { re, im } => {
            complex_escapes(point.to_c(), C::new(re, im), threshold, cfg.max_iterations)
        }
        Recurrence::Real => real_escapes(point.x, threshold, cfg.max_iterations),
    }
}

fn complex_escapes(z0: C, c: C, threshold: Threshold, max_iter: u32) -> u32 {
    let mut z = z0;
    for i in 0..max_iter {
        if threshold.exceeded_by(z) { return i; }
        z = z.mul(z).add(c);
    }
    max_iter
}

fn real_escapes(c: f64, threshold: Threshold, max_iter: u32) -> u32 {
    let mut x = c;
    for i in 0..max_iter {
        if threshold.exceeded_by(C::new(x, 0.0)) { return i; }
        x = x * x + c;
    }
    max_iter
}
