use std::time::Instant;

use tracing::debug;

use crate::axis::{AxisSpec, SampledAxis};
use crate::error::Result;
use crate::fractal::{EscapeConfig, GridPoint, escape_time};

/// Dense escape-time grid, row-major, indexed `[row][col] = [y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapeField {
    rows: usize,
    cols: usize,
    max_iterations: u32,
    cells: Vec<u32>,
}

impl EscapeField {
    /// (rows, cols) = (y samples, x samples).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.cols)
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Count of cells per iteration value, up to the largest value present.
    pub fn histogram(&self) -> Vec<usize> {
        let top = self.cells.iter().copied().max().unwrap_or(0);
        let mut counts = vec![0usize; top as usize + 1];
        for &v in &self.cells {
            counts[v as usize] += 1;
        }
        counts
    }

    /// Cells that hit the iteration cap without escaping.
    pub fn bounded_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == self.max_iterations).count()
    }
}

/// Evaluate every (x, y) pair of the two axes.
///
/// The config is checked once up front, so an invalid config never yields a
/// partially filled field.
pub fn assemble(x_axis: &SampledAxis, y_axis: &SampledAxis, cfg: &EscapeConfig) -> Result<EscapeField> {
    cfg.validate()?;

    let rows = y_axis.len();
    let cols = x_axis.len();
    debug!(rows, cols, max_iterations = cfg.max_iterations, "assembling escape field");
    let started = Instant::now();

    let mut cells = Vec::with_capacity(rows * cols);
    for y in y_axis.iter() {
        for x in x_axis.iter() {
            cells.push(escape_time(GridPoint::new(x, y), cfg));
        }
    }

    debug!(cells = cells.len(), elapsed_ms = started.elapsed().as_millis() as u64, "escape field complete");

    Ok(EscapeField { rows, cols, max_iterations: cfg.max_iterations, cells })
}

/// A field together with the axes it was sampled on.
#[derive(Clone, Debug, PartialEq)]
pub struct EscapeSurface {
    pub x: SampledAxis,
    pub y: SampledAxis,
    pub field: EscapeField,
}

impl EscapeSurface {
    /// Coordinates of cell `[row][col]`.
    pub fn point(&self, row: usize, col: usize) -> Option<GridPoint> {
        Some(GridPoint::new(self.x.get(col)?, self.y.get(row)?))
    }
}

/// Build both axes and the field; all input is validated before any point is evaluated.
pub fn generate(x: AxisSpec, y: AxisSpec, cfg: &EscapeConfig) -> Result<EscapeSurface> {
    cfg.validate()?;
    let x = SampledAxis::build(x)?;
    let y = SampledAxis::build(y)?;
    let field = assemble(&x, &y, cfg)?;
    Ok(EscapeSurface { x, y, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::fractal::evaluate;

    fn axes() -> (SampledAxis, SampledAxis) {
        let x = SampledAxis::build(AxisSpec::new(-2.0, 1.0, 4)).unwrap();
        let y = SampledAxis::build(AxisSpec::new(-1.0, 1.0, 3)).unwrap();
        (x, y)
    }

    #[test]
    fn test_shape_is_y_by_x() {
        let (x, y) = axes();
        let field = assemble(&x, &y, &EscapeConfig::new(32, 2.0)).unwrap();
        assert_eq!(field.shape(), (3, 4));
        assert_eq!(field.rows().count(), 3);
        assert!(field.rows().all(|r| r.len() == 4));
    }

    #[test]
    fn test_cells_match_evaluator() {
        let (x, y) = axes();
        let cfg = EscapeConfig::new(32, 2.0);
        let field = assemble(&x, &y, &cfg).unwrap();
        for (r, yv) in y.iter().enumerate() {
            for (c, xv) in x.iter().enumerate() {
                let expected = evaluate(GridPoint::new(xv, yv), &cfg).unwrap();
                assert_eq!(field.get(r, c), Some(expected));
            }
        }
    }

    #[test]
    fn test_row_is_y_column_is_x() {
        let x = SampledAxis::build(AxisSpec::new(0.0, 3.0, 2)).unwrap();
        let y = SampledAxis::build(AxisSpec::new(0.0, 0.0, 1)).unwrap();
        let field = assemble(&x, &y, &EscapeConfig::new(16, 2.0)).unwrap();
        // (0, 0) is bounded, (3, 0) escapes immediately.
        assert_eq!(field.row(0), Some(&[16, 0][..]));
    }

    #[test]
    fn test_deterministic() {
        let (x, y) = axes();
        let cfg = EscapeConfig::new(64, 2.0);
        assert_eq!(assemble(&x, &y, &cfg).unwrap(), assemble(&x, &y, &cfg).unwrap());
    }

    #[test]
    fn test_invalid_config_aborts() {
        let (x, y) = axes();
        let err = assemble(&x, &y, &EscapeConfig::new(8, 0.0)).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig(_)));
    }

    #[test]
    fn test_histogram_and_bounded() {
        let x = SampledAxis::build(AxisSpec::new(0.0, 3.0, 2)).unwrap();
        let y = SampledAxis::build(AxisSpec::new(0.0, 0.0, 2)).unwrap();
        let field = assemble(&x, &y, &EscapeConfig::new(5, 2.0)).unwrap();
        let hist = field.histogram();
        assert_eq!(hist.len(), 6);
        assert_eq!(hist[0], 2);
        assert_eq!(hist[5], 2);
        assert_eq!(field.bounded_count(), 2);
    }

    #[test]
    fn test_histogram_sized_by_observed_values() {
        // Both points start outside the radius, so the cap is never reached.
        let x = SampledAxis::build(AxisSpec::new(3.0, 4.0, 2)).unwrap();
        let y = SampledAxis::build(AxisSpec::new(0.0, 0.0, 1)).unwrap();
        let field = assemble(&x, &y, &EscapeConfig::new(u32::MAX, 2.0)).unwrap();
        assert_eq!(field.histogram(), vec![2]);
        assert_eq!(field.bounded_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let (x, y) = axes();
        let field = assemble(&x, &y, &EscapeConfig::new(4, 2.0)).unwrap();
        assert_eq!(field.get(3, 0), None);
        assert_eq!(field.get(0, 4), None);
        assert_eq!(field.row(3), None);
    }

    #[test]
    fn test_generate_rejects_bad_axis() {
        let err = generate(AxisSpec::new(1.0, 0.0, 4), AxisSpec::new(0.0, 1.0, 4), &EscapeConfig::default())
            .unwrap_err();
        assert!(matches!(err, FieldError::InvalidRange { .. }));
    }

    #[test]
    fn test_surface_point() {
        let surface = generate(AxisSpec::new(-2.0, 1.0, 4), AxisSpec::new(-1.0, 1.0, 3), &EscapeConfig::default())
            .unwrap();
        assert_eq!(surface.point(2, 0), Some(GridPoint::new(-2.0, 1.0)));
        assert_eq!(surface.point(3, 0), None);
    }
}
