// Contour-level banding of an escape field, as a filled-contour plot sees it.

use crate::error::{FieldError, Result};
use crate::field::EscapeField;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContourLevels {
    levels: Vec<u32>,
}

impl ContourLevels {
    pub fn new(levels: Vec<u32>) -> Result<Self> {
        if levels.len() < 2 {
            return Err(FieldError::InvalidLevels(format!(
                "need at least two levels, got {}", levels.len()
            )));
        }
        if levels.windows(2).any(|w| w[0] >= w[1]) {
            return Err(FieldError::InvalidLevels(format!(
                "levels must be strictly increasing: {:?}", levels
            )));
        }
        Ok(ContourLevels { levels })
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn band_count(&self) -> usize {
        self.levels.len() - 1
    }

    /// Band 0 is `[l0, l1]`, band i is `(li, li+1]`; anything outside is unfilled.
    pub fn band_of(&self, value: u32) -> Option<usize> {
        let first = self.levels[0];
        let last = self.levels[self.levels.len() - 1];
        if value < first || value > last {
            return None;
        }
        if value == first {
            return Some(0);
        }
        // First upper bound >= value.
        let upper = self.levels.partition_point(|&l| l < value);
        Some(upper - 1)
    }

    /// Band per cell, row-major like the field.
    pub fn band_field(&self, field: &EscapeField) -> Vec<Option<usize>> {
        field.cells().iter().map(|&v| self.band_of(v)).collect()
    }
}
