use crate::fdtd::{Grid2D, Scatterer};
use crate::{Error, Result};

use super::make_pec;

/// Two conducting diagonal arms meeting to the right of the grid centre,
/// opening toward the left.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CornerReflector {
    /// Extent of the arms as a fraction of the distance from the grid edge to
    /// its centre. Must lie in `(0, 1)`.
    pub span: f64,
}

impl Default for CornerReflector {
    fn default() -> Self {
        Self { span: 0.5 }
    }
}

impl Scatterer for CornerReflector {
    fn name(&self) -> &'static str {
        "corner reflector"
    }

    fn embed(&self, grid: &mut Grid2D) -> Result<usize> {
        if !(self.span > 0.0 && self.span < 1.0) {
            return Err(Error::BadScatterer {
                shape: self.name(),
                reason: format!("span {} is not between 0 and 1", self.span),
            });
        }

        let x_center = grid.size_x() / 2;
        let y_center = grid.size_y() / 2;
        let x_end = (x_center as f64 * (1.0 + self.span)) as usize;
        let mut nn_low = (y_center as f64 * (1.0 - self.span)) as usize;
        let mut nn_high = (y_center as f64 * (1.0 + self.span)) as usize;

        // the arms step one cell toward the centre line per column until they meet
        let mut cells = 0;
        for mm in x_center..=x_end {
            if nn_low > y_center {
                break;
            }
            cells += make_pec(grid, mm, nn_low) as usize;
            cells += make_pec(grid, mm, nn_high) as usize;
            nn_low += 1;
            nn_high = nn_high.saturating_sub(1);
        }
        Ok(cells)
    }
}
