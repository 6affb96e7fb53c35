use crate::fdtd::{Grid2D, Scatterer};
use crate::{Error, Result};

use super::make_pec;

/// A vertical conducting plate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Plate {
    /// Column the plate occupies, counted from the left edge.
    pub column: usize,
    /// Cells left clear between the bottom edge and the plate.
    pub bottom_margin: usize,
    /// Cells left clear between the plate and the top edge.
    pub top_margin: usize,
}

impl Default for Plate {
    fn default() -> Self {
        Self {
            column: 20,
            bottom_margin: 20,
            top_margin: 20,
        }
    }
}

impl Scatterer for Plate {
    fn name(&self) -> &'static str {
        "plate"
    }

    fn embed(&self, grid: &mut Grid2D) -> Result<usize> {
        let (size_x, size_y) = (grid.size_x(), grid.size_y());
        if self.column >= size_x {
            return Err(Error::BadScatterer {
                shape: self.name(),
                reason: format!("column {} is outside a grid {} cells wide", self.column, size_x),
            });
        }
        if self.bottom_margin + self.top_margin >= size_y {
            return Err(Error::BadScatterer {
                shape: self.name(),
                reason: format!(
                    "margins {} + {} leave no plate in a grid {} cells tall",
                    self.bottom_margin, self.top_margin, size_y,
                ),
            });
        }

        let cells = (self.bottom_margin..(size_y - self.top_margin))
            .filter(|&nn| make_pec(grid, self.column, nn))
            .count();
        Ok(cells)
    }
}
