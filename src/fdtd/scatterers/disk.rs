use crate::fdtd::{Grid2D, Scatterer};
use crate::{Error, Result};

use super::make_pec;

/// A conducting disk (a circular cylinder in 3D).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Disk {
    /// Cells strictly closer than this to the centre are conducting.
    pub radius: usize,
    /// Centre cell; the grid centre when `None`.
    pub center: Option<(usize, usize)>,
}

impl Default for Disk {
    fn default() -> Self {
        Self {
            radius: 12,
            center: None,
        }
    }
}

impl Scatterer for Disk {
    fn name(&self) -> &'static str {
        "disk"
    }

    fn embed(&self, grid: &mut Grid2D) -> Result<usize> {
        let (size_x, size_y) = (grid.size_x(), grid.size_y());
        let (x_center, y_center) = self.center.unwrap_or((size_x / 2, size_y / 2));
        if x_center >= size_x || y_center >= size_y {
            return Err(Error::BadScatterer {
                shape: self.name(),
                reason: format!(
                    "centre ({}, {}) is outside a {} x {} grid",
                    x_center, y_center, size_x, size_y,
                ),
            });
        }
        if self.radius == 0 {
            return Err(Error::BadScatterer {
                shape: self.name(),
                reason: "radius must be positive".to_string(),
            });
        }

        let radius_sq = (self.radius * self.radius) as i64;
        let mut cells = 0;
        for mm in 1..(size_x - 1) {
            let dx = mm as i64 - x_center as i64;
            for nn in 1..(size_y - 1) {
                let dy = nn as i64 - y_center as i64;
                if dx * dx + dy * dy < radius_sq && make_pec(grid, mm, nn) {
                    cells += 1;
                }
            }
        }
        Ok(cells)
    }
}
