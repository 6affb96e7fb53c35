use crate::fdtd::{update, Grid1D, Grid2D, RickerWavelet};
use crate::{Error, Result};

/// Default gap between the total-field region and the grid edge, in cells.
pub const DEFAULT_MARGIN: usize = 5;

/// Inclusive corners of the total-field region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TfsfBounds {
    pub first_x: usize,
    pub first_y: usize,
    pub last_x: usize,
    pub last_y: usize,
}

impl TfsfBounds {
    /// A region leaving `margin` cells of scattered field on every side.
    pub fn with_margin(size_x: usize, size_y: usize, margin: usize) -> Self {
        Self {
            first_x: margin,
            first_y: margin,
            last_x: size_x.saturating_sub(margin + 1),
            last_y: size_y.saturating_sub(margin + 1),
        }
    }

    /// Checks the region has a scattered-field cell on every side and is not inverted.
    pub fn validate(&self, size_x: usize, size_y: usize) -> Result<()> {
        let fits = self.first_x > 0
            && self.first_y > 0
            && self.first_x <= self.last_x
            && self.first_y <= self.last_y
            && self.last_x + 1 < size_x
            && self.last_y + 1 < size_y;

        if fits {
            Ok(())
        } else {
            Err(Error::BadTfsfBounds {
                first_x: self.first_x,
                first_y: self.first_y,
                last_x: self.last_x,
                last_y: self.last_y,
                size_x,
                size_y,
            })
        }
    }
}

/// Total-field/scattered-field plane wave source travelling in +x.
///
/// Inside the bounds the 2D grid holds the total field and outside it only the
/// scattered field. The incident field comes from a `Grid1D` advanced in lockstep.
pub struct Tfsf {
    bounds: TfsfBounds,
    incident: Grid1D,
    wavelet: RickerWavelet,
}

impl Tfsf {
    /// Validates `bounds` against `grid` and creates its incident grid.
    pub fn new(grid: &Grid2D, bounds: TfsfBounds, wavelet: RickerWavelet) -> Result<Self> {
        bounds.validate(grid.size_x(), grid.size_y())?;
        log::debug!(
            "total field region ({}, {}) - ({}, {})",
            bounds.first_x, bounds.first_y, bounds.last_x, bounds.last_y,
        );

        Ok(Self {
            bounds,
            incident: Grid1D::new(grid)?,
            wavelet,
        })
    }

    #[inline]
    pub fn bounds(&self) -> TfsfBounds {
        self.bounds
    }

    #[inline]
    pub fn incident(&self) -> &Grid1D {
        &self.incident
    }

    /// Applies the boundary corrections for one time step.
    ///
    /// Runs after the 2D magnetic update and before the 2D electric update.
    /// Corrects `H` on the four edges from the incident `Ez`, advances the
    /// incident grid, then corrects `Ez` on the left and right edges from the
    /// new incident `Hy`. Incident `Hx` is zero, so the top and bottom `Ez`
    /// need no correction.
    pub(crate) fn apply(&mut self, grid: &mut Grid2D) {
        if grid.time() == 0 {
            return;
        }
        let TfsfBounds { first_x, first_y, last_x, last_y } = self.bounds;
        let ez1 = &self.incident.ez;

        // Hy along left and right
        for nn in first_y..=last_y {
            grid.hy[[first_x - 1, nn]] -= grid.chye[[first_x - 1, nn]] * ez1[first_x];
            grid.hy[[last_x, nn]] += grid.chye[[last_x, nn]] * ez1[last_x];
        }

        // Hx along bottom and top
        for mm in first_x..=last_x {
            grid.hx[[mm, first_y - 1]] += grid.chxe[[mm, first_y - 1]] * ez1[mm];
            grid.hx[[mm, last_y]] -= grid.chxe[[mm, last_y]] * ez1[mm];
        }

        self.advance_incident();

        // the next interior update reads this slice
        let hy1 = &self.incident.hy;
        let time = grid.time();
        let mut ez = grid.ez.slice_mut(time - 1);
        for nn in first_y..=last_y {
            ez[[first_x, nn]] -= grid.cezh[[first_x, nn]] * hy1[first_x - 1];
            ez[[last_x, nn]] += grid.cezh[[last_x, nn]] * hy1[last_x];
        }
    }

    fn advance_incident(&mut self) {
        let g1 = &mut self.incident;
        update::update_magnetic_1d(g1);
        update::update_electric_1d(g1);
        g1.ez[0] = self.wavelet.generate(g1.courant_number(), g1.time, 0.0);
        g1.time += 1;
    }
}
