use ndarray::{Array3, Ix3};

use crate::fdtd::Grid2D;
use crate::storage;
use crate::{Error, Result};

/// Coefficients of the second-order Mur recurrence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MurCoefficients {
    pub coef0: f64,
    pub coef1: f64,
    pub coef2: f64,
}

impl MurCoefficients {
    /// Derives the coefficients from the medium's update coefficients at one cell.
    pub fn from_medium(cezh: f64, chye: f64) -> Self {
        let temp1 = (cezh * chye).sqrt();
        let temp2 = 1.0 / temp1 + 2.0 + temp1;

        Self {
            coef0: -(1.0 / temp1 - 2.0 + temp1) / temp2,
            coef1: -2.0 * (temp1 - 1.0 / temp1) / temp2,
            coef2: 4.0 * (temp1 + 1.0 / temp1) / temp2,
        }
    }

    /// Edge field from the current fields one and two cells in, and the
    /// history stored for position `k`.
    #[inline]
    fn next_edge_value(&self, history: &Array3<f64>, k: usize, ez1: f64, ez2: f64) -> f64 {
        let old = |age: usize, depth: usize| history[[k, age, depth]];

        self.coef0 * (ez2 + old(1, 0))
            + self.coef1 * (old(0, 0) + old(0, 2) - ez1 - old(1, 1))
            + self.coef2 * old(0, 1)
            - old(1, 2)
    }
}

/// Second-order Mur absorbing boundary on all four edges of a `Grid2D`.
///
/// Each edge keeps, for every cell along it, the field `0`, `1` and `2` cells
/// in from the edge at the previous two time steps. The buffers are indexed
/// `[position along edge, age, depth]` with age `0` the most recent step.
pub struct MurAbc {
    coefs: MurCoefficients,
    left: Array3<f64>,
    right: Array3<f64>,
    top: Array3<f64>,
    bottom: Array3<f64>,
}

impl MurAbc {
    /// Allocates the edge history for `grid` and derives the coefficients from
    /// its medium at cell `(0, 0)`.
    ///
    /// Must be created after any scatterer has been embedded. Fails if the
    /// reference cell is conducting, which leaves the recurrence undefined.
    pub fn new(grid: &Grid2D) -> Result<Self> {
        let (cezh, chye) = (grid.cezh()[[0, 0]], grid.chye()[[0, 0]]);
        if !(cezh * chye > 0.0) {
            return Err(Error::BadBoundaryMedium { cezh, chye });
        }

        let coefs = MurCoefficients::from_medium(cezh, chye);
        log::debug!(
            "mur coefficients: {:.6e}, {:.6e}, {:.6e}",
            coefs.coef0, coefs.coef1, coefs.coef2,
        );

        Ok(Self {
            coefs,
            left: storage::zeros("ABC left", Ix3(grid.size_y(), 2, 3))?,
            right: storage::zeros("ABC right", Ix3(grid.size_y(), 2, 3))?,
            top: storage::zeros("ABC top", Ix3(grid.size_x(), 2, 3))?,
            bottom: storage::zeros("ABC bottom", Ix3(grid.size_x(), 2, 3))?,
        })
    }

    #[inline]
    pub fn coefficients(&self) -> MurCoefficients {
        self.coefs
    }

    /// Sets the edge cells of the current `Ez` slice.
    ///
    /// Runs after the interior electric update. Edges are processed left,
    /// right, bottom, top; each corner is written by two passes and keeps the
    /// value of the later one.
    pub(crate) fn apply(&mut self, grid: &mut Grid2D) {
        let (size_x, size_y) = (grid.size_x(), grid.size_y());
        let time = grid.time();
        if time == 0 {
            return;
        }
        let mut ez = grid.ez.slice_mut(time);
        let coefs = self.coefs;

        // left
        for nn in 0..size_y {
            ez[[0, nn]] = coefs.next_edge_value(&self.left, nn, ez[[1, nn]], ez[[2, nn]]);
            remember(&mut self.left, nn, [ez[[0, nn]], ez[[1, nn]], ez[[2, nn]]]);
        }

        // right
        let (m0, m1, m2) = (size_x - 1, size_x - 2, size_x - 3);
        for nn in 0..size_y {
            ez[[m0, nn]] = coefs.next_edge_value(&self.right, nn, ez[[m1, nn]], ez[[m2, nn]]);
            remember(&mut self.right, nn, [ez[[m0, nn]], ez[[m1, nn]], ez[[m2, nn]]]);
        }

        // bottom
        for mm in 0..size_x {
            ez[[mm, 0]] = coefs.next_edge_value(&self.bottom, mm, ez[[mm, 1]], ez[[mm, 2]]);
            remember(&mut self.bottom, mm, [ez[[mm, 0]], ez[[mm, 1]], ez[[mm, 2]]]);
        }

        // top
        let (n0, n1, n2) = (size_y - 1, size_y - 2, size_y - 3);
        for mm in 0..size_x {
            ez[[mm, n0]] = coefs.next_edge_value(&self.top, mm, ez[[mm, n1]], ez[[mm, n2]]);
            remember(&mut self.top, mm, [ez[[mm, n0]], ez[[mm, n1]], ez[[mm, n2]]]);
        }
    }
}

/// Ages the stored fields at position `k` and records the latest ones.
#[inline]
fn remember(edge: &mut Array3<f64>, k: usize, latest: [f64; 3]) {
    for (depth, value) in latest.into_iter().enumerate() {
        edge[[k, 1, depth]] = edge[[k, 0, depth]];
        edge[[k, 0, depth]] = value;
    }
}
