use ndarray::{Array1, Ix1};

use crate::fdtd::{Grid2D, IMP0};
use crate::storage;
use crate::Result;

/// Depth of the lossy layer appended to the end of a `Grid1D`, in cells.
pub const LOSS_LAYER_DEPTH: usize = 20;
/// Loss factor reached at the far end of the lossy layer.
pub const MAX_LOSS: f64 = 0.35;

/// A 1D grid carrying the incident plane wave for a TFSF boundary.
///
/// Node `m` lines up with column `m` of the 2D grid it was created from. The
/// last `LOSS_LAYER_DEPTH` cells are a graded lossy layer so the incident wave
/// leaves the grid without reflecting.
pub struct Grid1D {
    pub(crate) hy: Array1<f64>,
    pub(crate) chyh: Array1<f64>,
    pub(crate) chye: Array1<f64>,

    pub(crate) ez: Array1<f64>,
    pub(crate) ceze: Array1<f64>,
    pub(crate) cezh: Array1<f64>,

    size_x: usize,
    pub(crate) time: usize,
    max_time: usize,
    cdtds: f64,
}

impl Grid1D {
    /// Creates the incident grid for `grid`, copying its time and Courant number.
    pub fn new(grid: &Grid2D) -> Result<Self> {
        let size_x = grid.size_x() + LOSS_LAYER_DEPTH;
        let cdtds = grid.courant_number();

        let mut chyh = storage::zeros("Chyh (1D)", Ix1(size_x - 1))?;
        let mut chye = storage::zeros("Chye (1D)", Ix1(size_x - 1))?;
        let mut ceze = storage::zeros("Ceze (1D)", Ix1(size_x))?;
        let mut cezh = storage::zeros("Cezh (1D)", Ix1(size_x))?;

        // the final electric node is never updated and keeps zero coefficients
        let layer_start = size_x - 1 - LOSS_LAYER_DEPTH;
        for mm in 0..(size_x - 1) {
            if mm < layer_start {
                ceze[mm] = 1.0;
                cezh[mm] = cdtds * IMP0;
                chyh[mm] = 1.0;
                chye[mm] = cdtds / IMP0;
            } else {
                let mut depth_in_layer = (mm - layer_start) as f64 + 0.5;
                let loss = loss_factor(depth_in_layer);
                ceze[mm] = (1.0 - loss) / (1.0 + loss);
                cezh[mm] = cdtds * IMP0 / (1.0 + loss);

                depth_in_layer += 0.5;
                let loss = loss_factor(depth_in_layer);
                chyh[mm] = (1.0 - loss) / (1.0 + loss);
                chye[mm] = cdtds / IMP0 / (1.0 + loss);
            }
        }
        log::debug!(
            "incident grid: {} cells, lossy layer of {} cells from node {} (max loss {})",
            size_x, LOSS_LAYER_DEPTH, layer_start, MAX_LOSS,
        );

        Ok(Self {
            hy: storage::zeros("Hy (1D)", Ix1(size_x - 1))?,
            chyh,
            chye,
            ez: storage::zeros("Ez (1D)", Ix1(size_x))?,
            ceze,
            cezh,
            size_x,
            time: grid.time(),
            max_time: grid.max_time(),
            cdtds,
        })
    }

    #[inline]
    pub fn size_x(&self) -> usize {
        self.size_x
    }
    #[inline]
    pub fn time(&self) -> usize {
        self.time
    }
    #[inline]
    pub fn max_time(&self) -> usize {
        self.max_time
    }
    #[inline]
    pub fn courant_number(&self) -> f64 {
        self.cdtds
    }
    #[inline]
    pub fn ez(&self) -> &Array1<f64> {
        &self.ez
    }
    #[inline]
    pub fn hy(&self) -> &Array1<f64> {
        &self.hy
    }
    #[inline]
    pub fn ceze(&self) -> &Array1<f64> {
        &self.ceze
    }
    #[inline]
    pub fn chyh(&self) -> &Array1<f64> {
        &self.chyh
    }
}

/// Quadratic loss profile across the layer.
#[inline]
fn loss_factor(depth_in_layer: f64) -> f64 {
    MAX_LOSS * (depth_in_layer / LOSS_LAYER_DEPTH as f64).powi(2)
}
