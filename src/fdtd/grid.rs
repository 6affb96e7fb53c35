use ndarray::{Array2, Array3, ArrayView2, ArrayViewMut2, Axis, Ix2, Ix3};

use crate::storage;
use crate::{Error, Result};

/// Characteristic impedance of free space used throughout the grid [Ω].
pub const IMP0: f64 = 377.0;

/// Smallest grid edge the stencils and the absorbing boundary can work with.
pub const MIN_SIZE: usize = 3;

/// Courant number of the 2D scheme, fixed at the stability limit `1/√2`.
#[inline]
pub fn courant_number() -> f64 {
    1.0 / 2f64.sqrt()
}

/// How many time slices of `Ez` a grid keeps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// Keep every slice from `0` to `max_time - 1` for later inspection.
    #[default]
    Full,
    /// Keep only the current and previous slices.
    Rolling,
}

/// Describes the shape and duration of a `Grid2D`.
#[derive(Copy, Clone, Debug)]
pub struct GridDescriptor {
    /// Number of cells along x.
    pub size_x: usize,
    /// Number of cells along y.
    pub size_y: usize,
    /// Number of time slices in a run, including the all-zero slice at `time = 0`.
    pub max_time: usize,
    /// How much of the electric field history to retain.
    pub history: HistoryMode,
}

impl GridDescriptor {
    /// A grid keeping its full electric field history.
    pub fn new(size_x: usize, size_y: usize, max_time: usize) -> Self {
        Self {
            size_x,
            size_y,
            max_time,
            history: HistoryMode::Full,
        }
    }
}

/// Time-indexed storage for `Ez`.
pub(crate) struct ElectricHistory {
    slices: Array3<f64>,
    mode: HistoryMode,
}

impl ElectricHistory {
    fn new(mode: HistoryMode, max_time: usize, size_x: usize, size_y: usize) -> Result<Self> {
        let depth = match mode {
            HistoryMode::Full => max_time,
            HistoryMode::Rolling => 2,
        };

        Ok(Self {
            slices: storage::zeros("Ez", Ix3(depth, size_x, size_y))?,
            mode,
        })
    }

    #[inline]
    fn slot(&self, time: usize) -> usize {
        match self.mode {
            HistoryMode::Full => time,
            HistoryMode::Rolling => time % 2,
        }
    }

    #[inline]
    pub(crate) fn slice(&self, time: usize) -> ArrayView2<f64> {
        self.slices.index_axis(Axis(0), self.slot(time))
    }

    #[inline]
    pub(crate) fn slice_mut(&mut self, time: usize) -> ArrayViewMut2<f64> {
        let slot = self.slot(time);
        self.slices.index_axis_mut(Axis(0), slot)
    }

    /// Splits out the slices at `time - 1` and `time`.
    pub(crate) fn split(&mut self, time: usize) -> (ArrayViewMut2<f64>, ArrayViewMut2<f64>) {
        let prev = self.slot(time - 1);
        let cur = self.slot(time);

        if prev < cur {
            let (before, after) = self.slices.view_mut().split_at(Axis(0), cur);
            (
                before.index_axis_move(Axis(0), prev),
                after.index_axis_move(Axis(0), 0),
            )
        } else {
            let (before, after) = self.slices.view_mut().split_at(Axis(0), prev);
            (
                after.index_axis_move(Axis(0), 0),
                before.index_axis_move(Axis(0), cur),
            )
        }
    }

    /// Prepares the slot for `time` before any update writes to it.
    ///
    /// A rolling slot still holds the field from `time - 2`; it is cleared so
    /// edge cells read before the boundary pass match a fresh full-history slice.
    fn begin(&mut self, time: usize) {
        if self.mode == HistoryMode::Rolling {
            self.slice_mut(time).fill(0.0);
        }
    }

    fn stored(&self) -> &Array3<f64> {
        &self.slices
    }
}

/// The 2D TMz grid: `Hx`, `Hy` and the time history of `Ez`, plus update coefficients.
///
/// Indexing is `[m, n]` with `m` along x and `n` along y. `Hx` is
/// `size_x × (size_y - 1)`, `Hy` is `(size_x - 1) × size_y` and `Ez` slices are
/// `size_x × size_y`.
pub struct Grid2D {
    pub(crate) hx: Array2<f64>,
    pub(crate) chxh: Array2<f64>,
    pub(crate) chxe: Array2<f64>,

    pub(crate) hy: Array2<f64>,
    pub(crate) chyh: Array2<f64>,
    pub(crate) chye: Array2<f64>,

    pub(crate) ez: ElectricHistory,
    pub(crate) ceze: Array2<f64>,
    pub(crate) cezh: Array2<f64>,

    size_x: usize,
    size_y: usize,
    pub(crate) time: usize,
    max_time: usize,
    cdtds: f64,
}

impl Grid2D {
    /// Creates a grid filled with a uniform lossless medium and no field.
    pub fn new(desc: GridDescriptor) -> Result<Self> {
        let GridDescriptor { size_x, size_y, max_time, history } = desc;
        if size_x < MIN_SIZE || size_y < MIN_SIZE {
            return Err(Error::BadDimensions {
                size_x,
                size_y,
                minimum: MIN_SIZE,
            });
        }
        if max_time == 0 {
            return Err(Error::BadDuration { max_time });
        }

        let cdtds = courant_number();
        let hx_dim = Ix2(size_x, size_y - 1);
        let hy_dim = Ix2(size_x - 1, size_y);
        let ez_dim = Ix2(size_x, size_y);

        Ok(Self {
            hx: storage::zeros("Hx", hx_dim)?,
            chxh: storage::filled("Chxh", hx_dim, 1.0)?,
            chxe: storage::filled("Chxe", hx_dim, cdtds / IMP0)?,

            hy: storage::zeros("Hy", hy_dim)?,
            chyh: storage::filled("Chyh", hy_dim, 1.0)?,
            chye: storage::filled("Chye", hy_dim, cdtds / IMP0)?,

            ez: ElectricHistory::new(history, max_time, size_x, size_y)?,
            ceze: storage::filled("Ceze", ez_dim, 1.0)?,
            cezh: storage::filled("Cezh", ez_dim, cdtds * IMP0)?,

            size_x,
            size_y,
            time: 0,
            max_time,
            cdtds,
        })
    }

    /// Moves to the next time step.
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.time + 1 < self.max_time);
        self.time += 1;
        self.ez.begin(self.time);
    }

    #[inline]
    pub fn size_x(&self) -> usize {
        self.size_x
    }
    #[inline]
    pub fn size_y(&self) -> usize {
        self.size_y
    }
    /// The index of the most recently computed time slice.
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
    pub fn history_mode(&self) -> HistoryMode {
        self.ez.mode
    }
    /// Whether the final time slice has been computed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.time + 1 == self.max_time
    }

    /// `Ez` at `time`, if that slice is still retained.
    pub fn ez_at(&self, time: usize) -> Option<ArrayView2<f64>> {
        let retained = match self.ez.mode {
            HistoryMode::Full => time < self.max_time,
            HistoryMode::Rolling => time <= self.time && self.time - time <= 1,
        };
        retained.then(|| self.ez.slice(time))
    }

    /// `Ez` at the current time.
    pub fn ez_current(&self) -> ArrayView2<f64> {
        self.ez.slice(self.time)
    }

    /// Every stored `Ez` slice, oldest slot first.
    ///
    /// In rolling mode the two slots are ordered by `time % 2`, not by age.
    pub fn ez_history(&self) -> &Array3<f64> {
        self.ez.stored()
    }

    #[inline]
    pub fn hx(&self) -> &Array2<f64> {
        &self.hx
    }
    #[inline]
    pub fn hy(&self) -> &Array2<f64> {
        &self.hy
    }
    #[inline]
    pub fn chxh(&self) -> &Array2<f64> {
        &self.chxh
    }
    #[inline]
    pub fn chxe(&self) -> &Array2<f64> {
        &self.chxe
    }
    #[inline]
    pub fn chyh(&self) -> &Array2<f64> {
        &self.chyh
    }
    #[inline]
    pub fn chye(&self) -> &Array2<f64> {
        &self.chye
    }
    #[inline]
    pub fn ceze(&self) -> &Array2<f64> {
        &self.ceze
    }
    #[inline]
    pub fn cezh(&self) -> &Array2<f64> {
        &self.cezh
    }
}
