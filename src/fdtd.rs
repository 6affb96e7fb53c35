pub mod scatterers;

pub(crate) mod update;

mod abc;
mod grid;
mod grid1d;
mod source;
mod tfsf;

pub use abc::{MurAbc, MurCoefficients};
pub use grid::{courant_number, Grid2D, GridDescriptor, HistoryMode, IMP0, MIN_SIZE};
pub use grid1d::{Grid1D, LOSS_LAYER_DEPTH, MAX_LOSS};
pub use source::{RickerWavelet, PPW};
pub use tfsf::{Tfsf, TfsfBounds, DEFAULT_MARGIN};

use crate::Result;

/// A perfect electric conductor embedded in a `Grid2D`.
///
/// Embedding zeroes `Ceze` and `Cezh` over the shape and touches nothing else.
/// It must happen before the absorbing boundary and TFSF source are created.
pub trait Scatterer {
    fn name(&self) -> &'static str;

    /// Writes the shape into `grid`, returning the number of cells made conducting.
    fn embed(&self, grid: &mut Grid2D) -> Result<usize>;
}
