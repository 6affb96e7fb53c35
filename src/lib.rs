//! A framework for simulating 2-dimensional TMz electromagnetic scattering with FDTD.
//!
//! A [`Simulation`] owns one [`fdtd::Grid2D`] and drives it through a chosen
//! [`Scenario`]: a hard Ricker source, or a total-field/scattered-field plane wave
//! optionally striking a perfectly conducting scatterer. Open boundaries are
//! modelled with a second-order Mur absorbing boundary condition.
//!
//! To get started, refer to the `demos` directory in the main repository.

mod simulation;
mod storage;

pub mod fdtd;
pub mod prelude;

pub use simulation::{
    run_scenario, RunDescriptor, SaveSettings, SaveType, Scenario, Simulation,
    SimulationDescriptor,
};

/// Represents an error in the simulation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Grid of {size_x} x {size_y} cells is too small \
        ( minimum size: {minimum} x {minimum} )")]
    BadDimensions {
        size_x: usize,
        size_y: usize,
        minimum: usize,
    },
    #[error("Simulation must run for at least one time step ( max_time: {max_time} )")]
    BadDuration {
        max_time: usize,
    },
    #[error("Allocation failed for {array_name} ( {len} elements )")]
    Allocation {
        array_name: String,
        len: usize,
    },
    #[error("Total field region ({first_x}, {first_y}) - ({last_x}, {last_y}) \
        does not fit strictly inside a {size_x} x {size_y} grid")]
    BadTfsfBounds {
        first_x: usize,
        first_y: usize,
        last_x: usize,
        last_y: usize,
        size_x: usize,
        size_y: usize,
    },
    #[error("Scatterer {shape} does not fit the grid: {reason}")]
    BadScatterer {
        shape: &'static str,
        reason: String,
    },
    #[error("Absorbing boundary needs a lossless dielectric at cell (0, 0) \
        ( Cezh: {cezh}, Chye: {chye} )")]
    BadBoundaryMedium {
        cezh: f64,
        chye: f64,
    },
    #[error(transparent)]
    H5Error(#[from] hdf5::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
