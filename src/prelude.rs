//! Includes commonly used library components.

pub use crate::{
    run_scenario,
    Error,
    RunDescriptor,
    SaveSettings,
    SaveType,
    Scenario,
    Simulation,
    SimulationDescriptor,
};
pub use crate::fdtd::{
    Grid2D,
    GridDescriptor,
    HistoryMode,
    RickerWavelet,
    Scatterer,
    TfsfBounds,
};
pub use crate::fdtd::scatterers::{CornerReflector, Disk, Plate};
