use std::path::Path;

use ndarray::s;

use crate::fdtd::scatterers::{CornerReflector, Disk, Plate};
use crate::fdtd::{
    update, Grid2D, GridDescriptor, HistoryMode, MurAbc, RickerWavelet, Scatterer, Tfsf, TfsfBounds,
    DEFAULT_MARGIN,
};
use crate::Result;

/// The experiment a `Simulation` runs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scenario {
    /// A hard Ricker source at the grid centre with no absorbing boundary.
    Ricker,
    /// A TFSF plane wave in an empty, absorbing grid.
    TfsfPlaneWave,
    /// A TFSF plane wave striking a vertical plate.
    TfsfPlate(Plate),
    /// A TFSF plane wave striking a disk.
    TfsfDisk(Disk),
    /// A TFSF plane wave striking a corner reflector.
    TfsfCornerReflector(CornerReflector),
}

impl Scenario {
    /// Identifier used for output groups and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Ricker => "ricker",
            Scenario::TfsfPlaneWave => "tfsf",
            Scenario::TfsfPlate(_) => "tfsf_plate",
            Scenario::TfsfDisk(_) => "tfsf_disk",
            Scenario::TfsfCornerReflector(_) => "tfsf_corner_reflector",
        }
    }

    fn scatterer(&self) -> Option<&dyn Scatterer> {
        match self {
            Scenario::Ricker | Scenario::TfsfPlaneWave => None,
            Scenario::TfsfPlate(plate) => Some(plate),
            Scenario::TfsfDisk(disk) => Some(disk),
            Scenario::TfsfCornerReflector(corner) => Some(corner),
        }
    }

    fn uses_tfsf(&self) -> bool {
        !matches!(self, Scenario::Ricker)
    }
}

/// Describes a simulation.
#[derive(Copy, Clone, Debug)]
pub struct SimulationDescriptor {
    /// The shape, duration and history mode of the grid.
    pub grid: GridDescriptor,
    /// What to simulate.
    pub scenario: Scenario,
    /// The total-field region; a `DEFAULT_MARGIN` cell inset when `None`.
    /// Ignored by `Scenario::Ricker`.
    pub tfsf_bounds: Option<TfsfBounds>,
    /// The pulse injected by the source.
    pub wavelet: RickerWavelet,
}

impl SimulationDescriptor {
    /// A descriptor with default history, bounds and wavelet.
    pub fn new(size_x: usize, size_y: usize, max_time: usize, scenario: Scenario) -> Self {
        Self {
            grid: GridDescriptor::new(size_x, size_y, max_time),
            scenario,
            tfsf_bounds: None,
            wavelet: RickerWavelet::default(),
        }
    }
}

/// Describes a simulation run.
pub struct RunDescriptor<P: AsRef<Path>> {
    /// Whether or not to print information to the console.
    pub verbose: bool,
    /// What, if any, information to save to file.
    pub save_settings: Option<SaveSettings<P>>,
}

impl RunDescriptor<&'static str> {
    /// A run with no console output and nothing saved.
    pub fn quiet() -> Self {
        Self {
            verbose: false,
            save_settings: None,
        }
    }
}

/// How data should be saved to file.
#[derive(Debug)]
pub struct SaveSettings<P: AsRef<Path>> {
    /// The path to the save file.
    pub filename: P,
    /// What information to save.
    pub save_type: SaveType,
    /// Whether to truncate an existing file rather than add to it.
    pub overwrite: bool,
}

/// Represents what data to save.
#[derive(PartialEq, Debug)]
pub enum SaveType {
    /// Save every stored `Ez` slice, oldest first.
    Full,
    /// Save only the final `Ez` slice.
    Final,
}

/// The main `struct` of the framework.
pub struct Simulation {
    grid: Grid2D,
    scenario: Scenario,
    abc: Option<MurAbc>,
    tfsf: Option<Tfsf>,
    wavelet: RickerWavelet,
}

impl Simulation {
    /// Builds the grid and prepares the scenario.
    ///
    /// The scatterer, if any, is embedded first, then the absorbing boundary
    /// and the TFSF source are created from the resulting medium. Any invalid
    /// configuration is reported before a field value is written.
    pub fn new(desc: SimulationDescriptor) -> Result<Self> {
        let mut grid = Grid2D::new(desc.grid)?;
        let scenario = desc.scenario;

        let bounds = desc.tfsf_bounds.unwrap_or_else(|| {
            TfsfBounds::with_margin(grid.size_x(), grid.size_y(), DEFAULT_MARGIN)
        });
        if scenario.uses_tfsf() {
            bounds.validate(grid.size_x(), grid.size_y())?;
        }

        if let Some(scatterer) = scenario.scatterer() {
            let cells = scatterer.embed(&mut grid)?;
            log::debug!("embedded {} over {} cells", scatterer.name(), cells);
        }

        let (abc, tfsf) = if scenario.uses_tfsf() {
            let abc = MurAbc::new(&grid)?;
            let tfsf = Tfsf::new(&grid, bounds, desc.wavelet)?;
            (Some(abc), Some(tfsf))
        } else {
            (None, None)
        };

        log::info!(
            "{} scenario on a {} x {} grid for {} time steps",
            scenario.name(), grid.size_x(), grid.size_y(), grid.max_time(),
        );

        Ok(Self {
            grid,
            scenario,
            abc,
            tfsf,
            wavelet: desc.wavelet,
        })
    }

    /// Runs the remaining time steps.
    #[inline]
    pub fn run<P: AsRef<Path>>(&mut self, desc: RunDescriptor<P>) -> Result<()> {
        let nsteps = self.grid.max_time() - 1 - self.grid.time();

        // setup output if verbose
        let bar = if desc.verbose {
            println!("# of time steps: {}", nsteps);
            Some(indicatif::ProgressBar::new(nsteps as u64))
        } else {
            None
        };

        for _ in 0..nsteps {
            self.step();

            if let Some(ref bar) = bar {
                bar.inc(1)
            }
        }

        if let Some(ref bar) = bar {
            bar.finish();
        }
        log::info!("{} scenario finished at time step {}", self.scenario.name(), self.grid.time());

        if let Some(ref settings) = desc.save_settings {
            self.save(settings)?;
        }

        Ok(())
    }

    fn step(&mut self) {
        self.grid.advance();
        log::trace!("time step {}", self.grid.time());

        update::update_magnetic(&mut self.grid);
        if let Some(tfsf) = self.tfsf.as_mut() {
            tfsf.apply(&mut self.grid);
        }
        update::update_electric(&mut self.grid);
        if let Some(abc) = self.abc.as_mut() {
            abc.apply(&mut self.grid);
        }

        if self.scenario == Scenario::Ricker {
            let time = self.grid.time();
            let (mm, nn) = (self.grid.size_x() / 2, self.grid.size_y() / 2);
            let value = self.wavelet.generate(self.grid.courant_number(), time, 0.0);
            self.grid.ez.slice_mut(time)[[mm, nn]] = value;
        }
    }

    fn save<P: AsRef<Path>>(&self, settings: &SaveSettings<P>) -> Result<()> {
        let filename = settings.filename.as_ref();
        let file = if filename.exists() && !settings.overwrite {
            hdf5::File::append(filename)?
        } else {
            hdf5::File::create(filename)?
        };
        let grid = &self.grid;
        let group = file.create_group(self.scenario.name())?;

        // electric field, oldest slice first
        if settings.save_type == SaveType::Full {
            // a rolling history keeps slice `t` in slot `t % 2`
            let ez = if grid.history_mode() == HistoryMode::Rolling && grid.time() % 2 == 0 {
                grid.ez_history().slice(s![..;-1, .., ..])
            } else {
                grid.ez_history().view()
            };
            let ez = ez.as_standard_layout();
            group.new_dataset::<f64>()
                .shape(ez.dim())
                .create("ez")?
                .write(&ez)?;
        } else {
            let ez = grid.ez_current();
            group.new_dataset::<f64>()
                .shape((1, grid.size_x(), grid.size_y()))
                .create("ez")?
                .write(&ez.insert_axis(ndarray::Axis(0)))?;
        }

        // magnetic field and electric coefficients
        for (name, array) in [
            ("hx", grid.hx()),
            ("hy", grid.hy()),
            ("ceze", grid.ceze()),
            ("cezh", grid.cezh()),
        ] {
            group.new_dataset::<f64>()
                .shape(array.dim())
                .create(name)?
                .write(array)?;
        }

        // save run parameters as group attributes
        group.new_attr::<f64>()
            .shape(hdf5::Extents::Scalar)
            .create("courant_number")?
            .write_scalar(&grid.courant_number())?;
        for (name, value) in [
            ("time", grid.time()),
            ("max_time", grid.max_time()),
            ("size_x", grid.size_x()),
            ("size_y", grid.size_y()),
        ] {
            group.new_attr::<u64>()
                .shape(hdf5::Extents::Scalar)
                .create(name)?
                .write_scalar(&(value as u64))?;
        }

        file.close()?;
        Ok(())
    }

    #[inline]
    pub fn grid(&self) -> &Grid2D {
        &self.grid
    }
    #[inline]
    pub fn into_grid(self) -> Grid2D {
        self.grid
    }
    #[inline]
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }
    #[inline]
    pub fn tfsf(&self) -> Option<&Tfsf> {
        self.tfsf.as_ref()
    }
    #[inline]
    pub fn abc(&self) -> Option<&MurAbc> {
        self.abc.as_ref()
    }
}

/// Builds and runs `desc` to completion, returning the finished grid.
pub fn run_scenario(desc: SimulationDescriptor) -> Result<Grid2D> {
    let mut simulation = Simulation::new(desc)?;
    simulation.run(RunDescriptor::quiet())?;
    Ok(simulation.into_grid())
}
