use tmz::fdtd::{courant_number, MurCoefficients, IMP0};
use tmz::prelude::*;

fn run(scenario: Scenario) -> Grid2D {
    run_scenario(SimulationDescriptor::new(101, 81, 300, scenario)).unwrap()
}

/// Largest |Ez| outside the default total-field region over the whole run.
fn max_scattered(grid: &Grid2D) -> f64 {
    let bounds = TfsfBounds::with_margin(grid.size_x(), grid.size_y(), 5);
    let mut max = 0.0f64;
    for t in 0..grid.max_time() {
        let ez = grid.ez_at(t).unwrap();
        for ((m, n), &v) in ez.indexed_iter() {
            let outside = m < bounds.first_x
                || m > bounds.last_x
                || n < bounds.first_y
                || n > bounds.last_y;
            if outside {
                max = max.max(v.abs());
            }
        }
    }
    max
}

#[test]
fn ricker_starts_from_rest() {
    let grid = run(Scenario::Ricker);
    assert!(grid.ez_at(0).unwrap().iter().all(|&v| v == 0.0));
    assert!(grid.is_finished());
    assert_eq!(grid.time(), 299);
}

#[test]
fn ricker_source_cell_follows_wavelet() {
    let grid = run(Scenario::Ricker);
    let ricker = RickerWavelet::default();
    let cdtds = 1.0 / 2f64.sqrt();

    for t in 1..300 {
        assert_eq!(
            grid.ez_at(t).unwrap()[[50, 40]],
            ricker.generate(cdtds, t, 0.0),
            "time step {t}",
        );
    }
}

#[test]
fn ricker_leaves_edges_untouched() {
    let grid = run(Scenario::Ricker);
    let ez = grid.ez_current();
    assert!(ez.row(0).iter().chain(ez.row(100).iter()).all(|&v| v == 0.0));
    assert!(ez.column(0).iter().chain(ez.column(80).iter()).all(|&v| v == 0.0));
}

#[test]
fn plane_wave_stays_in_total_field_region() {
    let grid = run(Scenario::TfsfPlaneWave);

    let max_total = grid
        .ez_history()
        .iter()
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    assert!(max_total > 0.5, "incident wave missing: {max_total}");
    assert!(max_scattered(&grid) < 1e-8);
}

#[test]
fn disk_scatters_outside_total_field_region() {
    let grid = run(Scenario::TfsfDisk(Disk::default()));
    assert!(max_scattered(&grid) > 1e-3);

    // conducting cells never carry a field
    let ez = grid.ez_current();
    assert_eq!(ez[[50, 40]], 0.0);
    assert_eq!(ez[[61, 40]], 0.0);
}

#[test]
fn plate_zeroes_only_its_column() {
    let simulation = Simulation::new(SimulationDescriptor::new(
        101,
        81,
        300,
        Scenario::TfsfPlate(Plate::default()),
    ))
    .unwrap();
    let grid = simulation.grid();
    let cdtds = courant_number();

    for ((m, n), &ceze) in grid.ceze().indexed_iter() {
        let cezh = grid.cezh()[[m, n]];
        if m == 20 && (20..61).contains(&n) {
            assert_eq!((ceze, cezh), (0.0, 0.0), "cell ({m}, {n})");
        } else {
            assert_eq!(ceze.to_bits(), 1f64.to_bits(), "cell ({m}, {n})");
            assert_eq!(cezh.to_bits(), (cdtds * IMP0).to_bits(), "cell ({m}, {n})");
        }
    }
}

#[test]
fn plate_column_carries_no_field() {
    let grid = run(Scenario::TfsfPlate(Plate::default()));
    for t in 0..300 {
        let ez = grid.ez_at(t).unwrap();
        assert!((20..61).all(|n| ez[[20, n]] == 0.0), "time step {t}");
    }
    assert!(grid.ez_history().iter().all(|v| v.is_finite()));
}

#[test]
fn corner_reflector_runs_to_completion() {
    let grid = run(Scenario::TfsfCornerReflector(CornerReflector::default()));
    assert!(grid.is_finished());
    assert_eq!(grid.ez_current()[[70, 40]], 0.0);
    assert!(max_scattered(&grid) > 1e-3);
}

#[test]
fn abc_coefficients_come_from_reference_cell() {
    let simulation = Simulation::new(SimulationDescriptor::new(
        101,
        81,
        10,
        Scenario::TfsfDisk(Disk::default()),
    ))
    .unwrap();
    let grid = simulation.grid();
    let expected = MurCoefficients::from_medium(grid.cezh()[[0, 0]], grid.chye()[[0, 0]]);

    assert_eq!(simulation.abc().unwrap().coefficients(), expected);
    assert!(Simulation::new(SimulationDescriptor::new(101, 81, 10, Scenario::Ricker))
        .unwrap()
        .abc()
        .is_none());
}

#[test]
fn rolling_history_matches_full_history() {
    for scenario in [Scenario::Ricker, Scenario::TfsfPlate(Plate::default())] {
        let full = run_scenario(SimulationDescriptor::new(61, 51, 150, scenario)).unwrap();
        let mut desc = SimulationDescriptor::new(61, 51, 150, scenario);
        desc.grid.history = HistoryMode::Rolling;
        let rolling = run_scenario(desc).unwrap();

        assert_eq!(rolling.ez_history().shape(), &[2, 61, 51]);
        assert_eq!(full.ez_current(), rolling.ez_current());
        assert_eq!(full.ez_at(148), rolling.ez_at(148));
        assert_eq!(full.hx(), rolling.hx());
        assert_eq!(full.hy(), rolling.hy());
    }
}

#[test]
fn invalid_configuration_is_rejected() {
    let mut desc = SimulationDescriptor::new(40, 40, 10, Scenario::TfsfPlaneWave);
    desc.tfsf_bounds = Some(TfsfBounds { first_x: 0, first_y: 5, last_x: 30, last_y: 30 });
    assert!(matches!(Simulation::new(desc), Err(Error::BadTfsfBounds { .. })));

    // the Ricker scenario has no total-field region to check
    desc.scenario = Scenario::Ricker;
    assert!(Simulation::new(desc).is_ok());

    assert!(matches!(
        Simulation::new(SimulationDescriptor::new(2, 40, 10, Scenario::Ricker)),
        Err(Error::BadDimensions { .. })
    ));
    assert!(matches!(
        Simulation::new(SimulationDescriptor::new(15, 15, 10, Scenario::TfsfPlate(Plate::default()))),
        Err(Error::BadScatterer { .. })
    ));

    // a conductor on the boundary's reference cell
    let plate = Plate { column: 0, bottom_margin: 0, top_margin: 10 };
    assert!(matches!(
        Simulation::new(SimulationDescriptor::new(40, 40, 10, Scenario::TfsfPlate(plate))),
        Err(Error::BadBoundaryMedium { .. })
    ));
}

#[test]
fn run_is_idempotent_once_finished() {
    let mut simulation =
        Simulation::new(SimulationDescriptor::new(31, 31, 20, Scenario::TfsfPlaneWave)).unwrap();
    simulation.run(RunDescriptor::quiet()).unwrap();
    let first = simulation.grid().ez_current().to_owned();

    simulation.run(RunDescriptor::quiet()).unwrap();
    assert_eq!(simulation.grid().time(), 19);
    assert_eq!(simulation.grid().ez_current(), first);
}

#[test]
fn saves_history_to_hdf5() {
    let path = std::env::temp_dir().join(format!("tmz_scenarios_{}.h5", std::process::id()));
    let mut simulation =
        Simulation::new(SimulationDescriptor::new(31, 21, 40, Scenario::TfsfDisk(Disk {
            radius: 4,
            center: None,
        })))
        .unwrap();
    simulation
        .run(RunDescriptor {
            verbose: false,
            save_settings: Some(SaveSettings {
                filename: &path,
                save_type: SaveType::Full,
                overwrite: true,
            }),
        })
        .unwrap();

    let file = hdf5::File::open(&path).unwrap();
    let group = file.group("tfsf_disk").unwrap();
    let ez = group.dataset("ez").unwrap().read::<f64, ndarray::Ix3>().unwrap();
    assert_eq!(&ez, simulation.grid().ez_history());
    let cezh = group.dataset("cezh").unwrap().read::<f64, ndarray::Ix2>().unwrap();
    assert_eq!(&cezh, simulation.grid().cezh());
    assert_eq!(group.attr("max_time").unwrap().read_scalar::<u64>().unwrap(), 40);
    file.close().unwrap();

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn saves_rolling_history_oldest_first() {
    let path = std::env::temp_dir().join(format!("tmz_rolling_{}.h5", std::process::id()));
    let mut desc = SimulationDescriptor::new(31, 21, 41, Scenario::TfsfPlaneWave);
    desc.grid.history = HistoryMode::Rolling;
    let mut simulation = Simulation::new(desc).unwrap();
    simulation
        .run(RunDescriptor {
            verbose: false,
            save_settings: Some(SaveSettings {
                filename: &path,
                save_type: SaveType::Full,
                overwrite: true,
            }),
        })
        .unwrap();

    let grid = simulation.grid();
    // slot order is reversed for an even final time
    assert_eq!(grid.time(), 40);

    let file = hdf5::File::open(&path).unwrap();
    let group = file.group("tfsf").unwrap();
    let ez = group.dataset("ez").unwrap().read::<f64, ndarray::Ix3>().unwrap();
    assert_eq!(ez.shape(), &[2, 31, 21]);
    assert_eq!(ez.index_axis(ndarray::Axis(0), 0), grid.ez_at(39).unwrap());
    assert_eq!(ez.index_axis(ndarray::Axis(0), 1), grid.ez_current());
    assert_eq!(group.attr("time").unwrap().read_scalar::<u64>().unwrap(), 40);
    file.close().unwrap();

    std::fs::remove_file(&path).unwrap();
}
