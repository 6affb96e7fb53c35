use tmz::prelude::*;

fn main() {
    let size_x = 101;
    let size_y = 81;
    let max_time = 300;

    let scenarios = [
        Scenario::TfsfPlaneWave,
        Scenario::TfsfPlate(Plate::default()),
        Scenario::TfsfDisk(Disk::default()),
        Scenario::TfsfCornerReflector(CornerReflector::default()),
    ];

    for (i, scenario) in scenarios.into_iter().enumerate() {
        println!("-- Run {} ({}) --", i + 1, scenario.name());

        let mut desc = SimulationDescriptor::new(size_x, size_y, max_time, scenario);
        desc.tfsf_bounds = Some(TfsfBounds {
            first_x: 5,
            first_y: 5,
            last_x: 95,
            last_y: 75,
        });

        let mut simulation = match Simulation::new(desc) {
            Ok(simulation) => simulation,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };

        // every scenario lands in its own group of the same file
        simulation.run(RunDescriptor {
            verbose: true,
            save_settings: Some(SaveSettings {
                filename: "data/tfsf.h5",
                save_type: SaveType::Full,
                overwrite: i == 0,
            }),
        })
        .unwrap();
    }
}
