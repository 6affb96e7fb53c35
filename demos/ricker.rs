use tmz::prelude::*;

fn main() {
    let size_x = 101;
    let size_y = 81;
    let max_time = 300;

    // a hard Ricker source in the middle of a closed grid
    let mut simulation = Simulation::new(SimulationDescriptor::new(
        size_x,
        size_y,
        max_time,
        Scenario::Ricker,
    ))
    .unwrap();

    println!(
        "\n-- General Simulation Info --\n\
        Grid:         {} x {} cells\n\
        Courant #:    {:<9.6}\n\
        Time steps:   {}\n",
        size_x,
        size_y,
        simulation.grid().courant_number(),
        max_time,
    );

    simulation.run(RunDescriptor {
        verbose: true,
        save_settings: Some(SaveSettings {
            filename: "data/ricker.h5",
            save_type: SaveType::Full,
            overwrite: true,
        }),
    })
    .unwrap();

    let grid = simulation.grid();
    println!("Ez at source after {} steps: {:e}", grid.time(), grid.ez_current()[[size_x / 2, size_y / 2]]);
}
