//! Dustbot Quickstart: the classic room from scratch.
//!
//! Demonstrates:
//!   1. Building a SimConfig (grid seed, agents, tick cap)
//!   2. Creating a Simulation
//!   3. Stepping tick by tick and reading traces
//!   4. Rendering the grid mid-run
//!   5. Reading the final scoreboard and resetting
//!
//! Run with:
//!   cargo run --example quickstart

use dustbot_engine::{SimConfig, Simulation, StepError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Dustbot Quickstart ===\n");

    // 1. The classic room: 10x10, two dirt piles, a five-tile wall,
    //    one reflex agent starting at (1, 1) facing north.
    let config = SimConfig::classic();
    println!(
        "Grid: {}x{}, {} dirt piles, {} obstacle tiles, cap {} ticks",
        config.grid.width,
        config.grid.height,
        config.grid.dirty.len(),
        config.grid.blocked.len(),
        config.max_ticks,
    );

    // 2. Build the simulation.
    let mut sim = Simulation::new(config)?;
    println!("\nStarting layout:\n{}", sim.render());

    // 3. Step until the run halts, printing each tick's trace and a
    //    picture every 10 ticks.
    loop {
        match sim.step() {
            Ok(trace) => {
                println!("{trace}  ({}us)", sim.last_metrics().total_us);
                if trace.tick.0 % 10 == 0 {
                    println!("{}", sim.render());
                }
            }
            Err(StepError::Halted) => break,
            Err(e) => return Err(e.into()),
        }
    }

    // 4. Final state.
    println!("\nFinal layout (tick {}):\n{}", sim.current_tick(), sim.render());
    for (id, total) in sim.scores().iter() {
        println!("agent {id}: {total}");
    }

    // 5. Reset and confirm the run repeats.
    sim.reset()?;
    let summary = sim.run()?;
    println!(
        "\nAfter reset: ran {} ticks again, scores {:?}",
        summary.ticks, summary.scores
    );

    println!("Done.");
    Ok(())
}
