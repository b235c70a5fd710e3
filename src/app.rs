// Headless run loop: build the rayon pool, generate the initial bodies from
// the run configuration, then step the simulation, emitting frame dumps and
// snapshots at the configured intervals.

use crate::config;
use crate::init_config::RunConfig;
use crate::simulation::Simulation;
use crate::{io, utils};
use std::path::PathBuf;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let threads = std::thread::available_parallelism()?
        .get()
        .max(config::MIN_THREADS)
        - config::THREADS_LEAVE_FREE;
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let config_path = std::env::args().nth(1);
    let run_config = match &config_path {
        Some(path) => RunConfig::load_from_file(path)?,
        None => RunConfig::default(),
    };

    let params = run_config.params();
    let mut rng = fastrand::Rng::with_seed(run_config.seed());
    let bodies = match run_config.scenario() {
        "scatter" => utils::square_scatter(&mut rng, run_config.body_count(), run_config.random_mass()),
        "disk" => utils::orbit_disk(&mut rng, run_config.body_count(), params.g),
        other => return Err(format!("unknown scenario {:?}", other).into()),
    };

    println!(
        "{} bodies ({}), theta={} epsilon={} g={} dt={}",
        bodies.len(),
        run_config.scenario(),
        params.theta,
        params.epsilon,
        params.g,
        params.dt
    );

    let mut sim = Simulation::new(params, bodies);
    let steps = run_config.steps();
    let out_dir = PathBuf::from(run_config.output_directory());

    for _ in 0..steps {
        sim.step();

        if sim.frame % 10 == 0 || sim.frame == steps {
            println!("step {}/{}", sim.frame, steps);
        }

        let frame_interval = run_config.frame_interval();
        if frame_interval > 0 && sim.frame % frame_interval == 0 {
            let path = out_dir.join(format!("frames/frame_{:05}.json", sim.frame));
            io::write_frame_json(path, &sim.bodies, sim.frame)?;
        }

        let snapshot_interval = run_config.snapshot_interval();
        if snapshot_interval > 0 && sim.frame % snapshot_interval == 0 {
            io::save_state(out_dir.join("state.bin.gz"), &sim)?;
        }
    }

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().print_and_clear();

    Ok(())
}
