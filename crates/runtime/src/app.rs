//! # Cubebox Application Logic
//!
//! Drives the simulation loop: build the demo scene, apply scripted input,
//! then step and log. With `--realtime` each step is paced to `dt` of wall
//! clock time, as a windowed front-end would.

use std::time::{Duration, Instant};

use anyhow::Result;
use physics::{nudge_z, DragGesture, PhysicsSim};

use crate::config::SimConfig;

/// Run the headless simulation loop.
///
/// # Errors
///
/// Returns any error produced by the physics engine.
pub fn run(config: &SimConfig) -> Result<()> {
    tracing::info!("Initializing physics simulation...");
    let mut sim = PhysicsSim::demo_scene();
    apply_input(&mut sim, config)?;

    tracing::info!(
        "Starting simulation loop for {} steps with dt = {}...",
        config.steps,
        config.dt
    );
    let frame_duration = Duration::from_secs_f64(config.dt);
    let mut wall_contacts = 0;
    let mut pair_contacts = 0;

    for i in 0..config.steps {
        let frame_start = Instant::now();

        let report = sim.run(config.dt, 1)?;
        wall_contacts += report.wall_contacts;
        pair_contacts += report.resolved_pairs;

        if config.log_every > 0 && (i + 1) % config.log_every == 0 {
            let cube = sim.cube(0)?;
            tracing::info!(
                "Simulation step {} complete. Cube 0 at {}, velocity {}",
                i + 1,
                cube.center,
                cube.velocity
            );
        }

        if config.realtime {
            let frame_time = frame_start.elapsed();
            if frame_time < frame_duration {
                std::thread::sleep(frame_duration - frame_time);
            }
        }
    }

    tracing::info!(
        wall_contacts,
        pair_contacts,
        "Simulation loop finished after {} steps.",
        config.steps
    );
    for (index, cube) in sim.cubes.iter().enumerate() {
        tracing::info!("Final cube {} position: {}", index, cube.center);
    }

    Ok(())
}

/// Apply the scripted throw and z nudges to cube 0.
fn apply_input(sim: &mut PhysicsSim, config: &SimConfig) -> Result<()> {
    let cube = sim.cube_mut(0)?;

    if let Some(throw) = config.throw {
        let gesture = DragGesture::new((0.0, 0.0), (throw.dx, throw.dy));
        gesture.apply(cube);
        tracing::info!(
            "Threw cube 0: velocity {}, angular velocity {}",
            cube.velocity,
            cube.angular_velocity
        );
    }

    let direction = f64::from(config.nudge_z.signum());
    for _ in 0..config.nudge_z.unsigned_abs() {
        nudge_z(cube, direction);
    }

    Ok(())
}
