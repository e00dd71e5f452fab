//! Run loop: drive repeated ticks and record snapshots
//!
//! Executes `num_steps` ticks in groups of `snapshot_skip_steps`,
//! appending one `SystemState` per group plus the initial state at
//! t = 0. Progress is logged at the status cadence; any non-finite
//! value aborts the run instead of poisoning the recorded output.

use anyhow::{bail, ensure, Result};

use crate::simulation::integrator::simulate_tick;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::SystemState;

/// Run the scenario to completion and return the recorded snapshots
///
/// The returned sequence starts with the initial state and contains one
/// entry per snapshot cadence boundary, each stamped with the elapsed
/// simulated time (ticks * time_step). Fails fast on malformed
/// parameters or an empty particle list, and mid-run only on numerical
/// instability.
pub fn run(scenario: &Scenario) -> Result<Vec<SystemState>> {
    let params = &scenario.parameters;
    params.validate()?;
    ensure!(
        !scenario.system.particles.is_empty(),
        "cannot run with an empty particle list"
    );

    let num_snapshots = params.num_steps / params.snapshot_skip_steps;

    let mut particles = scenario.system.particles.clone();
    let mut recorded = Vec::with_capacity(num_snapshots as usize + 1);

    // Initial state at t = 0
    recorded.push(SystemState::new(scenario.system.time, particles.clone()));

    let mut ticks: u64 = 0;
    for _ in 0..num_snapshots {
        for _ in 0..params.snapshot_skip_steps {
            particles = simulate_tick(&particles, &scenario.forces, params);
            ticks += 1;

            if ticks % params.status_skip_steps == 0 {
                log::info!("calculating step {} of {}", ticks, params.num_steps);
            }
        }

        let state = SystemState::new(ticks as f64 * params.time_step, particles.clone());
        if !state.is_finite() {
            bail!(
                "numerical instability: non-finite particle state at t = {} (step {})",
                state.time,
                ticks
            );
        }
        recorded.push(state);
    }

    Ok(recorded)
}
