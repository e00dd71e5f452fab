//! Fixed-step tick for the particle system
//!
//! One call advances the whole system by `time_step`: accumulate pair
//! accelerations, kick velocities, drift positions, then apply linear
//! damping. Pure function from one particle list to the next.

use crate::simulation::forces::RadialForces;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle};

/// Advance the system by one tick of `params.time_step`
///
/// Three strictly ordered phases:
/// 1. accumulate accelerations over all unordered pairs, from the
///    pre-tick positions only;
/// 2. kick every velocity (v += a * dt), then drift every position by
///    the particle's own post-kick velocity (x += v * dt) — the
///    semi-implicit split;
/// 3. if the damping multiplier is not exactly 1, scale every velocity
///    component by multiplier^(dt * 1e9). The multiplier is a
///    per-nanosecond decay factor, so the exponent converts the step to
///    simulated nanoseconds. Skipped entirely at 1.0 so velocities stay
///    bit-for-bit unchanged.
///
/// Returns a new list of the same length and ordering.
pub fn simulate_tick(
    particles: &[Particle],
    forces: &RadialForces,
    params: &Parameters,
) -> Vec<Particle> {
    let dt = params.time_step;

    // a[i] holds the summed acceleration on particle i at the current
    // positions; no pair update is visible to another pair
    let mut accels = vec![NVec3::zeros(); particles.len()];
    forces.accumulate_accels(particles, &mut accels);

    // Kick then drift, per particle
    let mut next: Vec<Particle> = particles
        .iter()
        .zip(accels.iter())
        .map(|(p, a)| p.with_acceleration(*a, dt).advanced(dt))
        .collect();

    // Damping pass
    if params.linear_damping_multiplier != 1.0 {
        let factor = params.linear_damping_multiplier.powf(dt * 1e9);
        for p in next.iter_mut() {
            *p = p.damped(factor);
        }
    }

    next
}
