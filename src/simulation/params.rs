//! Numerical and physical parameters for one simulation run
//!
//! `Parameters` holds the runtime settings:
//! - particle radius and mass (one of each, monodisperse system),
//! - gravitational constant and Lennard-Jones well depth,
//! - linear damping multiplier (per simulated nanosecond),
//! - time step, total step count, and the two cadences
//!   (ticks per recorded snapshot, ticks per progress message)

use anyhow::{ensure, Result};

use crate::configuration::config::ParticleConfiguration;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub particle_radius: f64,             // sigma, Lennard-Jones length scale
    pub particle_mass: f64,               // shared particle mass
    pub grav_constant: f64,               // G
    pub lennard_jones_well_depth: f64,    // epsilon
    pub linear_damping_multiplier: f64,   // velocity decay per nanosecond
    pub time_step: f64,                   // dt in seconds
    pub num_steps: u64,                   // total tick count
    pub particle_configuration: ParticleConfiguration, // initial lattice
    pub snapshot_skip_steps: u64,         // ticks between recorded snapshots
    pub status_skip_steps: u64,           // ticks between progress messages
}

impl Parameters {
    /// Reject malformed configurations before the run starts
    ///
    /// These are configuration errors, not recoverable runtime
    /// conditions; the run loop never begins with parameters that fail
    /// here.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.particle_mass > 0.0,
            "particle_mass must be positive, got {}",
            self.particle_mass
        );
        ensure!(
            self.particle_radius >= 0.0,
            "particle_radius must not be negative, got {}",
            self.particle_radius
        );
        ensure!(
            self.time_step > 0.0,
            "time_step must be positive, got {}",
            self.time_step
        );
        ensure!(
            self.linear_damping_multiplier.is_finite() && self.linear_damping_multiplier >= 0.0,
            "linear_damping_multiplier must be finite and non-negative, got {}",
            self.linear_damping_multiplier
        );
        ensure!(
            self.snapshot_skip_steps > 0,
            "snapshot_skip_steps must be positive"
        );
        ensure!(
            self.status_skip_steps > 0,
            "status_skip_steps must be positive"
        );
        ensure!(
            self.num_steps % self.snapshot_skip_steps == 0,
            "num_steps ({}) must be a multiple of snapshot_skip_steps ({})",
            self.num_steps,
            self.snapshot_skip_steps
        );
        ensure!(
            self.status_skip_steps % self.snapshot_skip_steps == 0,
            "status_skip_steps ({}) must be a multiple of snapshot_skip_steps ({})",
            self.status_skip_steps,
            self.snapshot_skip_steps
        );
        Ok(())
    }
}
