//! Build fully-initialized simulation runs from configuration
//!
//! Takes a `RunConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - initial system state (particles on a lattice at t = 0)
//! - the radial force law (`RadialForces`)
//!
//! The run loop in `engine` consumes the scenario and the CSV writer
//! handles its output naming (run number + name).

use anyhow::{ensure, Result};

use crate::configuration::config::{ParticleConfiguration, RunConfig};
use crate::simulation::forces::RadialForces;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle, SystemState};

/// A fully-initialized simulation run
///
/// The main "runtime bundle" constructed from a [`RunConfig`]:
/// validated parameters, the particle lattice at t = 0, and the force
/// law built from the same constants.
pub struct Scenario {
    pub run_number: u64,
    pub name: String,
    pub parameters: Parameters,
    pub system: SystemState,
    pub forces: RadialForces,
}

impl Scenario {
    pub fn build_scenario(cfg: RunConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            particle_radius: p_cfg.particle_radius,
            particle_mass: p_cfg.particle_mass,
            grav_constant: p_cfg.grav_constant,
            lennard_jones_well_depth: p_cfg.lennard_jones_well_depth,
            linear_damping_multiplier: p_cfg.linear_damping_multiplier,
            time_step: p_cfg.time_step,
            num_steps: p_cfg.num_steps,
            particle_configuration: p_cfg.particle_configuration,
            snapshot_skip_steps: p_cfg.snapshot_skip_steps,
            status_skip_steps: p_cfg.status_skip_steps,
        };
        parameters.validate()?;

        // Initial system state: lattice at t = 0
        let particles = populate_particles(&parameters);
        ensure!(
            !particles.is_empty(),
            "particle configuration produced no particles"
        );
        let system = SystemState::new(0.0, particles);

        // Force law from the same constants
        let forces = RadialForces::from_params(&parameters);

        Ok(Self {
            run_number: cfg.run_number,
            name: cfg.name,
            parameters,
            system,
            forces,
        })
    }
}

/// Build the initial particle list for the configured lattice
///
/// All lattices are cubic with spacing 2 * particle_radius, centered on
/// the origin. The drifting variant gives every particle the same
/// initial x velocity, 5% of one spacing per time step.
pub fn populate_particles(params: &Parameters) -> Vec<Particle> {
    let spacing = params.particle_radius * 2.0;

    match params.particle_configuration {
        // 3 x 3 x 3, at rest
        ParticleConfiguration::StationaryCube => cubic_lattice(spacing, 1, NVec3::zeros()),
        // 3 x 3 x 3 with uniform drift along x
        ParticleConfiguration::DriftingCube => {
            let drift = NVec3::new(spacing / params.time_step * 0.05, 0.0, 0.0);
            cubic_lattice(spacing, 1, drift)
        }
        // 7 x 7 x 7, at rest
        ParticleConfiguration::LargeStationaryCube => cubic_lattice(spacing, 3, NVec3::zeros()),
    }
}

/// Cubic lattice spanning -half_extent..=half_extent on each axis,
/// every particle starting with the same velocity
fn cubic_lattice(spacing: f64, half_extent: i64, velocity: NVec3) -> Vec<Particle> {
    let mut particles = Vec::new();

    for i in -half_extent..=half_extent {
        for j in -half_extent..=half_extent {
            for k in -half_extent..=half_extent {
                let x = NVec3::new(
                    i as f64 * spacing,
                    j as f64 * spacing,
                    k as f64 * spacing,
                );
                particles.push(Particle::new(x, velocity));
            }
        }
    }

    particles
}
