pub mod simulation;
pub mod configuration;
pub mod output;

pub use simulation::states::{Particle, SystemState, NVec3};
pub use simulation::forces::RadialForces;
pub use simulation::integrator::simulate_tick;
pub use simulation::params::Parameters;
pub use simulation::scenario::{populate_particles, Scenario};
pub use simulation::engine::run;

pub use configuration::config::{OutputConfig, ParametersConfig, ParticleConfiguration, RunConfig};

pub use output::csv::{output_path, parse_states, states_to_csv, write_run};
