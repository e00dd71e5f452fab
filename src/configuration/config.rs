//! Configuration types for loading simulation runs from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! a simulation run. A run consists of:
//!
//! - [`ParametersConfig`]       – physical constants, step sizing, cadences
//! - [`ParticleConfiguration`]  – named initial-lattice selector
//! - [`OutputConfig`]           – where the CSV lands
//! - [`RunConfig`]              – top-level wrapper used to load a run from YAML
//!
//! # YAML format
//! An example run YAML matching these types:
//!
//! ```yaml
//! run_number: 1
//! name: "lj_damped_cube"
//!
//! parameters:
//!   particle_radius: 40.0e-12       # sigma, meters
//!   particle_mass: 6.646476989051294e-27  # kg
//!   grav_constant: 0.0              # normally 6.67408e-11
//!   lennard_jones_well_depth: 1.0e-32
//!   linear_damping_multiplier: 0.95 # velocity decay per nanosecond
//!   time_step: 1.0e-9               # seconds
//!   num_steps: 1000
//!   particle_configuration: "stationary_cube"
//!   snapshot_skip_steps: 10         # ticks per recorded snapshot
//!   status_skip_steps: 100          # ticks per progress message
//!
//! output:
//!   data_dir: "data"
//! ```
//!
//! The engine then maps this configuration into its runtime scenario
//! representation (`Parameters`, lattice particles, force law).

use serde::Deserialize;

/// Which initial particle lattice to build
/// `particle_configuration: "stationary_cube"`, `"drifting_cube"`, or
/// `"large_stationary_cube"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleConfiguration {
    #[serde(rename = "stationary_cube")] // 3x3x3 lattice at rest
    StationaryCube,

    #[serde(rename = "drifting_cube")] // 3x3x3 lattice with uniform x drift
    DriftingCube,

    #[serde(rename = "large_stationary_cube")] // 7x7x7 lattice at rest
    LargeStationaryCube,
}

/// Physical constants and step sizing for one run
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub particle_radius: f64,           // sigma, Lennard-Jones length scale (m)
    pub particle_mass: f64,             // shared particle mass (kg)
    pub grav_constant: f64,             // gravitational constant
    pub lennard_jones_well_depth: f64,  // epsilon
    pub linear_damping_multiplier: f64, // velocity decay factor per nanosecond
    pub time_step: f64,                 // dt (s)
    pub num_steps: u64,                 // total tick count
    pub particle_configuration: ParticleConfiguration, // initial lattice
    pub snapshot_skip_steps: u64,       // ticks between recorded snapshots
    pub status_skip_steps: u64,         // ticks between progress messages
}

/// Where the CSV output lands
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OutputConfig {
    pub data_dir: Option<String>, // defaults to "data"
}

/// Top-level run configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct RunConfig {
    pub run_number: u64, // zero-padded into the output file name
    pub name: String,    // human-readable run name, part of the file name
    pub parameters: ParametersConfig, // physical and numerical parameters
    #[serde(default)]
    pub output: OutputConfig, // output location
}
