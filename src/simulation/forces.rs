//! Pairwise radial force model for the particle engine
//!
//! Combines gravitational attraction with a Lennard-Jones
//! repulsion/attraction term, both expressed as scalar magnitudes along
//! the line between two particles. Positive means a net outward push,
//! negative a net pull toward the other particle.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle};

/// Radial force law between any two particles in a monodisperse system
///
/// All particles share one mass and one radius, so the law only needs
/// the scalar separation; the constants are copied out of `Parameters`
/// when the scenario is built.
pub struct RadialForces {
    pub grav_constant: f64,   // G
    pub mass: f64,            // shared particle mass m
    pub radius: f64,          // sigma, the Lennard-Jones length scale
    pub well_depth: f64,      // epsilon, the Lennard-Jones well depth
}

impl RadialForces {
    pub fn from_params(p: &Parameters) -> Self {
        Self {
            grav_constant: p.grav_constant,
            mass: p.particle_mass,
            radius: p.particle_radius,
            well_depth: p.lennard_jones_well_depth,
        }
    }

    /// True when no term can ever contribute; lets the pair loop skip
    /// force evaluation entirely
    pub fn is_inert(&self) -> bool {
        self.grav_constant == 0.0 && self.well_depth == 0.0
    }

    /// Gravitational force magnitude G * m^2 / r^2
    /// Zero when G is zero or the particles coincide
    pub fn gravity(&self, distance_squared: f64) -> f64 {
        if self.grav_constant == 0.0 || distance_squared == 0.0 {
            return 0.0;
        }
        self.grav_constant * self.mass * self.mass / distance_squared
    }

    /// Lennard-Jones force magnitude, derived from the potential
    /// U(r) = 4 eps [(sigma/r)^12 - (sigma/r)^6]
    /// as force = -dU/dr = 4 eps [12 sigma^12 / r^13 - 6 sigma^6 / r^7]
    ///
    /// Evaluated through the rescaled distance u = sigma/r and its
    /// derivative u' = -sigma/r^2:
    ///   force = -4 eps (12 u^11 u' - 6 u^5 u')
    /// Positive means net outward push. Zero when eps is zero or the
    /// particles coincide.
    pub fn lennard_jones(&self, distance: f64) -> f64 {
        if self.well_depth == 0.0 || distance == 0.0 {
            return 0.0;
        }
        let u = self.radius / distance;
        let u_prime = -self.radius / (distance * distance);

        -4.0 * self.well_depth * (12.0 * u.powi(11) * u_prime - 6.0 * u.powi(5) * u_prime)
    }

    /// Combined radial force in the outward-positive convention
    /// Gravity is attractive, so it subtracts
    pub fn radial(&self, distance_squared: f64, distance: f64) -> f64 {
        self.lennard_jones(distance) - self.gravity(distance_squared)
    }

    /// Accumulate accelerations for all bodies into `out`
    ///
    /// Every unordered pair (i, j) with i < j is evaluated exactly once
    /// against the pre-step positions. Both particles receive the same
    /// force magnitude / mass along their respective away-from-other
    /// directions, so contributions are equal and opposite and sum per
    /// particle index across pairs.
    pub fn accumulate_accels(&self, particles: &[Particle], out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        if self.is_inert() {
            return;
        }

        let n = particles.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let pi = &particles[i];

            for j in (i + 1)..n {
                let pj = &particles[j];

                // Squared separation from the pre-step positions
                let distance_squared = pi.distance_squared(pj);
                if distance_squared == 0.0 {
                    // Coincident particles contribute nothing
                    continue;
                }
                let distance = distance_squared.sqrt();

                // Radial force, outward-positive, shared by both ends
                // of the pair; same mass on both sides so the
                // acceleration magnitude is identical
                let accel = self.radial(distance_squared, distance) / self.mass;

                // a_i along i's away-from-j direction,
                // a_j along j's away-from-i direction
                // (equal and opposite)
                out[i] += pi.displacement_away_from(pj, accel);
                out[j] += pj.displacement_away_from(pi, accel);
            }
        }
    }
}
