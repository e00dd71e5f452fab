//! Core state types for the particle simulation.
//!
//! Defines the immutable particle value type and the recorded snapshot:
//! - `Particle` holding position `x` and velocity `v` as `NVec3`
//! - `SystemState` pairing a simulation time with a full particle list
//!
//! Every particle operation returns a new value; nothing is mutated in
//! place. Particles carry no identity beyond their index in the current
//! step's list.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}

impl Particle {
    pub fn new(x: NVec3, v: NVec3) -> Self {
        Self { x, v }
    }

    /// Particle at rest at the given position
    pub fn at_rest(x: NVec3) -> Self {
        Self { x, v: NVec3::zeros() }
    }

    /// Squared separation |other.x - self.x|^2
    /// Zero when the two particles coincide
    pub fn distance_squared(&self, other: &Particle) -> f64 {
        let r = other.x - self.x;
        r.dot(&r)
    }

    /// Separation distance |other.x - self.x|
    pub fn distance(&self, other: &Particle) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Unit vector from `other` toward `self`, scaled by `magnitude`
    ///
    /// Computed as (self.x - other.x) * magnitude / distance. When the
    /// distance is zero the scale factor is defined as 0, so coincident
    /// particles contribute a zero vector instead of NaN/inf.
    pub fn displacement_away_from(&self, other: &Particle, magnitude: f64) -> NVec3 {
        let distance = self.distance(other);
        let scale = if distance != 0.0 {
            magnitude / distance
        } else {
            0.0
        };
        (self.x - other.x) * scale
    }

    /// New particle advanced by its own velocity over `dt`
    /// (position += v * dt, velocity unchanged)
    pub fn advanced(&self, dt: f64) -> Particle {
        Particle {
            x: self.x + self.v * dt,
            v: self.v,
        }
    }

    /// New particle with the acceleration applied over `dt`
    /// (velocity += a * dt, position unchanged)
    pub fn with_acceleration(&self, a: NVec3, dt: f64) -> Particle {
        Particle {
            x: self.x,
            v: self.v + a * dt,
        }
    }

    /// New particle with every velocity component scaled by `factor`
    pub fn damped(&self, factor: f64) -> Particle {
        Particle {
            x: self.x,
            v: self.v * factor,
        }
    }

    /// True when every position and velocity component is finite
    pub fn is_finite(&self) -> bool {
        self.x.iter().all(|c| c.is_finite()) && self.v.iter().all(|c| c.is_finite())
    }
}

/// One recorded snapshot: simulation time plus an independent copy of
/// the full particle list at that instant. Append-only; never mutated
/// after creation.
#[derive(Debug, Clone)]
pub struct SystemState {
    pub time: f64,
    pub particles: Vec<Particle>,
}

impl SystemState {
    pub fn new(time: f64, particles: Vec<Particle>) -> Self {
        Self { time, particles }
    }

    /// True when the time and every particle component is finite
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.particles.iter().all(|p| p.is_finite())
    }
}
