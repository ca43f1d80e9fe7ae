//! Target generation for Roamer
//!
//! Produces the planar poses the dispatcher sends as navigation goals. The
//! dispatcher only sees the [`TargetGenerator`] contract; how a pose is picked
//! is up to the generator.

use std::f64::consts::PI;

use nalgebra::{UnitQuaternion, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Planar goal pose in the map frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// X position (m)
    pub x: f64,
    /// Y position (m)
    pub y: f64,
    /// Heading (rad)
    pub theta: f64,
}

/// Orientation quaternion (x, y, z, w)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// W component
    pub w: f64,
}

impl Pose {
    /// Create a pose from position and heading
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Pose { x, y, theta }
    }

    /// Heading as a rotation about Z: (0, 0, sin(theta/2), cos(theta/2))
    pub fn orientation(&self) -> Orientation {
        let q = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.theta);
        let c = q.into_inner().coords;
        Orientation {
            x: c.x,
            y: c.y,
            z: c.z,
            w: c.w,
        }
    }
}

/// Source of navigation targets
pub trait TargetGenerator {
    /// Produce the next target pose
    fn generate(&mut self) -> Pose;
}

impl<F> TargetGenerator for F
where
    F: FnMut() -> Pose,
{
    fn generate(&mut self) -> Pose {
        self()
    }
}

/// Rectangle targets are drawn from, plus an optional RNG seed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Lower X bound (m)
    pub x_min: f64,
    /// Upper X bound (m)
    pub x_max: f64,
    /// Lower Y bound (m)
    pub y_min: f64,
    /// Upper Y bound (m)
    pub y_max: f64,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            x_min: -5.0,
            x_max: 5.0,
            y_min: -5.0,
            y_max: 5.0,
            seed: None,
        }
    }
}

/// Uniformly random targets inside a rectangle, heading in [-pi, pi)
pub struct RandomTarget {
    config: TargetConfig,
    rng: StdRng,
}

impl RandomTarget {
    /// Create a generator over the configured rectangle
    pub fn new(config: &TargetConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomTarget {
            config: config.clone(),
            rng,
        }
    }

    fn sample(&mut self, min: f64, max: f64) -> f64 {
        // gen_range panics on an empty or unbounded range
        if max > min && (max - min).is_finite() {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }
}

impl TargetGenerator for RandomTarget {
    fn generate(&mut self) -> Pose {
        let x = self.sample(self.config.x_min, self.config.x_max);
        let y = self.sample(self.config.y_min, self.config.y_max);
        let theta = self.sample(-PI, PI);
        Pose::new(x, y, theta)
    }
}
