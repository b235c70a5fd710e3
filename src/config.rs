// Centralized defaults for simulation parameters. Runtime configuration
// (init_config.rs) falls back to these when a field is omitted.

use serde::{Deserialize, Serialize};

// ====================
// Force model
// ====================
/// Barnes-Hut acceptance threshold: a node is treated as a single point mass
/// when side/distance < THETA.
pub const THETA: f64 = 1.0;
/// Softening constant added (squared) to the squared distance so the force
/// stays bounded as two bodies approach.
pub const EPSILON: f64 = 1.0;
/// Gravitational constant, pre-scaled for the simulation's space/mass units.
pub const G: f64 = 0.01;

// ====================
// Stepping
// ====================
pub const DELTA_T: f64 = 0.05;
pub const NUM_BODIES: usize = 10_000;

// ====================
// Disk generator
// ====================
pub const DISK_INNER_RADIUS: f64 = 0.3;
pub const DISK_OUTER_RADIUS: f64 = 1.5;
pub const DISK_THICKNESS: f64 = 0.08;
pub const DISK_CENTRAL_MASS: f64 = 100.0;
pub const DISK_BODY_MASS: f64 = 0.001;

// ====================
// Square-scatter generator
// ====================
pub const SCATTER_EXTENT: f64 = 1024.0;
pub const SCATTER_BODY_MASS: f64 = 1.0;
pub const SCATTER_CENTRAL_MASS_FACTOR: f64 = 1024.0;
pub const SCATTER_MIN_MASS: f64 = 1024.0;
pub const SCATTER_MAX_MASS: f64 = 1024.0 * 64.0;

// ====================
// Threading
// ====================
pub const MIN_THREADS: usize = 3;
pub const THREADS_LEAVE_FREE: usize = 2;

/// The constants a run consumes, bundled so the simulation, snapshots, and
/// the TOML loader all share one definition. Fixed for the lifetime of a run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimParams {
    pub theta: f64,
    pub epsilon: f64,
    pub g: f64,
    pub dt: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            theta: THETA,
            epsilon: EPSILON,
            g: G,
            dt: DELTA_T,
        }
    }
}
