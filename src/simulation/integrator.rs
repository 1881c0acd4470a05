//! Sub-stepped time integrator for the N-body system
//!
//! Advances the system with semi-implicit Euler: positions drift on the
//! current velocity, then velocities take the pairwise gravity kick, then
//! the unit box reflects anything escaping. One `advance` call splits the
//! frame delta into a fixed number of fine sub-steps for stability.

use super::boundary::reflect_elastic;
use super::forces::NewtonianGravity;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by `dt` using `params.substeps` sub-steps
/// of semi-implicit Euler, mutating positions, velocities, and `sys.t`
/// in-place. Each sub-step:
/// 1. drift:   x_n+1 = x_n + h * v_n
/// 2. kick:    v_n+1 = v_n + h * f(x_n+1)
/// 3. reflect: elastic bounce off the unit box walls
///
/// `dt == 0` is a no-op; negative `dt` steps the system backward.
pub fn advance(sys: &mut System, forces: &NewtonianGravity, params: &Parameters, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 || dt == 0.0 {
        return;
    }

    let substeps = params.substeps.max(1);
    let h = dt / substeps as f64;

    // One force buffer, reused by every sub-step
    // kicks[i] holds the net pairwise force on body i at the drifted positions
    let mut kicks = vec![NVec2::zeros(); n];

    for _ in 0..substeps {
        // Drift: advance positions on the current velocities
        for b in sys.bodies.iter_mut() {
            b.x += h * b.v;
        }

        // Kick: net pairwise forces at the new positions, applied to velocity
        // without dividing by the receiving mass (matched to how the force
        // magnitude is built in `NewtonianGravity::pair_force`)
        forces.accumulate_forces(&*sys, &mut kicks);
        for (b, f) in sys.bodies.iter_mut().zip(kicks.iter()) {
            b.v += h * *f;
        }

        // Keep everything inside the unit box
        for b in sys.bodies.iter_mut() {
            reflect_elastic(b);
        }
    }

    // Increment the system time by the full frame delta
    sys.t += dt;
}
