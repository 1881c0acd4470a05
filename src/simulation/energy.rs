//! Mechanical energy bookkeeping for the N-body system
//!
//! Diagnostic only: read-only sums over the current state, used to watch
//! the integrator for drift. Never runs in the frame loop unless the
//! engine's energy logging toggle is set.

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::states::System;

/// Total kinetic energy, sum of 0.5 * m * |v|^2 over all bodies
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.dot(&b.v)).sum()
}

/// Pairwise potential term, summed over ordered pairs
///
/// Each unordered pair contributes twice, matching the force model's
/// double-visit convention. The same squared-separation floor used by the
/// force model guards the denominator here.
pub fn potential_energy(sys: &System, forces: &NewtonianGravity) -> f64 {
    let n = sys.bodies.len();
    let mut pot = 0.0;

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let r = sys.bodies[j].x - sys.bodies[i].x;
            let r2 = r.dot(&r).max(forces.r2_floor);
            pot += forces.g * sys.bodies[i].m * sys.bodies[j].m / r2;
        }
    }

    pot
}

/// Total mechanical energy: kinetic minus potential
pub fn total_energy(sys: &System, forces: &NewtonianGravity) -> f64 {
    kinetic_energy(sys) - potential_energy(sys, forces)
}
