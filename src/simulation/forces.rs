//! Pairwise force model for the n-body engine
//!
//! Direct Newtonian gravity over every unordered body pair, with a floor on
//! the squared separation so close encounters stay finite

use crate::simulation::states::{Body, System, NVec2};

/// Direct pairwise Newtonian gravity
/// `r2_floor` clamps the squared separation from below so the magnitude
/// never diverges when two bodies nearly coincide
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub r2_floor: f64, // lower bound on squared separation
}

impl NewtonianGravity {
    /// Force exerted on `bi` by `bj`
    ///
    /// Pure function of the two bodies: never mutates, and
    /// `pair_force(i, j) == -pair_force(j, i)` for every input.
    /// The force magnitude folds both masses (`g * m_i * m_j / r2`); the
    /// integrator applies it to velocity without dividing by the receiving
    /// mass, and the two conventions must stay matched.
    pub fn pair_force(&self, bi: &Body, bj: &Body) -> NVec2 {
        // r is the displacement vector from i to j
        // If r points from i to j, then i feels a pull along +r,
        // j feels a pull along -r
        let r = bj.x - bi.x;

        // Squared separation |r|^2, clamped from below
        let r2 = r.dot(&r).max(self.r2_floor);

        // F = g * m_i * m_j / r2, along the unit displacement
        let mag = self.g * bi.m * bj.m / r2;

        // Coincident bodies have a degenerate direction; treat it as zero
        let dir = r.try_normalize(0.0).unwrap_or_else(NVec2::zeros);

        mag * dir
    }

    /// Accumulate the net force on every body in `sys` into `out`
    /// - `out[i]` is set to the sum of pair forces from all other bodies
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }

        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                let f = self.pair_force(&sys.bodies[i], &sys.bodies[j]);

                // Equal and opposite: the pair's net momentum change is zero
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}
