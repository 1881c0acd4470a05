//! Wall reflection policies for the unit box [-1, 1]^2
//!
//! Two distinct behaviors share the same outward-motion test:
//! - `reflect_elastic` runs inside every integrator sub-step and negates the
//!   outgoing velocity component with no energy loss
//! - `damped_bounce` runs once per frame and combines a damped bounce with
//!   air friction and an ambient downward pull

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

/// Half-width of the simulation domain on each axis
pub const DOMAIN_HALF_EXTENT: f64 = 1.0;

/// Negate a velocity component when the body sits beyond the wall on that
/// axis and is still moving further out. Perfectly elastic.
pub fn reflect_elastic(b: &mut Body) {
    if (b.x.x > DOMAIN_HALF_EXTENT && b.v.x > 0.0)
        || (b.x.x < -DOMAIN_HALF_EXTENT && b.v.x < 0.0)
    {
        b.v.x = -b.v.x;
    }
    if (b.x.y > DOMAIN_HALF_EXTENT && b.v.y > 0.0)
        || (b.x.y < -DOMAIN_HALF_EXTENT && b.v.y < 0.0)
    {
        b.v.y = -b.v.y;
    }
}

/// Frame-level responder: ambient fall, damped wall bounce, then air friction
///
/// Per body, in order:
/// 1. `v.y -= fall * dt`
/// 2. outward wall crossings reflect with `v_axis = -v_axis * bounce`
/// 3. `v *= exp(-friction * dt)`
///
/// A body inside the box moving inward is only touched by steps 1 and 3.
pub fn damped_bounce(sys: &mut System, params: &Parameters, dt: f64) {
    let decay = (-params.friction * dt).exp();

    for b in sys.bodies.iter_mut() {
        b.v.y -= params.fall * dt;

        if (b.x.x > DOMAIN_HALF_EXTENT && b.v.x > 0.0)
            || (b.x.x < -DOMAIN_HALF_EXTENT && b.v.x < 0.0)
        {
            b.v.x = -b.v.x * params.bounce;
        }
        if (b.x.y > DOMAIN_HALF_EXTENT && b.v.y > 0.0)
            || (b.x.y < -DOMAIN_HALF_EXTENT && b.v.y < 0.0)
        {
            b.v.y = -b.v.y * params.bounce;
        }

        b.v *= decay;
    }
}
