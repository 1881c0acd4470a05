//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and squared-distance floor (`g`, `r2_floor`),
//! - sub-step count per `advance` call,
//! - bounce damping, air friction, and ambient fall constants
//!   for the boundary responder

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub r2_floor: f64, // floor on squared separation, keeps the force finite
    pub substeps: u32, // sub-steps per advance call
    pub bounce: f64, // velocity retained after a damped wall bounce
    pub friction: f64, // exponential air friction rate
    pub fall: f64, // ambient downward acceleration on v.y
}
