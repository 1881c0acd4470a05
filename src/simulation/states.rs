//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec2` for position/velocity and `NVec3` for color
//! - `System` holding the list of bodies and the current simulation time `t`
//!
//! The body count is fixed at initialization; bodies are never added or
//! removed while the simulation runs.

use nalgebra::{Vector2, Vector3};
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, strictly positive, immutable after init
    pub color: NVec3, // rgb channels in [0, 1], cosmetic only
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}
