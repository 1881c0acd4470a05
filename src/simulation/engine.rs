//! High-level runtime engine settings
//!
//! Selects which frame-level policies run alongside the integrator
//! when a `Scenario` is driven by the viewer

#[derive(Debug, Clone)]
pub struct Engine {
    pub responder: bool, // run the damped boundary responder once per frame
    pub log_energy: bool, // log total energy each frame (diagnostic only)
}
