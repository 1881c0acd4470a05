//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame-level toggles (boundary responder, energy log)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`InitConfig`]       – body count, RNG seed, and uniform draw ranges
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   responder: true         # damped wall bounce + friction once per frame
//!   log_energy: false       # log total energy each frame (diagnostic)
//!
//! parameters:
//!   G: 1.0e-11              # gravitational constant
//!   r2_floor: 0.05          # floor on squared separation
//!   substeps: 100           # integrator sub-steps per frame
//!   bounce: 0.7             # velocity retained after a damped bounce
//!   friction: 0.99          # exponential air friction rate
//!   fall: 0.8               # ambient downward acceleration
//!
//! init:
//!   n_bodies: 3
//!   seed: 42                # deterministic seed for the initial draw
//!   ranges:
//!     position: [ -0.8, 0.8 ]
//!     velocity: [ -0.1, 0.1 ]
//!     mass:     [ 1.0e3, 1.0e5 ]
//!     color:    [ 0.2, 1.0 ]
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation; the initial bodies are drawn, not listed, so the same
//! file reproduces the same system whenever the seed is fixed.

use serde::Deserialize;

/// Frame-level engine toggles
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub responder: bool, // `true` - run the damped boundary responder every frame
    pub log_energy: Option<bool>, // `true` - log total energy every frame, defaults off
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,        // gravitational constant
    pub r2_floor: f64, // floor on squared separation, keeps forces finite
    pub substeps: u32, // integrator sub-steps per advance call
    pub bounce: f64,   // damped-bounce velocity retention
    pub friction: f64, // exponential air friction rate
    pub fall: f64,     // ambient downward acceleration
}

/// Half-open uniform ranges for the initial random draw
/// Each entry is `[low, high]`; every component is drawn independently
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RangesConfig {
    pub position: [f64; 2], // per position component
    pub velocity: [f64; 2], // per velocity component
    pub mass: [f64; 2],     // per body
    pub color: [f64; 2],    // per rgb channel
}

/// Initial-state configuration: how many bodies and how to draw them
#[derive(Deserialize, Debug, Clone)]
pub struct InitConfig {
    pub n_bodies: usize, // number of bodies, fixed for the simulation's lifetime
    pub seed: u64,       // deterministic seed to make runs reproducible
    pub ranges: RangesConfig, // uniform draw ranges
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // frame-level toggles
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub init: InitConfig, // initial-state draw configuration
}
