//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with randomly drawn bodies at t = 0)
//! - the active force model (`NewtonianGravity`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics-step and transform-sync systems

use bevy::prelude::Resource;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::{RangesConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, NVec3, System};

/// Draw `n` bodies with independent uniform components inside `ranges`
///
/// Positions, velocities, masses, and color channels are all drawn from
/// their own `[low, high]` interval. The caller owns the RNG, so a seeded
/// generator reproduces the same system every run.
///
/// `n == 0` is a caller error, not a runtime condition.
pub fn initialize(n: usize, ranges: &RangesConfig, rng: &mut impl Rng) -> System {
    assert!(n > 0, "a scenario needs at least one body");

    let [p_lo, p_hi] = ranges.position;
    let [v_lo, v_hi] = ranges.velocity;
    let [m_lo, m_hi] = ranges.mass;
    let [c_lo, c_hi] = ranges.color;

    let mut bodies = Vec::with_capacity(n);
    for _ in 0..n {
        bodies.push(Body {
            x: NVec2::new(rng.gen_range(p_lo..=p_hi), rng.gen_range(p_lo..=p_hi)),
            v: NVec2::new(rng.gen_range(v_lo..=v_hi), rng.gen_range(v_lo..=v_hi)),
            m: rng.gen_range(m_lo..=m_hi),
            color: NVec3::new(
                rng.gen_range(c_lo..=c_hi),
                rng.gen_range(c_lo..=c_hi),
                rng.gen_range(c_lo..=c_hi),
            ),
        });
    }

    // Initial system state: bodies at t = 0
    System { bodies, t: 0.0 }
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system
/// state, and the active force model
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for integration, visualization, diagnostics, etc
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            r2_floor: p_cfg.r2_floor,
            substeps: p_cfg.substeps,
            bounce: p_cfg.bounce,
            friction: p_cfg.friction,
            fall: p_cfg.fall,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            responder: e_cfg.responder,
            log_energy: e_cfg.log_energy.unwrap_or(false),
        };

        // Bodies: drawn from the configured ranges with a seeded generator
        let mut rng = ChaCha8Rng::seed_from_u64(cfg.init.seed);
        let system = initialize(cfg.init.n_bodies, &cfg.init.ranges, &mut rng);

        // Force model shares the scenario's constants
        let forces = NewtonianGravity {
            g: parameters.g,
            r2_floor: parameters.r2_floor,
        };

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }
}
