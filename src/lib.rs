pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, NVec3};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::advance;
pub use simulation::boundary::{damped_bounce, reflect_elastic, DOMAIN_HALF_EXTENT};
pub use simulation::energy::{kinetic_energy, potential_energy, total_energy};
pub use simulation::scenario::{initialize, Scenario};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;

pub use configuration::config::{EngineConfig, InitConfig, ParametersConfig, RangesConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_advance;
