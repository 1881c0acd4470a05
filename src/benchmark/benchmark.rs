use std::time::Instant;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::advance;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, NVec3, System};

/// Helper to build a deterministic System of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions inside the box, no rand needed
        let x = NVec2::new(
            (i_f * 0.37).sin() * 0.8,
            (i_f * 0.13).cos() * 0.8,
        );

        bodies.push(Body {
            x,
            v: NVec2::zeros(),
            m: 1e3 + (i_f * 0.11).sin().abs() * 9e4,
            color: NVec3::new(1.0, 1.0, 1.0),
        });
    }

    System { bodies, t: 0.0 }
}

fn make_params() -> Parameters {
    Parameters {
        g: 1e-11,
        r2_floor: 0.05,
        substeps: 100,
        bounce: 0.7,
        friction: 0.99,
        fall: 0.8,
    }
}

/// Time one `advance` call (one simulated frame, 100 sub-steps) across a
/// sweep of body counts. The pairwise loop is O(n^2) per sub-step, so the
/// per-frame cost should grow quadratically.
pub fn bench_advance() {
    // Different system sizes to test
    let ns = [3, 8, 16, 32, 64, 128];
    let frames = 10; // frames to average per size
    let dt = 0.016; // one 60 Hz frame

    let params = make_params();

    for n in ns {
        let mut sys = make_system(n);

        let forces = NewtonianGravity {
            g: params.g,
            r2_floor: params.r2_floor,
        };

        // Warm up
        advance(&mut sys, &forces, &params, dt);

        let t0 = Instant::now();
        for _ in 0..frames {
            advance(&mut sys, &forces, &params, dt);
        }
        let per_frame = t0.elapsed().as_secs_f64() / frames as f64;

        println!("N = {n:4}, advance = {:8.6} s/frame", per_frame);
    }
}
