use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::boundary::damped_bounce;
use crate::simulation::energy::total_energy;
use crate::simulation::integrator::advance;
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

/// World-space [-1, 1] → screen-space pixels
const SCALE: f32 = 350.0;

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.1)))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system))
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        // Point size follows log(mass), so heavy bodies read as bigger dots
        let radius_screen = (body.m.ln() as f32).max(1.0);
        let x = body.x.x as f32 * SCALE;
        let y = body.x.y as f32 * SCALE;

        let color = Color::srgb(
            body.color.x as f32,
            body.color.y as f32,
            body.color.z as f32,
        );

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Per frame: advance the physics by the real elapsed time, then apply the
/// frame-level boundary responder when enabled
fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    let dt = time.delta_seconds() as f64;

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        engine,
        system,
        parameters,
        forces,
    } = &mut *scenario;

    advance(system, forces, parameters, dt);

    if engine.responder {
        damped_bounce(system, parameters, dt);
    }

    if engine.log_energy {
        log::info!("t = {:.3}, total energy = {:.6e}", system.t, total_energy(system, forces));
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) * SCALE;
            transform.translation.y = (b.x.y as f32) * SCALE;
        }
    }
}
