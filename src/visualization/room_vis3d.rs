use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy::math::primitives::{Cuboid, Cylinder, Sphere};
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use tracing::{info, warn};

use crate::simulation::input::{InputQueue, Thrust};
use crate::simulation::scenario::{BodyView, Scenario};
use crate::simulation::states::Shape;

/// Component tagging each mesh with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Thrust commands collected from the keyboard, drained on the next fixed tick
#[derive(Resource, Default)]
struct PendingInput(InputQueue);

/// Segments used for the round cone
const CONE_SEGMENTS: usize = 24;

/// Convenience entrypoint: the physics runs on `FixedUpdate` at the engine's tick period
pub fn run_3d(scenario: Scenario) {
    info!(
        bodies = scenario.system.bodies.len(),
        tick_ms = scenario.engine.tick_period.as_millis() as u64,
        "starting Bevy room viewer"
    );

    let period = scenario.engine.tick_period;

    App::new()
        .insert_resource(scenario)
        .insert_resource(Time::<Fixed>::from_duration(period))
        .init_resource::<PendingInput>()
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_room)
        .add_systems(Update, (read_keys, sync_transforms))
        .add_systems(FixedUpdate, physics_tick)
        .run();
}

/// Startup system: camera, light, room walls and one mesh per body
fn setup_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    let boundary = scenario.system.room.boundary as f32;

    // Camera on +Z looking at the room center
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.1, 0.1, 0.1)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, boundary * 3.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 8000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(5.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    spawn_room(&mut commands, &mut meshes, &mut materials, boundary);

    for (i, view) in scenario.snapshot().iter().enumerate() {
        let (mesh, transform) = body_mesh(view, &mut meshes);
        let [r, g, b] = view.color;

        commands.spawn((
            PbrBundle {
                mesh,
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(r, g, b),
                    perceptual_roughness: 0.4,
                    ..Default::default()
                }),
                transform,
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Translucent floor and back wall, like looking into an open box
fn spawn_room(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    boundary: f32,
) {
    let edge = boundary * 2.0;
    let thickness = 0.02;

    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(edge, thickness, edge)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(0.2, 0.2, 0.2, 0.7),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, -boundary, 0.0),
        ..Default::default()
    });

    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(edge, edge, thickness)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(0.1, 0.1, 0.1, 0.5),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, -boundary),
        ..Default::default()
    });
}

/// Unit mesh for a shape plus the transform scaling it to the body's half extents
fn body_mesh(view: &BodyView, meshes: &mut Assets<Mesh>) -> (Handle<Mesh>, Transform) {
    let h = view.half_extents;
    let (hx, hy, hz) = (h.x as f32, h.y as f32, h.z as f32);
    let at = Transform::from_translation(to_vec3(view));

    match view.shape {
        Shape::Sphere => (
            meshes.add(Sphere::new(1.0).mesh().uv(20, 20)),
            at.with_scale(Vec3::splat(hx)),
        ),
        Shape::Box | Shape::TallBox | Shape::WidePanel | Shape::ThinWall | Shape::FloorPlate => (
            meshes.add(Cuboid::new(2.0, 2.0, 2.0)),
            at.with_scale(Vec3::new(hx, hy, hz)),
        ),
        // radius hx, height 2 hy
        Shape::CylinderV | Shape::Disc => (
            meshes.add(Cylinder::new(1.0, 2.0)),
            at.with_scale(Vec3::new(hx, hy, hx)),
        ),
        // radius hy, height 2 hx, lying along x
        Shape::CylinderH => (
            meshes.add(Cylinder::new(1.0, 2.0)),
            at.with_rotation(Quat::from_rotation_z(FRAC_PI_2))
                .with_scale(Vec3::new(hy, hx, hy)),
        ),
        Shape::Cone => {
            let ring: Vec<Vec3> = (0..CONE_SEGMENTS)
                .map(|k| {
                    let a = k as f32 / CONE_SEGMENTS as f32 * std::f32::consts::TAU;
                    Vec3::new(a.cos(), -1.0, a.sin())
                })
                .collect();
            (meshes.add(apex_mesh(&ring)), at.with_scale(Vec3::new(hx, hy, hx)))
        }
        Shape::Pyramid => {
            let base = [
                Vec3::new(1.0, -1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ];
            (meshes.add(apex_mesh(&base)), at.with_scale(Vec3::new(hx, hy, hz)))
        }
        Shape::Octahedron => (meshes.add(octahedron_mesh()), at.with_scale(Vec3::new(hx, hy, hz))),
    }
}

/// Solid with apex (0, 1, 0) over a base polygon at y = -1
/// `base` must wind counter-clockwise in the (x, z) plane
fn apex_mesh(base: &[Vec3]) -> Mesh {
    let apex = Vec3::Y;
    let center = Vec3::NEG_Y;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(base.len() * 6);

    for (i, &b0) in base.iter().enumerate() {
        let b1 = base[(i + 1) % base.len()];
        // side
        positions.extend([apex, b1, b0].map(|v| v.to_array()));
        // base cap
        positions.extend([center, b0, b1].map(|v| v.to_array()));
    }

    flat_mesh(positions)
}

/// Six vertices at +-1 on each axis, eight faces
fn octahedron_mesh() -> Mesh {
    let top = Vec3::Y;
    let bottom = Vec3::NEG_Y;
    let ring = [Vec3::X, Vec3::Z, Vec3::NEG_X, Vec3::NEG_Z];
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(24);

    for i in 0..4 {
        let r0 = ring[i];
        let r1 = ring[(i + 1) % 4];
        positions.extend([top, r1, r0].map(|v| v.to_array()));
        positions.extend([bottom, r0, r1].map(|v| v.to_array()));
    }

    flat_mesh(positions)
}

fn flat_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_computed_flat_normals()
}

fn to_vec3(view: &BodyView) -> Vec3 {
    Vec3::new(view.position.x as f32, view.position.y as f32, view.position.z as f32)
}

/// Map arrow keys / WASD / Space to thrust on the controlled body
fn read_keys(keys: Res<ButtonInput<KeyCode>>, mut pending: ResMut<PendingInput>) {
    let bindings = [
        (KeyCode::KeyA, Thrust::Left),
        (KeyCode::ArrowLeft, Thrust::Left),
        (KeyCode::KeyD, Thrust::Right),
        (KeyCode::ArrowRight, Thrust::Right),
        (KeyCode::Space, Thrust::Jump),
        (KeyCode::KeyW, Thrust::Forward),
        (KeyCode::ArrowUp, Thrust::Forward),
        (KeyCode::KeyS, Thrust::Back),
        (KeyCode::ArrowDown, Thrust::Back),
    ];

    for (key, cmd) in bindings {
        if keys.just_pressed(key) {
            pending.0.push(cmd);
        }
    }
}

/// One simulation tick per fixed timestep; input is applied before the step
fn physics_tick(mut scenario: ResMut<Scenario>, mut pending: ResMut<PendingInput>) {
    if let Err(e) = scenario.tick(&mut pending.0) {
        warn!(error = %e, "input dropped");
        scenario.step();
    }
}

fn sync_transforms(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation = Vec3::new(b.position.x as f32, b.position.y as f32, b.position.z as f32);
        }
    }
}
