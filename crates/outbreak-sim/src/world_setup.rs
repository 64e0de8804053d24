//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the static arena (reference crates and neon buildings) and the
//! dynamic hostile and projectile entities with their component bundles.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outbreak_ai::profiles::{get_profile, roll_walk_phase};
use outbreak_core::components::*;
use outbreak_core::constants::*;
use outbreak_core::enums::*;
use outbreak_core::tuning::Tuning;

use crate::weapons::WeaponProfile;

/// Lay out the arena: reference crates near the origin, buildings further out.
pub fn setup_arena(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning) {
    for _ in 0..tuning.obstacle_count {
        let position = Vec3::new(
            rng.gen_range(-OBSTACLE_SPREAD..OBSTACLE_SPREAD),
            0.0,
            rng.gen_range(-OBSTACLE_SPREAD..OBSTACLE_SPREAD),
        );
        let tint = rng.gen_range(0..=0xffffff);
        spawn_obstacle(world, position, tint);
    }
    for _ in 0..tuning.building_count {
        spawn_building(world, rng);
    }
}

/// Spawn a reference crate with its base at `position`.
pub fn spawn_obstacle(world: &mut World, position: Vec3, tint: u32) -> hecs::Entity {
    world.spawn((
        Obstacle {
            half_extents: Vec3::splat(OBSTACLE_SIZE * 0.5),
            tint,
        },
        Position(position),
    ))
}

fn spawn_building(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let position = Vec3::new(
        rng.gen_range(-BUILDING_SPREAD..BUILDING_SPREAD),
        0.0,
        rng.gen_range(-BUILDING_SPREAD..BUILDING_SPREAD),
    );
    let building = Building {
        width: rng.gen_range(4.0..12.0),
        height: rng.gen_range(10.0..40.0),
        depth: rng.gen_range(4.0..12.0),
        yaw: rng.gen_range(0.0..std::f32::consts::TAU),
        window_color: neon_color(rng),
        neon_color: neon_color(rng),
    };
    world.spawn((building, Position(position)))
}

/// Random colour with a full blue channel.
fn neon_color(rng: &mut ChaCha8Rng) -> u32 {
    let r: u32 = rng.gen_range(0..=0xff);
    let g: u32 = rng.gen_range(0..=0xff);
    (r << 16) | (g << 8) | 0xff
}

/// Random point on a horizontal ring around `center`, at ground level.
pub fn ring_point(rng: &mut ChaCha8Rng, center: Vec3, radius: f32) -> Vec3 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec3::new(
        center.x + angle.cos() * radius,
        0.0,
        center.z + angle.sin() * radius,
    )
}

/// Spawn a hostile of `kind` standing at `position`.
pub fn spawn_hostile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: HostileKind,
    position: Vec3,
    wave: u32,
) -> hecs::Entity {
    let profile = get_profile(kind);
    let hostile = Hostile {
        kind,
        speed: profile.roll_speed(rng),
        damage: profile.damage,
        attack_cooldown_ms: profile.attack_cooldown_ms,
        last_attack_ms: None,
        kill_points: profile.kill_points,
        scale: profile.scale,
        wave,
    };
    let rate = profile.roll_walk_rate(rng);
    let walk = WalkCycle {
        phase: roll_walk_phase(rng),
        rate,
    };

    world.spawn((
        hostile,
        Position(position),
        Health {
            current: profile.max_health,
            max: profile.max_health,
        },
        Facing::default(),
        walk,
    ))
}

/// Spawn one projectile leaving `origin` with `velocity`.
pub fn spawn_projectile(
    world: &mut World,
    weapon: WeaponKind,
    profile: &WeaponProfile,
    origin: Vec3,
    velocity: Vec3,
    now_ms: f64,
) -> hecs::Entity {
    world.spawn((
        Projectile {
            weapon,
            velocity,
            damage: profile.damage,
            radius: profile.projectile_radius,
            spawned_ms: now_ms,
        },
        Position(origin),
    ))
}
