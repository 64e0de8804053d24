//! Scene sync: diffs the visible state against what the render side last
//! received and emits create/update/remove commands.
//!
//! Read-only over the world. Visual ids are allocated here and never reused
//! within a session.

use std::collections::{HashMap, HashSet};

use glam::Vec3;
use hecs::World;

use outbreak_ai::steering::limb_swing;
use outbreak_core::components::*;
use outbreak_core::constants::{GROUND_SIZE, WALK_SWING};
use outbreak_core::enums::{EffectKind, HostileKind};
use outbreak_core::scene::{SceneCommand, VisualKind, VisualState};

use crate::effects::EffectsState;
use crate::weapons::get_profile;

/// What a visual id stands for on the simulation side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualKey {
    Ground,
    Entity(hecs::Entity),
    Effect(u64),
}

/// Last state sent per visual.
#[derive(Debug, Default)]
pub struct SceneTracker {
    sent: HashMap<VisualKey, (u64, VisualState)>,
    /// Next id to hand out. Ids are never reused, and a u64 does not wrap
    /// within any realistic session.
    next_id: u64,
}

impl SceneTracker {
    /// Number of visuals the render side currently holds.
    pub fn live_count(&self) -> usize {
        self.sent.len()
    }

    /// Visual id assigned to `key`, if it is on screen.
    pub fn visual_id(&self, key: VisualKey) -> Option<u64> {
        self.sent.get(&key).map(|(id, _)| *id)
    }
}

pub fn run(world: &World, effects: &EffectsState, tracker: &mut SceneTracker) -> Vec<SceneCommand> {
    let current = collect_visuals(world, effects);
    let mut commands = Vec::new();
    let mut seen = HashSet::with_capacity(current.len());

    for (key, kind, state) in current {
        seen.insert(key);
        match tracker.sent.get_mut(&key) {
            Some((id, last)) => {
                if *last != state {
                    *last = state;
                    commands.push(SceneCommand::Update { id: *id, state });
                }
            }
            None => {
                let id = tracker.next_id;
                tracker.next_id += 1;
                tracker.sent.insert(key, (id, state));
                commands.push(SceneCommand::Create { id, kind, state });
            }
        }
    }

    let mut removed: Vec<(u64, VisualKey)> = tracker
        .sent
        .iter()
        .filter(|(key, _)| !seen.contains(*key))
        .map(|(key, (id, _))| (*id, *key))
        .collect();
    removed.sort_unstable_by_key(|(id, _)| *id);
    for (id, key) in removed {
        tracker.sent.remove(&key);
        commands.push(SceneCommand::Remove { id });
    }

    commands
}

fn collect_visuals(world: &World, effects: &EffectsState) -> Vec<(VisualKey, VisualKind, VisualState)> {
    let mut out = Vec::new();

    out.push((
        VisualKey::Ground,
        VisualKind::Ground,
        VisualState {
            size: Vec3::new(GROUND_SIZE, 0.0, GROUND_SIZE),
            color: 0x111111,
            ..Default::default()
        },
    ));

    for (e, (obstacle, pos)) in world.query::<(&Obstacle, &Position)>().iter() {
        let lift = effects.obstacle_lift(e);
        out.push((
            VisualKey::Entity(e),
            VisualKind::Obstacle,
            VisualState {
                position: pos.0 + Vec3::new(0.0, obstacle.half_extents.y + lift, 0.0),
                size: obstacle.half_extents * 2.0,
                color: obstacle.tint,
                ..Default::default()
            },
        ));
    }

    for (e, (building, pos)) in world.query::<(&Building, &Position)>().iter() {
        out.push((
            VisualKey::Entity(e),
            VisualKind::Building,
            VisualState {
                position: pos.0 + Vec3::new(0.0, building.height * 0.5, 0.0),
                yaw: building.yaw,
                size: Vec3::new(building.width, building.height, building.depth),
                color: building.window_color,
                accent: building.neon_color,
                ..Default::default()
            },
        ));
    }

    for (e, (hostile, pos, health, facing, walk)) in world
        .query::<(&Hostile, &Position, &Health, &Facing, &WalkCycle)>()
        .iter()
    {
        let color = match hostile.kind {
            HostileKind::Zombie => 0x55aa55,
            HostileKind::Boss => 0xaa3333,
        };
        out.push((
            VisualKey::Entity(e),
            VisualKind::Hostile(hostile.kind),
            VisualState {
                position: pos.0,
                yaw: facing.yaw,
                size: Vec3::splat(hostile.scale),
                color,
                limb_swing: limb_swing(walk.phase, WALK_SWING),
                health_fraction: if health.max > 0.0 {
                    health.current / health.max
                } else {
                    0.0
                },
                ..Default::default()
            },
        ));
    }

    for (e, (projectile, pos)) in world.query::<(&Projectile, &Position)>().iter() {
        out.push((
            VisualKey::Entity(e),
            VisualKind::Projectile,
            VisualState {
                position: pos.0,
                size: Vec3::splat(projectile.radius),
                color: get_profile(projectile.weapon).tracer_color,
                ..Default::default()
            },
        ));
    }

    for effect in &effects.effects {
        let (kind, color, radius) = match effect.kind {
            EffectKind::BloodParticle => (VisualKind::BloodParticle, 0x880000, 0.05),
            EffectKind::BloodDecal => (VisualKind::BloodDecal, 0x550000, 0.4),
            EffectKind::MuzzleFlash => (VisualKind::MuzzleFlash, 0xffcc33, 0.15),
            _ => continue,
        };
        out.push((
            VisualKey::Effect(effect.serial),
            kind,
            VisualState {
                position: effect.position,
                size: Vec3::splat(radius),
                color,
                opacity: effect.opacity(),
                ..Default::default()
            },
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_keep_counting_past_u32() {
        let world = World::new();
        let effects = EffectsState::new(1);
        let mut tracker = SceneTracker {
            next_id: u32::MAX as u64,
            ..Default::default()
        };

        let commands = run(&world, &effects, &mut tracker);
        assert_eq!(commands.len(), 1);
        assert_eq!(tracker.visual_id(VisualKey::Ground), Some(u32::MAX as u64));

        // Ground drops out and comes back under a fresh id.
        tracker.sent.clear();
        run(&world, &effects, &mut tracker);
        assert_eq!(tracker.visual_id(VisualKey::Ground), Some(u32::MAX as u64 + 1));
    }
}
