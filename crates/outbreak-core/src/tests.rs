#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::InputEvent;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::scene::{SceneCommand, VisualKind, VisualState};
    use crate::state::GameStateSnapshot;
    use crate::storage::{HighScoreStore, MemoryHighScoreStore};
    use crate::tuning::Tuning;
    use crate::types::{yaw_towards, Aabb, Orientation, SimTime};

    const EPS: f32 = 1e-5;

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.016);
        t.advance(-1.0);
        assert_eq!(t.frame, 2);
        assert!((t.elapsed_ms - 16.0).abs() < 1e-9);
        assert!((t.elapsed_secs() - 0.016).abs() < 1e-12);
    }

    #[test]
    fn test_aabb_touching_counts_as_hit() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0));
        let b = Aabb::from_center(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(1.0));
        let c = Aabb::from_center(Vec3::new(2.01, 0.0, 0.0), Vec3::splat(1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert_eq!(b.center(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_segment_crossing_thin_box_is_caught() {
        // 0.6 deep box, segment steps 10 units straight through it.
        let target = Aabb::from_center(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.6, 1.0, 0.3));
        let t = target
            .segment_entry(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0))
            .unwrap();
        assert!((t - 0.47).abs() < 1e-5);

        // Neither endpoint is inside, so a point test misses it.
        let point_inside = |p: Vec3| target.intersects(&Aabb::from_center(p, Vec3::ZERO));
        assert!(!point_inside(Vec3::ZERO) && !point_inside(Vec3::new(0.0, 0.0, -10.0)));
    }

    #[test]
    fn test_segment_entry_misses_and_inside() {
        let target = Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0));
        // Parallel and outside.
        assert_eq!(
            target.segment_entry(Vec3::new(0.0, 2.0, -5.0), Vec3::new(0.0, 2.0, 5.0)),
            None
        );
        // Stops short.
        assert_eq!(
            target.segment_entry(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -2.0)),
            None
        );
        // Starts inside.
        assert_eq!(
            target.segment_entry(Vec3::new(0.5, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)),
            Some(0.0)
        );
        // Zero-length segment behaves as a point test.
        assert_eq!(target.segment_entry(Vec3::ONE, Vec3::ONE), Some(0.0));
        assert_eq!(target.segment_entry(Vec3::splat(2.0), Vec3::splat(2.0)), None);
    }

    #[test]
    fn test_expanded_grows_every_side() {
        let grown = Aabb::from_center(Vec3::ZERO, Vec3::ONE).expanded(Vec3::splat(0.5));
        assert_eq!(grown.min, Vec3::splat(-1.5));
        assert_eq!(grown.max, Vec3::splat(1.5));
    }

    #[test]
    fn test_orientation_axes_at_zero() {
        let o = Orientation::default();
        assert!((o.forward() - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
        assert!((o.flat_right() - Vec3::new(1.0, 0.0, 0.0)).length() < EPS);
        let up = Orientation::new(0.0, std::f32::consts::FRAC_PI_2);
        assert!((up.forward() - Vec3::Y).length() < EPS);
        // Flat forward ignores pitch.
        assert!((up.flat_forward() - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_look_clamps_pitch() {
        let mut o = Orientation::default();
        o.look(0.0, -10_000.0, 0.002);
        assert_eq!(o.pitch, std::f32::consts::FRAC_PI_2);
        o.look(0.0, 20_000.0, 0.002);
        assert_eq!(o.pitch, -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_look_moving_right_turns_right() {
        let mut o = Orientation::default();
        o.look(100.0, 0.0, 0.002);
        // Turning right swings forward toward +x.
        assert!(o.forward().x > 0.0);
        assert!(o.yaw >= 0.0 && o.yaw < std::f32::consts::TAU);
    }

    #[test]
    fn test_yaw_towards_faces_target() {
        let yaw = yaw_towards(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert!(yaw.abs() < EPS);
        let yaw = yaw_towards(Vec3::ZERO, Vec3::new(5.0, 3.0, 0.0));
        assert!((yaw - std::f32::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_tuning_wave_rules() {
        let t = Tuning::default();
        assert_eq!(t.wave_quota(1), 5);
        assert_eq!(t.wave_quota(4), 11);
        assert_eq!(t.wave_bonus(1), 0);
        assert_eq!(t.wave_bonus(3), 1000);
        assert!(!t.is_boss_wave(4));
        assert!(t.is_boss_wave(5));
        assert!(t.is_boss_wave(10));
        assert!(!t.is_boss_wave(0));
    }

    #[test]
    fn test_tuning_partial_json_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{ "move_speed": 80.0 }"#).unwrap();
        assert_eq!(t.move_speed, 80.0);
        assert_eq!(t.wave_delay_ms, Tuning::default().wave_delay_ms);
    }

    #[test]
    fn test_input_event_wire_format() {
        let json = r#"{"type":"KeyDown","code":"KeyW"}"#;
        let ev: InputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev, InputEvent::key_down("KeyW"));

        let json = r#"{"type":"PointerLock","locked":true}"#;
        let ev: InputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev, InputEvent::PointerLock { locked: true });
    }

    #[test]
    fn test_every_audio_event_has_a_listed_sound() {
        let events = vec![
            AudioEvent::Shot {
                weapon: WeaponKind::Pistol,
            },
            AudioEvent::Shot {
                weapon: WeaponKind::Shotgun,
            },
            AudioEvent::Shot {
                weapon: WeaponKind::Rifle,
            },
            AudioEvent::DryFire {
                weapon: WeaponKind::Rifle,
            },
            AudioEvent::ObstacleHit,
            AudioEvent::HostileHit {
                kind: HostileKind::Zombie,
            },
            AudioEvent::HostileKilled {
                kind: HostileKind::Zombie,
            },
            AudioEvent::HostileKilled {
                kind: HostileKind::Boss,
            },
            AudioEvent::PlayerHurt { health: 90.0 },
            AudioEvent::WaveStart { wave: 1 },
            AudioEvent::BossRoar { wave: 5 },
            AudioEvent::WaveCleared { wave: 1 },
            AudioEvent::GameOver,
        ];
        for ev in &events {
            assert!(
                AudioEvent::SOUND_NAMES.contains(&ev.sound_name()),
                "{ev:?} plays an unlisted sound"
            );
        }
    }

    #[test]
    fn test_scene_command_tagging() {
        let cmd = SceneCommand::Create {
            id: 7,
            kind: VisualKind::Hostile(HostileKind::Boss),
            state: VisualState::default(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""op":"Create""#));
        assert_eq!(cmd.id(), 7);
        assert_eq!(SceneCommand::Remove { id: 3 }.id(), 3);
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemoryHighScoreStore::new();
        assert_eq!(store.load().unwrap(), 0);
        assert_eq!(store.stored(), None);

        let mut writer = store.clone();
        writer.save(1200).unwrap();
        assert_eq!(store.load().unwrap(), 1200);
        assert_eq!(MemoryHighScoreStore::with_value(5).load().unwrap(), 5);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Menu);
        assert!(back.hud.popups.is_empty());
        assert!(back.scene_commands.is_empty());
    }
}
