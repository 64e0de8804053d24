#[cfg(test)]
mod tests {
    use glam::Vec3;
    use outbreak_core::constants::*;
    use outbreak_core::enums::HostileKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::profiles::{get_profile, roll_walk_phase};
    use crate::steering::*;

    fn make_context<'a>(position: Vec3, peers: &'a [Vec3]) -> SteeringContext<'a> {
        SteeringContext {
            position,
            target: Vec3::new(0.0, EYE_HEIGHT, 0.0),
            speed: 4.0,
            peers,
            separation_radius: SEPARATION_RADIUS,
            separation_weight: SEPARATION_WEIGHT,
            dt: 0.5,
        }
    }

    #[test]
    fn test_pursuit_moves_toward_target_on_ground() {
        let ctx = make_context(Vec3::new(10.0, 0.0, 0.0), &[]);
        let update = steer(&ctx);
        // speed 4 * dt 0.5 = 2 units straight at the target, y unchanged.
        assert!((update.new_position - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-5);
        // Facing -x.
        assert!((update.yaw + std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_step_length_is_speed_times_dt_with_peers() {
        let peers = [Vec3::new(10.0, 0.0, 1.0)];
        let ctx = make_context(Vec3::new(10.0, 0.0, 0.0), &peers);
        let update = steer(&ctx);
        let step = (update.new_position - ctx.position).length();
        assert!((step - 2.0).abs() < 1e-4, "step was {step}");
        // Pushed away from the peer at +z.
        assert!(update.new_position.z < 0.0);
    }

    #[test]
    fn test_separation_ignores_far_and_coincident_peers() {
        let here = Vec3::new(1.0, 0.0, 1.0);
        let peers = [here, Vec3::new(10.0, 0.0, 10.0)];
        assert_eq!(separation(here, &peers, SEPARATION_RADIUS), Vec3::ZERO);
    }

    #[test]
    fn test_separation_is_inverse_distance() {
        let near = separation(Vec3::ZERO, &[Vec3::new(1.0, 0.0, 0.0)], 3.0);
        let far = separation(Vec3::ZERO, &[Vec3::new(2.0, 0.0, 0.0)], 3.0);
        assert!((near - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
        assert!((far - Vec3::new(-0.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_hostile_under_viewpoint_does_not_move() {
        let ctx = make_context(Vec3::ZERO, &[]);
        let update = steer(&ctx);
        assert_eq!(update.new_position, Vec3::ZERO);
    }

    #[test]
    fn test_attack_cooldown_is_strict() {
        assert!(attack_ready(None, 0.0, 1000.0));
        assert!(!attack_ready(Some(0.0), 1000.0, 1000.0));
        assert!(attack_ready(Some(0.0), 1000.1, 1000.0));
    }

    #[test]
    fn test_contact_bounds() {
        let eye = Vec3::new(0.0, EYE_HEIGHT, 0.0);
        let player = player_bounds(eye);
        assert!(hostile_bounds(Vec3::new(0.8, 0.0, 0.0), 1.0).intersects(&player));
        assert!(!hostile_bounds(Vec3::new(1.5, 0.0, 0.0), 1.0).intersects(&player));
        // The boss reaches further.
        assert!(hostile_bounds(Vec3::new(1.5, 0.0, 0.0), BOSS_SCALE).intersects(&player));
    }

    #[test]
    fn test_profiles() {
        let zombie = get_profile(HostileKind::Zombie);
        let boss = get_profile(HostileKind::Boss);
        assert_eq!(zombie.max_health, 100.0);
        assert_eq!(boss.max_health, 1000.0);
        assert!(boss.damage > zombie.damage);
        assert!(boss.kill_points > zombie.kill_points);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let s = zombie.roll_speed(&mut rng);
            assert!((3.0..5.0).contains(&s));
            let w = zombie.roll_walk_rate(&mut rng);
            assert!((5.0..7.0).contains(&w));
        }
        assert_eq!(boss.roll_speed(&mut rng), BOSS_SPEED);
    }

    #[test]
    fn test_walk_phase_rolls_spread_over_cycle() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let phases: Vec<f32> = (0..32).map(|_| roll_walk_phase(&mut rng)).collect();
        assert!(phases
            .iter()
            .all(|p| (0.0..std::f32::consts::TAU).contains(p)));
        let first = phases[0];
        assert!(phases.iter().any(|p| (p - first).abs() > 0.5));
    }

    #[test]
    fn test_limb_swing_bounded() {
        for i in 0..32 {
            let s = limb_swing(i as f32 * 0.4, WALK_SWING);
            assert!(s.abs() <= WALK_SWING + 1e-6);
        }
    }
}
