#[cfg(test)]
mod tests {
    use laststand_core::enums::ZombieTier;
    use laststand_core::types::Position;

    use crate::profiles::get_profile;
    use crate::pursuit::{evaluate, PursuitContext, PursuitError};

    fn make_context(zombie: (f64, f64), player: (f64, f64), tier: ZombieTier) -> PursuitContext {
        PursuitContext {
            position: Position::new(zombie.0, zombie.1),
            target: Position::new(player.0, player.1),
            speed: get_profile(tier).speed,
        }
    }

    #[test]
    fn test_velocity_magnitude_equals_tier_speed() {
        let cases = [
            ((200.0, -32.0), (400.0, 300.0)),
            ((832.0, 10.0), (0.0, 0.0)),
            ((-32.0, 599.0), (400.0, 300.0)),
            ((400.0, 299.999), (400.0, 300.0)),
        ];
        for tier in ZombieTier::ALL {
            for (zombie, player) in cases {
                let vel = evaluate(&make_context(zombie, player, tier)).unwrap();
                assert!(
                    (vel.speed() - tier.speed()).abs() < 1e-9,
                    "tier {:?}: speed {} != {}",
                    tier,
                    vel.speed(),
                    tier.speed()
                );
            }
        }
    }

    #[test]
    fn test_velocity_points_at_player() {
        let vel = evaluate(&make_context((0.0, 0.0), (30.0, 40.0), ZombieTier::Shambler)).unwrap();
        // 3-4-5 triangle scaled to speed 50.
        assert!((vel.x - 30.0).abs() < 1e-9);
        assert!((vel.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_distance_gives_zero_velocity() {
        let vel = evaluate(&make_context((400.0, 300.0), (400.0, 300.0), ZombieTier::Sprinter)).unwrap();
        assert_eq!(vel.x, 0.0);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_pursuit_is_deterministic() {
        let a = evaluate(&make_context((12.5, 700.0), (401.0, 3.0), ZombieTier::Runner)).unwrap();
        let b = evaluate(&make_context((12.5, 700.0), (401.0, 3.0), ZombieTier::Runner)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_finite_inputs_are_errors() {
        let err = evaluate(&make_context((f64::NAN, 0.0), (1.0, 1.0), ZombieTier::Shambler)).unwrap_err();
        assert!(matches!(err, PursuitError::NonFinitePosition { .. }));

        let err = evaluate(&make_context((0.0, 0.0), (1.0, f64::INFINITY), ZombieTier::Shambler)).unwrap_err();
        assert!(matches!(err, PursuitError::NonFiniteTarget { .. }));

        let ctx = PursuitContext {
            position: Position::new(0.0, 0.0),
            target: Position::new(1.0, 1.0),
            speed: -1.0,
        };
        assert!(matches!(evaluate(&ctx), Err(PursuitError::InvalidSpeed(_))));
    }

    #[test]
    fn test_profiles_follow_tier() {
        assert_eq!(get_profile(ZombieTier::Shambler).speed, 50.0);
        assert_eq!(get_profile(ZombieTier::Sprinter).speed, 100.0);
        assert_eq!(get_profile(ZombieTier::Runner).max_health, 50.0);
    }
}
