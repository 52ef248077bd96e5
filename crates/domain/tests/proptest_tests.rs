//! Property-based tests for the roulette geometry and policies
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    Coordinate, HighwayControl, ReachabilityPolicy, RoadPreference, TimeBudget,
    haversine_distance_km, random_point_within,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn preference() -> impl Strategy<Value = RoadPreference> {
    prop_oneof![Just(RoadPreference::Highway), Just(RoadPreference::LocalRoads)]
}

// ============================================================================
// Coordinate Property Tests
// ============================================================================

mod coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = Coordinate::new(lat, lon).unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Haversine Property Tests
// ============================================================================

mod haversine_tests {
    use super::*;

    proptest! {
        #[test]
        fn distance_to_self_is_zero(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = Coordinate::new(lat, lon).unwrap();
            prop_assert!(haversine_distance_km(&loc, &loc).abs() < 1e-9);
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = Coordinate::new(lat1, lon1).unwrap();
            let b = Coordinate::new(lat2, lon2).unwrap();
            let d1 = haversine_distance_km(&a, &b);
            let d2 = haversine_distance_km(&b, &a);
            prop_assert!((d1 - d2).abs() < 1e-6);
        }

        #[test]
        fn distance_is_bounded_by_half_circumference(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = Coordinate::new(lat1, lon1).unwrap();
            let b = Coordinate::new(lat2, lon2).unwrap();
            let d = haversine_distance_km(&a, &b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * 6371.0 + 1e-6);
        }
    }
}

// ============================================================================
// Random Point Property Tests
// ============================================================================

mod random_point_tests {
    use super::*;

    proptest! {
        #[test]
        fn zero_radius_returns_center(
            lat in -89.0f64..=89.0f64,
            lon in -180.0f64..=180.0f64,
            seed in any::<u64>()
        ) {
            let center = Coordinate::new(lat, lon).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert_eq!(random_point_within(&center, 0.0, &mut rng), center);
        }

        #[test]
        fn sample_stays_within_radius(
            lat in -60.0f64..=60.0f64,
            lon in -179.0f64..=179.0f64,
            radius in 0.1f64..=150.0f64,
            seed in any::<u64>()
        ) {
            let center = Coordinate::new(lat, lon).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..16 {
                let point = random_point_within(&center, radius, &mut rng);
                let d = haversine_distance_km(&center, &point);
                // Meridian convergence is corrected at the centre latitude only
                prop_assert!(d <= radius * 1.02, "{} km for radius {}", d, radius);
            }
        }
    }
}

// ============================================================================
// Reachability Property Tests
// ============================================================================

mod reachability_tests {
    use super::*;

    proptest! {
        #[test]
        fn distance_is_non_negative(minutes in 1u32..=1440, pref in preference()) {
            let budget = TimeBudget::new(minutes).unwrap();
            let d = ReachabilityPolicy::default().max_distance_km(budget, pref);
            prop_assert!(d >= 0.0);
        }

        #[test]
        fn distance_is_monotone_in_minutes(
            a in 1u32..=1440,
            b in 1u32..=1440,
            pref in preference()
        ) {
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            let policy = ReachabilityPolicy::default();
            let d_short = policy.max_distance_km(TimeBudget::new(short).unwrap(), pref);
            let d_long = policy.max_distance_km(TimeBudget::new(long).unwrap(), pref);
            prop_assert!(d_short <= d_long);
        }

        #[test]
        fn highway_is_never_shorter(minutes in 1u32..=1440) {
            let budget = TimeBudget::new(minutes).unwrap();
            let policy = ReachabilityPolicy::default();
            prop_assert!(
                policy.max_distance_km(budget, RoadPreference::Highway)
                    >= policy.max_distance_km(budget, RoadPreference::LocalRoads)
            );
        }
    }
}

// ============================================================================
// Highway Control Property Tests
// ============================================================================

mod highway_control_tests {
    use super::*;

    proptest! {
        #[test]
        fn shortest_budget_always_locks_local_roads(current in preference()) {
            let control = HighwayControl::for_minutes(TimeBudget::SHORTEST_MINUTES, current);
            prop_assert_eq!(control.value, RoadPreference::LocalRoads);
            prop_assert!(!control.enabled);
        }

        #[test]
        fn longer_budgets_keep_selection(minutes in 31u32..=1440, current in preference()) {
            let control = HighwayControl::for_minutes(minutes, current);
            prop_assert_eq!(control.value, current);
            prop_assert!(control.enabled);
        }
    }
}
