//! Spherical geometry helpers
//!
//! Great-circle distance and uniform sampling of a point inside a disk
//! around a centre coordinate.

use std::f64::consts::PI;

use rand::Rng;

use crate::value_objects::Coordinate;

/// Mean Earth radius used for all distance computations
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Length of one degree of latitude on the sphere above
pub const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * PI / 180.0;

/// Great-circle distance between two coordinates using the Haversine formula
#[must_use]
pub fn haversine_distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1_rad = a.latitude().to_radians();
    let lat2_rad = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
        (delta_lon / 2.0).sin().powi(2),
        (delta_lat / 2.0).sin().powi(2),
    );
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Draw a point uniformly by area within `max_distance_km` of `center`
///
/// The radius is scaled by `sqrt(u)` so samples are not biased towards the
/// centre. The east-west offset is divided by the cosine of the centre
/// latitude to compensate for meridian convergence. A non-positive radius
/// returns `center` unchanged.
///
/// Centres at exactly ±90° latitude are not handled specially.
pub fn random_point_within<R: Rng + ?Sized>(
    center: &Coordinate,
    max_distance_km: f64,
    rng: &mut R,
) -> Coordinate {
    if max_distance_km <= 0.0 || max_distance_km.is_nan() {
        return *center;
    }

    let radius_deg = max_distance_km / KM_PER_DEGREE;
    let u: f64 = rng.random();
    let v: f64 = rng.random();

    let w = radius_deg * u.sqrt();
    let t = 2.0 * PI * v;

    let latitude = w.mul_add(t.cos(), center.latitude());
    let longitude = center.longitude() + w * t.sin() / center.latitude().to_radians().cos();

    Coordinate::new_unchecked(latitude.clamp(-90.0, 90.0), wrap_longitude(longitude))
}

/// Wrap a longitude into [-180, 180)
fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let tokyo = Coordinate::tokyo_station();
        assert!(haversine_distance_km(&tokyo, &tokyo).abs() < f64::EPSILON);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(1.0, 0.0).unwrap();
        assert!((haversine_distance_km(&a, &b) - KM_PER_DEGREE).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, 180.0).unwrap();
        assert!((haversine_distance_km(&a, &b) - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_returns_center() {
        let mut rng = StdRng::seed_from_u64(7);
        let center = Coordinate::tokyo_station();
        assert_eq!(random_point_within(&center, 0.0, &mut rng), center);
        assert_eq!(random_point_within(&center, -5.0, &mut rng), center);
    }

    #[test]
    fn samples_stay_within_radius_near_tokyo() {
        let mut rng = StdRng::seed_from_u64(42);
        let center = Coordinate::tokyo_station();
        let radius = 80.0;

        let mut inside = 0;
        for _ in 0..2000 {
            let point = random_point_within(&center, radius, &mut rng);
            let d = haversine_distance_km(&center, &point);
            assert!(d <= radius * 1.01, "sample {point} is {d} km away");
            if d <= radius {
                inside += 1;
            }
        }
        assert!(inside >= 1900, "only {inside} of 2000 samples inside radius");
    }

    #[test]
    fn samples_are_not_centre_biased() {
        let mut rng = StdRng::seed_from_u64(1234);
        let center = Coordinate::new(10.0, 20.0).unwrap();
        let radius = 100.0;

        let outer_half = (0..4000)
            .map(|_| random_point_within(&center, radius, &mut rng))
            .filter(|p| haversine_distance_km(&center, p) > radius / std::f64::consts::SQRT_2)
            .count();

        // The outer ring beyond r/sqrt(2) holds half of the disk's area
        assert!((1800..=2200).contains(&outer_half), "outer ring count {outer_half}");
    }

    #[test]
    fn sampled_coordinates_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let center = Coordinate::new(89.5, 179.9).unwrap();
        for _ in 0..500 {
            let point = random_point_within(&center, 300.0, &mut rng);
            assert!((-90.0..=90.0).contains(&point.latitude()));
            assert!((-180.0..=180.0).contains(&point.longitude()));
        }
    }

    #[test]
    fn wrap_longitude_handles_overflow() {
        assert!((wrap_longitude(190.0) - -170.0).abs() < 1e-9);
        assert!((wrap_longitude(-190.0) - 170.0).abs() < 1e-9);
        assert!((wrap_longitude(45.0) - 45.0).abs() < f64::EPSILON);
    }
}
