//! Search request and result entities
//!
//! Both live only for a single search: the request is built once per user
//! action and the result is dropped after it has been displayed.

use serde::{Deserialize, Serialize};

use crate::reachability::ReachabilityPolicy;
use crate::value_objects::{Coordinate, PlaceName, RoadPreference, SearchId, TimeBudget};

/// Parameters of one roulette spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Identifier used to correlate log lines
    pub id: SearchId,
    /// Address text the user entered
    pub origin_address: String,
    /// Geocoded origin
    pub origin: Coordinate,
    /// Travel time budget
    pub time_budget: TimeBudget,
    /// Road preference after the control policy was applied
    pub road_preference: RoadPreference,
    /// Radius of the search disk
    pub max_distance_km: f64,
}

impl SearchRequest {
    /// Build a request, deriving the search radius from the policy
    pub fn new(
        origin_address: impl Into<String>,
        origin: Coordinate,
        time_budget: TimeBudget,
        road_preference: RoadPreference,
        policy: &ReachabilityPolicy,
    ) -> Self {
        Self {
            id: SearchId::new(),
            origin_address: origin_address.into(),
            origin,
            time_budget,
            road_preference,
            max_distance_km: policy.max_distance_km(time_budget, road_preference),
        }
    }
}

/// A reachable spot found by the roulette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The randomly chosen point
    pub point: Coordinate,
    /// Reverse-geocoded name of the point
    pub place: PlaceName,
    /// Straight-line distance from the origin
    pub distance_km: f64,
    /// Number of reverse-geocode calls it took
    pub attempts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_derives_radius_from_policy() {
        let request = SearchRequest::new(
            "東京駅",
            Coordinate::tokyo_station(),
            TimeBudget::new(60).unwrap(),
            RoadPreference::Highway,
            &ReachabilityPolicy::default(),
        );
        assert!((request.max_distance_km - 80.0).abs() < f64::EPSILON);
        assert_eq!(request.origin_address, "東京駅");
    }

    #[test]
    fn each_request_gets_its_own_id() {
        let policy = ReachabilityPolicy::default();
        let budget = TimeBudget::new(90).unwrap();
        let origin = Coordinate::tokyo_station();
        let a = SearchRequest::new("a", origin, budget, RoadPreference::LocalRoads, &policy);
        let b = SearchRequest::new("a", origin, budget, RoadPreference::LocalRoads, &policy);
        assert_ne!(a.id, b.id);
    }
}
