//! Domain layer for the destination roulette
//!
//! Contains the value objects, search entities, and the pure geometry and
//! travel policies the roulette is built on. Nothing in here performs I/O.

pub mod controls;
pub mod entities;
pub mod errors;
pub mod geo;
pub mod reachability;
pub mod value_objects;

pub use controls::HighwayControl;
pub use entities::*;
pub use errors::DomainError;
pub use geo::{haversine_distance_km, random_point_within};
pub use reachability::ReachabilityPolicy;
pub use value_objects::*;
