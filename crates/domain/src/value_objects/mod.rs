//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod place_name;
mod road_preference;
mod search_id;
mod time_budget;

pub use coordinate::Coordinate;
pub use place_name::PlaceName;
pub use road_preference::RoadPreference;
pub use search_id::SearchId;
pub use time_budget::TimeBudget;
