//! Adapters - Implementations of application ports

mod leaflet_map_view;
mod nominatim_geocoding_adapter;

pub use leaflet_map_view::{LeafletMapView, MapSnapshot, Marker};
pub use nominatim_geocoding_adapter::NominatimGeocodingAdapter;
