//! Map view port
//!
//! The map surface the result is shown on. It holds a viewport and at most
//! one marker.

use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

/// Port for the interactive map
#[cfg_attr(test, automock)]
pub trait MapViewPort: Send {
    /// Move the viewport to `point` at `zoom`
    fn recenter(&mut self, point: Coordinate, zoom: u8);

    /// Show the marker at `point`, replacing any marker already shown
    fn place_marker(&mut self, point: Coordinate, icon_ref: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn MapViewPort) {}

    #[test]
    fn trait_is_send() {
        fn assert_send<T: Send + ?Sized>() {}
        assert_send::<dyn MapViewPort>();
    }
}
