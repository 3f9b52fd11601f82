//! Utilitaires géométriques : distance, intersection de segments, polygone simple

mod distance;
mod polygon;
mod segment;

pub use distance::distance;
pub use polygon::{is_simple_polygon, is_simple_ring};
pub use segment::{segments_intersect, Segment};
