//! # marsgeo
//!
//! Conversion de coordonnées entre les référentiels utilisés par les cartes en Chine :
//! WGS84 (GPS), GCJ-02 (coordonnées « Mars ») et BD-09 (Baidu).
//!
//! ## Features
//!
//! - Les six conversions entre WGS84, GCJ-02 et BD-09 (formules de référence)
//! - Détection grossière du territoire chinois (`in_china`)
//! - Distance haversine, intersection de segments, validité d'un polygone simple
//! - Reprojection de géométries `geo` complètes
//! - Feature `serde` pour (dé)sérialiser `Frame` et `Coordinate`
//!
//! ## Usage
//!
//! ```rust
//! use marsgeo::{Coordinate, Frame};
//!
//! let gps = Coordinate::wgs84(116.3975, 39.9085);
//! let baidu = gps.to(Frame::Bd09);
//! assert_eq!(baidu.frame, Frame::Bd09);
//!
//! let back = baidu.to_wgs84();
//! assert!((back.longitude - gps.longitude).abs() < 1e-4);
//! ```

pub mod coordinate;
pub mod error;
pub mod geometry;
pub mod transform;

pub use coordinate::{Coordinate, Frame};
pub use error::{Axis, GeoError};
pub use geometry::{distance, is_simple_polygon, is_simple_ring, segments_intersect, Segment};
pub use transform::{
    bd09_to_gcj02, bd09_to_wgs84, convert, gcj02_to_bd09, gcj02_to_wgs84, in_china,
    wgs84_to_bd09, wgs84_to_gcj02, Reprojector,
};

/// Point `(longitude, latitude)` en degrés décimaux signés
pub type Point2D = (f64, f64);
