//! Conversions entre référentiels WGS84, GCJ-02 et BD-09
//!
//! Toutes les fonctions sont pures, sans contrôle de plage et sans échec possible.
//! Les conversions WGS84 ⇄ BD-09 passent toujours par GCJ-02.

mod bd09;
pub mod ellipsoid;
mod gcj02;
mod offset;
mod region;
mod reproject;

pub use bd09::{bd09_to_gcj02, gcj02_to_bd09};
pub use gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
pub use offset::offset;
pub use region::in_china;
pub use reproject::Reprojector;

use crate::{Frame, Point2D};

/// Convertit un point BD-09 en WGS84 (via GCJ-02)
pub fn bd09_to_wgs84(point: Point2D) -> Point2D {
    gcj02_to_wgs84(bd09_to_gcj02(point))
}

/// Convertit un point WGS84 en BD-09 (via GCJ-02)
pub fn wgs84_to_bd09(point: Point2D) -> Point2D {
    gcj02_to_bd09(wgs84_to_gcj02(point))
}

/// Convertit un point d'un référentiel à un autre
///
/// Renvoie le point inchangé si `from == to`.
pub fn convert(point: Point2D, from: Frame, to: Frame) -> Point2D {
    match (from, to) {
        (Frame::Wgs84, Frame::Gcj02) => wgs84_to_gcj02(point),
        (Frame::Wgs84, Frame::Bd09) => wgs84_to_bd09(point),
        (Frame::Gcj02, Frame::Wgs84) => gcj02_to_wgs84(point),
        (Frame::Gcj02, Frame::Bd09) => gcj02_to_bd09(point),
        (Frame::Bd09, Frame::Wgs84) => bd09_to_wgs84(point),
        (Frame::Bd09, Frame::Gcj02) => bd09_to_gcj02(point),
        (Frame::Wgs84, Frame::Wgs84) | (Frame::Gcj02, Frame::Gcj02) | (Frame::Bd09, Frame::Bd09) => {
            point
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_conversions() {
        let p = (116.3975, 39.9085);
        assert_eq!(wgs84_to_bd09(p), gcj02_to_bd09(wgs84_to_gcj02(p)));
        assert_eq!(bd09_to_wgs84(p), gcj02_to_wgs84(bd09_to_gcj02(p)));
    }

    #[test]
    fn test_convert_identity() {
        let p = (121.4737, 31.2304);
        for frame in Frame::ALL {
            assert_eq!(convert(p, frame, frame), p);
        }
    }

    #[test]
    fn test_convert_dispatch() {
        let p = (113.2644, 23.1291);
        assert_eq!(convert(p, Frame::Wgs84, Frame::Gcj02), wgs84_to_gcj02(p));
        assert_eq!(convert(p, Frame::Gcj02, Frame::Bd09), gcj02_to_bd09(p));
        assert_eq!(convert(p, Frame::Bd09, Frame::Wgs84), bd09_to_wgs84(p));
    }
}
