//! Conversions WGS84 ⇄ GCJ-02
//!
//! La conversion inverse n'est qu'une approximation au premier ordre : le décalage
//! est évalué au point GCJ-02 puis soustrait, sans itération. L'erreur résiduelle
//! est de l'ordre du mètre et fait partie du comportement de référence.

use super::ellipsoid::{CENTER_LAT, CENTER_LNG, EARTH_RADIUS, EE, PI};
use super::offset::offset;
use crate::Point2D;

/// Calcule le décalage GCJ-02 en degrés au point donné
fn delta(lng: f64, lat: f64) -> (f64, f64) {
    let (d_lng, d_lat) = offset(lng - CENTER_LNG, lat - CENTER_LAT);

    // Jacobien de l'ellipsoïde à cette latitude
    let rad_lat = lat / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lng = (d_lng * 180.0) / ((EARTH_RADIUS / sqrt_magic) * rad_lat.cos() * PI);
    let d_lat = (d_lat * 180.0) / (((EARTH_RADIUS * (1.0 - EE)) / (magic * sqrt_magic)) * PI);

    (d_lng, d_lat)
}

/// Convertit un point WGS84 en GCJ-02
pub fn wgs84_to_gcj02(point: Point2D) -> Point2D {
    let (lng, lat) = point;
    let (d_lng, d_lat) = delta(lng, lat);
    (lng + d_lng, lat + d_lat)
}

/// Convertit un point GCJ-02 en WGS84 (inverse approchée)
pub fn gcj02_to_wgs84(point: Point2D) -> Point2D {
    let (lng, lat) = point;
    let (d_lng, d_lat) = delta(lng, lat);
    (lng - d_lng, lat - d_lat)
}
