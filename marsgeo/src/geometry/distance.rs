//! Distance orthodromique (haversine)

use tracing::debug;

use crate::error::GeoError;
use crate::transform::ellipsoid::EARTH_RADIUS;
use crate::Point2D;

/// Vérifie qu'un point est dans les plages géographiques valides
fn validate((lng, lat): Point2D) -> Result<(), GeoError> {
    if lng.abs() > 180.0 {
        debug!(longitude = lng, "Rejecting out-of-range longitude");
        return Err(GeoError::invalid_longitude(lng));
    }
    if lat.abs() > 90.0 {
        debug!(latitude = lat, "Rejecting out-of-range latitude");
        return Err(GeoError::invalid_latitude(lat));
    }
    Ok(())
}

/// Distance en mètres entre deux points `(lng, lat)`
///
/// Formule haversine sur une sphère de rayon [`EARTH_RADIUS`].
///
/// # Errors
///
/// `GeoError::InvalidCoordinate` pour la première valeur hors plage rencontrée
/// (longitude avant latitude, premier point avant le second).
pub fn distance(p1: Point2D, p2: Point2D) -> Result<f64, GeoError> {
    validate(p1)?;
    validate(p2)?;

    let rad_lat1 = p1.1.to_radians();
    let rad_lat2 = p2.1.to_radians();
    let delta_lat = rad_lat1 - rad_lat2;
    let delta_lng = p1.0.to_radians() - p2.0.to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + rad_lat1.cos() * rad_lat2.cos() * (delta_lng / 2.0).sin().powi(2);

    Ok(2.0 * h.sqrt().asin() * EARTH_RADIUS)
}
