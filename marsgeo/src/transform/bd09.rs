//! Conversions GCJ-02 ⇄ BD-09
//!
//! Transformation polaire autour de l'origine avec de petites corrections
//! périodiques, plus un biais fixe. Les deux sens sont des miroirs, pas des
//! inverses algébriques exacts.

use super::ellipsoid::{BD_LAT_BIAS, BD_LNG_BIAS, X_PI};
use crate::Point2D;

/// Convertit un point BD-09 en GCJ-02
pub fn bd09_to_gcj02(point: Point2D) -> Point2D {
    let x = point.0 - BD_LNG_BIAS;
    let y = point.1 - BD_LAT_BIAS;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

/// Convertit un point GCJ-02 en BD-09
pub fn gcj02_to_bd09(point: Point2D) -> Point2D {
    let (x, y) = point;
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();
    (z * theta.cos() + BD_LNG_BIAS, z * theta.sin() + BD_LAT_BIAS)
}
