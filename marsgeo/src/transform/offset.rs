//! Modèle empirique du décalage GCJ-02
//!
//! Polynôme + séries trigonométriques ajustés empiriquement. Les coefficients sont
//! opaques et doivent rester identiques à ceux de la formule de référence, y compris
//! l'ordre des opérations.

use super::ellipsoid::PI;

/// Calcule le décalage brut `(d_lng, d_lat)` pour un point centré
///
/// `x` et `y` sont la longitude et la latitude diminuées du centre de référence
/// (105°E, 35°N). Le résultat n'est pas encore en degrés : voir `gcj02::delta`.
pub fn offset(x: f64, y: f64) -> (f64, f64) {
    // Harmonique commune aux deux composantes
    let shared = ((20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0) / 3.0;

    let mut d_lng =
        300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    d_lng += shared;
    d_lng += ((20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0) / 3.0;
    d_lng += ((150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0) / 3.0;

    let mut d_lat =
        -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    d_lat += shared;
    d_lat += ((20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0) / 3.0;
    d_lat += ((160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0) / 3.0;

    (d_lng, d_lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_at_reference_center() {
        // Au centre, toutes les harmoniques s'annulent
        let (d_lng, d_lat) = offset(0.0, 0.0);
        assert!((d_lng - 300.0).abs() < 1e-9, "d_lng={}", d_lng);
        assert!((d_lat - (-100.0)).abs() < 1e-9, "d_lat={}", d_lat);
    }

    #[test]
    fn test_offset_is_pure() {
        assert_eq!(offset(11.3975, 4.9085), offset(11.3975, 4.9085));
    }

    #[test]
    fn test_sqrt_of_negative_x() {
        let (d_lng, d_lat) = offset(-40.0, -30.0);
        assert!(d_lng.is_finite());
        assert!(d_lat.is_finite());
    }
}
