//! Types d'erreurs pour le crate marsgeo

use std::fmt;

use thiserror::Error;

/// Axe d'une coordonnée géographique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Longitude => f.write_str("longitude"),
            Self::Latitude => f.write_str("latitude"),
        }
    }
}

/// Erreurs pouvant survenir dans marsgeo
///
/// Les conversions de référentiel sont totales : seules la distance et la lecture
/// d'un nom de référentiel peuvent échouer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Longitude hors de [-180, 180] ou latitude hors de [-90, 90]
    #[error("{value} is not a valid {axis}")]
    InvalidCoordinate { axis: Axis, value: f64 },

    /// Nom de référentiel non reconnu
    #[error("Unknown coordinate frame: {0}")]
    UnknownFrame(String),
}

impl GeoError {
    /// Crée une erreur de longitude invalide
    pub fn invalid_longitude(value: f64) -> Self {
        Self::InvalidCoordinate {
            axis: Axis::Longitude,
            value,
        }
    }

    /// Crée une erreur de latitude invalide
    pub fn invalid_latitude(value: f64) -> Self {
        Self::InvalidCoordinate {
            axis: Axis::Latitude,
            value,
        }
    }
}
