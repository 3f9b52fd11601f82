//! Coordonnée étiquetée par son référentiel

use std::fmt;
use std::str::FromStr;

use geo::{Coord, Point};

use crate::error::GeoError;
use crate::geometry::distance;
use crate::transform::convert;
use crate::Point2D;

/// Référentiel de coordonnées
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frame {
    /// WGS84 (GPS)
    #[cfg_attr(feature = "serde", serde(rename = "WGS84"))]
    Wgs84,
    /// GCJ-02, coordonnées « Mars »
    #[cfg_attr(feature = "serde", serde(rename = "GCJ02"))]
    Gcj02,
    /// BD-09, coordonnées Baidu
    #[cfg_attr(feature = "serde", serde(rename = "BD09"))]
    Bd09,
}

impl Frame {
    /// Les trois référentiels supportés
    pub const ALL: [Frame; 3] = [Frame::Wgs84, Frame::Gcj02, Frame::Bd09];

    /// Nom canonique
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wgs84 => "WGS84",
            Self::Gcj02 => "GCJ02",
            Self::Bd09 => "BD09",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frame {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WGS84" | "WGS-84" | "GPS" => Ok(Self::Wgs84),
            "GCJ02" | "GCJ-02" | "GCJ" | "MARS" => Ok(Self::Gcj02),
            "BD09" | "BD-09" | "BD" | "BAIDU" => Ok(Self::Bd09),
            _ => Err(GeoError::UnknownFrame(s.to_string())),
        }
    }
}

/// Point `(longitude, latitude)` en degrés dans un référentiel donné
///
/// Aucune validation de plage à la construction. Les conversions renvoient une
/// nouvelle valeur.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub frame: Frame,
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(frame: Frame, longitude: f64, latitude: f64) -> Self {
        Self {
            frame,
            longitude,
            latitude,
        }
    }

    pub fn wgs84(longitude: f64, latitude: f64) -> Self {
        Self::new(Frame::Wgs84, longitude, latitude)
    }

    pub fn gcj02(longitude: f64, latitude: f64) -> Self {
        Self::new(Frame::Gcj02, longitude, latitude)
    }

    pub fn bd09(longitude: f64, latitude: f64) -> Self {
        Self::new(Frame::Bd09, longitude, latitude)
    }

    /// Couple `(longitude, latitude)`
    pub fn lng_lat(&self) -> Point2D {
        (self.longitude, self.latitude)
    }

    /// Convertit vers le référentiel cible (copie si déjà dans ce référentiel)
    pub fn to(&self, target: Frame) -> Self {
        let (longitude, latitude) = convert(self.lng_lat(), self.frame, target);
        Self::new(target, longitude, latitude)
    }

    pub fn to_wgs84(&self) -> Self {
        self.to(Frame::Wgs84)
    }

    pub fn to_gcj02(&self) -> Self {
        self.to(Frame::Gcj02)
    }

    pub fn to_bd09(&self) -> Self {
        self.to(Frame::Bd09)
    }

    /// Distance haversine en mètres vers `other`, ramené au référentiel de `self`
    pub fn distance_to(&self, other: &Coordinate) -> Result<f64, GeoError> {
        distance(self.lng_lat(), other.to(self.frame).lng_lat())
    }
}

impl From<Coordinate> for Coord {
    fn from(c: Coordinate) -> Self {
        Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<Coordinate> for Point {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}
