//! Reprojection de géométries `geo` entre référentiels
//!
//! Applique la conversion point par point à n'importe quelle géométrie.

use geo::{Coord, Geometry, MapCoords};
use tracing::trace;

use super::convert;
use crate::{Frame, Point2D};

/// Reprojection d'un référentiel source vers un référentiel cible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reprojector {
    /// Pas de reprojection (source == cible)
    Identity(Frame),
    /// Conversion effective
    Convert { source: Frame, target: Frame },
}

impl Reprojector {
    /// Crée un nouveau reprojector
    pub fn new(source: Frame, target: Frame) -> Self {
        let reprojector = if source == target {
            Self::Identity(source)
        } else {
            Self::Convert { source, target }
        };
        trace!(%source, %target, kind = reprojector.description(), "Reprojector ready");
        reprojector
    }

    /// Référentiel source
    pub fn source(&self) -> Frame {
        match *self {
            Self::Identity(frame) => frame,
            Self::Convert { source, .. } => source,
        }
    }

    /// Référentiel cible
    pub fn target(&self) -> Frame {
        match *self {
            Self::Identity(frame) => frame,
            Self::Convert { target, .. } => target,
        }
    }

    /// Transforme un point `(lng, lat)`
    pub fn transform_point(&self, point: Point2D) -> Point2D {
        match *self {
            Self::Identity(_) => point,
            Self::Convert { source, target } => convert(point, source, target),
        }
    }

    /// Transforme une coordonnée `geo`
    pub fn transform_coord(&self, coord: Coord) -> Coord {
        let (x, y) = self.transform_point(coord.x_y());
        Coord { x, y }
    }

    /// Transforme une géométrie
    pub fn transform_geometry(&self, geom: &Geometry) -> Geometry {
        match *self {
            Self::Identity(_) => geom.clone(),
            Self::Convert { source, target } => geom.map_coords(move |c: Coord| {
                let (x, y) = convert(c.x_y(), source, target);
                Coord { x, y }
            }),
        }
    }

    /// Retourne une description du reprojector utilisé
    pub fn description(&self) -> &'static str {
        match self {
            Self::Identity(_) => "identity",
            Self::Convert { .. } => "convert",
        }
    }
}
