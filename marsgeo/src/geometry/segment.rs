//! Intersection de deux segments
//!
//! Délègue aux prédicats d'orientation robustes de `geo`.

use geo::{Intersects, Line};

use crate::Point2D;

/// Segment défini par ses deux extrémités
pub type Segment = (Point2D, Point2D);

/// Indique si deux segments se touchent
///
/// Vrai pour un croisement, un contact en extrémité ou un recouvrement colinéaire.
pub fn segments_intersect(a: Segment, b: Segment) -> bool {
    let a = Line::new(a.0, a.1);
    let b = Line::new(b.0, b.1);
    a.intersects(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing() {
        assert!(segments_intersect(
            ((0.0, 0.0), (1.0, 1.0)),
            ((0.0, 1.0), (1.0, 0.0))
        ));
    }

    #[test]
    fn test_touching_endpoint() {
        assert!(segments_intersect(
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0))
        ));
    }

    #[test]
    fn test_collinear_overlap() {
        assert!(segments_intersect(
            ((0.0, 0.0), (2.0, 0.0)),
            ((1.0, 0.0), (3.0, 0.0))
        ));
    }

    #[test]
    fn test_disjoint() {
        assert!(!segments_intersect(
            ((0.0, 0.0), (1.0, 0.0)),
            ((0.0, 1.0), (1.0, 1.0))
        ));
        // Colinéaires mais séparés
        assert!(!segments_intersect(
            ((0.0, 0.0), (1.0, 0.0)),
            ((2.0, 0.0), (3.0, 0.0))
        ));
    }
}
