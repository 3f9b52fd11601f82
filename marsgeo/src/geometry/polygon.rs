//! Validité d'un polygone simple (sans auto-intersection)

use geo::LineString;
use tracing::debug;

use super::segment::{segments_intersect, Segment};
use crate::Point2D;

/// Indique si une suite ordonnée de sommets forme un polygone simple
///
/// Le polygone est fermé implicitement : l'arête `i` relie le sommet `i` au sommet
/// `(i + 1) % n`. Toutes les paires d'arêtes non consécutives sont testées, en O(n²).
pub fn is_simple_polygon(vertices: &[Point2D]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let edges: Vec<Segment> = (0..n)
        .map(|i| (vertices[i], vertices[(i + 1) % n]))
        .collect();

    for i in 0..n {
        for j in (i + 2)..n {
            // La première et la dernière arête partagent le sommet 0
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(edges[i], edges[j]) {
                debug!(edge_a = i, edge_b = j, vertices = n, "Self-intersecting polygon");
                return false;
            }
        }
    }

    true
}

/// Variante de [`is_simple_polygon`] pour un anneau `geo` fermé
///
/// Le sommet de fermeture dupliqué est ignoré s'il est présent.
pub fn is_simple_ring(ring: &LineString) -> bool {
    let mut vertices: Vec<Point2D> = ring.coords().map(|c| c.x_y()).collect();
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    is_simple_polygon(&vertices)
}
