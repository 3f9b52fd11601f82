//! Détection grossière du territoire chinois
//!
//! Union de rectangles « continent » moins des rectangles d'exclusion (Taïwan,
//! frontières nord, nord-est et sud-ouest qui ne reçoivent pas le décalage).
//! Les conversions n'utilisent pas ce prédicat : elles s'appliquent partout.

use crate::Point2D;

/// Rectangle défini par deux coins opposés, dans n'importe quel ordre
#[derive(Debug, Clone, Copy)]
struct Rectangle {
    a: Point2D,
    b: Point2D,
}

impl Rectangle {
    const fn new(a: Point2D, b: Point2D) -> Self {
        Self { a, b }
    }

    /// Test d'appartenance, bornes incluses
    fn contains(&self, (lng, lat): Point2D) -> bool {
        let min_lng = self.a.0.min(self.b.0);
        let max_lng = self.a.0.max(self.b.0);
        let min_lat = self.a.1.min(self.b.1);
        let max_lat = self.a.1.max(self.b.1);
        lng >= min_lng && lng <= max_lng && lat >= min_lat && lat <= max_lat
    }
}

/// Continent
static MAINLAND: [Rectangle; 6] = [
    Rectangle::new((79.4462, 49.2204), (96.33, 42.8899)),
    Rectangle::new((109.6872, 54.1415), (135.0002, 39.3742)),
    Rectangle::new((73.1246, 42.8899), (124.143255, 29.5297)),
    Rectangle::new((82.9684, 29.5297), (97.0352, 26.7186)),
    Rectangle::new((97.0253, 29.5297), (124.367395, 20.414096)),
    Rectangle::new((107.975793, 20.414096), (111.744104, 17.871542)),
];

/// Zones sans décalage
static EXCLUDED: [Rectangle; 6] = [
    Rectangle::new((119.921265, 25.398623), (122.497559, 21.785006)),
    Rectangle::new((101.8652, 22.284), (106.665, 20.0988)),
    Rectangle::new((106.4525, 21.5422), (108.051, 20.4878)),
    Rectangle::new((109.0323, 55.8175), (119.127, 50.3257)),
    Rectangle::new((127.4568, 55.8175), (137.0227, 49.5574)),
    Rectangle::new((131.2662, 44.8922), (137.0227, 42.5692)),
];

/// Indique si un point se trouve en Chine continentale
pub fn in_china(point: Point2D) -> bool {
    MAINLAND.iter().any(|r| r.contains(point)) && !EXCLUDED.iter().any(|r| r.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beijing() {
        assert!(in_china((116.4, 39.9)));
    }

    #[test]
    fn test_taiwan_is_excluded() {
        // Dans le rectangle continental mais aussi dans une exclusion
        assert!(MAINLAND.iter().any(|r| r.contains((121.0, 23.5))));
        assert!(!in_china((121.0, 23.5)));
    }

    #[test]
    fn test_outside() {
        assert!(!in_china((160.0, 10.0)));
        assert!(!in_china((2.35, 48.85)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        // Coin exact d'un rectangle continental
        assert!(in_china((73.1246, 42.8899)));
    }

    #[test]
    fn test_corner_order_does_not_matter() {
        let r1 = Rectangle::new((0.0, 0.0), (1.0, 1.0));
        let r2 = Rectangle::new((1.0, 0.0), (0.0, 1.0));
        assert!(r1.contains((0.5, 0.5)));
        assert!(r2.contains((0.5, 0.5)));
        assert!(r2.contains((1.0, 1.0)));
        assert!(!r2.contains((1.1, 0.5)));
    }
}
