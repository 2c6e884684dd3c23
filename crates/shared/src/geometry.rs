use crate::config::PlacementConfig;
use crate::models::{Container, Marker, MarkerId, Point};

/// Restrict `value` to `[min, max]`. Never panics, unlike `f64::clamp`,
/// when a container is too small for the inset and `min > max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// True if any marker other than `exclude` has its center closer than
/// `2 * radius` to `point`.
pub fn collides(point: Point, markers: &[Marker], radius: f64, exclude: Option<&MarkerId>) -> bool {
    markers
        .iter()
        .filter(|m| Some(m.id()) != exclude)
        .any(|m| distance(point, m.position()) < radius * 2.0)
}

/// The rectangle circle centers may occupy inside a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegalArea {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl LegalArea {
    pub fn new(container: Container, config: &PlacementConfig) -> Self {
        let inset = config.inset();
        Self {
            min_x: inset,
            max_x: container.width() - inset,
            min_y: inset,
            max_y: container.height() - inset,
        }
    }

    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(
            clamp(p.x, self.min_x, self.max_x),
            clamp(p.y, self.min_y, self.max_y),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(id: &str, x: f64, y: f64) -> Marker {
        Marker::new(MarkerId::new(id), Point::new(x, y))
    }

    #[test]
    fn test_clamp_inside() {
        assert!((clamp(5.0, 0.0, 10.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_below_and_above() {
        assert!((clamp(-3.0, 0.0, 10.0) - 0.0).abs() < 1e-9);
        assert!((clamp(42.0, 0.0, 10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_inverted_range_does_not_panic() {
        let v = clamp(5.0, 10.0, 0.0);
        assert!(v.is_finite());
    }

    #[test]
    fn test_distance_diagonal() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_collides_within_two_radii() {
        let markers = vec![marker("a", 100.0, 100.0)];
        assert!(collides(Point::new(120.0, 100.0), &markers, 20.0, None));
        assert!(collides(Point::new(139.9, 100.0), &markers, 20.0, None));
    }

    #[test]
    fn test_collides_exactly_two_radii_is_clear() {
        let markers = vec![marker("a", 100.0, 100.0)];
        assert!(!collides(Point::new(140.0, 100.0), &markers, 20.0, None));
    }

    #[test]
    fn test_collides_excludes_self() {
        let markers = vec![marker("a", 100.0, 100.0), marker("b", 300.0, 100.0)];
        let id = MarkerId::new("a");
        assert!(!collides(Point::new(105.0, 100.0), &markers, 20.0, Some(&id)));
        assert!(collides(Point::new(290.0, 100.0), &markers, 20.0, Some(&id)));
    }

    #[test]
    fn test_collides_empty() {
        assert!(!collides(Point::new(0.0, 0.0), &[], 20.0, None));
    }

    #[test]
    fn test_legal_area_bounds() {
        let area = LegalArea::new(Container::new(400.0, 300.0).unwrap(), &PlacementConfig::default());
        assert!((area.min_x - 40.0).abs() < 1e-9);
        assert!((area.max_x - 360.0).abs() < 1e-9);
        assert!((area.min_y - 40.0).abs() < 1e-9);
        assert!((area.max_y - 260.0).abs() < 1e-9);
    }

    #[test]
    fn test_legal_area_clamp_point() {
        let area = LegalArea::new(Container::new(400.0, 300.0).unwrap(), &PlacementConfig::default());
        let p = area.clamp_point(Point::new(-10.0, 1000.0));
        assert_eq!(p, Point::new(40.0, 260.0));
        assert!(area.contains(p));
    }
}
