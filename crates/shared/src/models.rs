use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Brick,
    Metal,
    Wood,
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Material::Brick => write!(f, "Brick"),
            Material::Metal => write!(f, "Metal"),
            Material::Wood => write!(f, "Wood"),
        }
    }
}

impl Material {
    /// Carousel order.
    pub const ALL: [Material; 3] = [Material::Brick, Material::Metal, Material::Wood];

    /// Lowercase slug used for image file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Material::Brick => "brick",
            Material::Metal => "metal",
            Material::Wood => "wood",
        }
    }

    pub fn image_path(&self) -> String {
        format!("/assets/materials/{}.webp", self.slug())
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    /// Next material in carousel order, wrapping around.
    pub fn next(&self) -> Material {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous material in carousel order, wrapping around.
    pub fn previous(&self) -> Material {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured size of the element circles are confined to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Container {
    width: f64,
    height: f64,
}

impl Container {
    /// Returns `None` for an unmeasured (zero, negative or non-finite) size.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A placed circle. Coordinates are container pixels with a top-left origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: MarkerId,
    pub x: f64,
    pub y: f64,
}

impl Marker {
    pub fn new(id: MarkerId, at: Point) -> Self {
        Self {
            id,
            x: at.x,
            y: at.y,
        }
    }

    pub fn id(&self) -> &MarkerId {
        &self.id
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_rejects_unmeasured() {
        assert!(Container::new(0.0, 300.0).is_none());
        assert!(Container::new(400.0, 0.0).is_none());
        assert!(Container::new(-1.0, 300.0).is_none());
        assert!(Container::new(f64::NAN, 300.0).is_none());
        assert!(Container::new(400.0, 300.0).is_some());
    }

    #[test]
    fn test_container_center() {
        let c = Container::new(400.0, 300.0).unwrap();
        assert_eq!(c.center(), Point::new(200.0, 150.0));
    }

    #[test]
    fn test_material_cycle_wraps() {
        assert_eq!(Material::Brick.next(), Material::Metal);
        assert_eq!(Material::Wood.next(), Material::Brick);
        assert_eq!(Material::Brick.previous(), Material::Wood);
        assert_eq!(Material::Metal.previous(), Material::Brick);
    }

    #[test]
    fn test_material_image_path() {
        assert_eq!(Material::Brick.image_path(), "/assets/materials/brick.webp");
    }

    #[test]
    fn test_marker_id_serializes_as_string() {
        let json = serde_json::to_string(&MarkerId::new("abc")).unwrap();
        assert_eq!(json, r#""abc""#);
    }
}
