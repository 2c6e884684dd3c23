//! Conversions from the rendering frame (top-left origin) to the reporting
//! frame (bottom-left origin).
use crate::models::{Container, Point};

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Flip a y coordinate between top-left and bottom-left origins.
/// The flip is its own inverse.
pub fn flip_y(y: f64, container_height: f64) -> f64 {
    container_height - y
}

/// Pixel coordinates with a bottom-left origin.
pub fn to_bottom_left_px(p: Point, container: Container) -> Point {
    Point::new(p.x, flip_y(p.y, container.height()))
}

/// Percentages of the container size, bottom-left origin, rounded to 0.01.
pub fn to_bottom_left_pct(p: Point, container: Container) -> Point {
    Point::new(
        round2(p.x / container.width() * 100.0),
        round2(flip_y(p.y, container.height()) / container.height() * 100.0),
    )
}

/// Rendering-frame point from bottom-left pixel coordinates.
pub fn from_bottom_left_px(p: Point, container: Container) -> Point {
    Point::new(p.x, flip_y(p.y, container.height()))
}
