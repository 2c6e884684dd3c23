use circle_planner_shared::geometry::clamp;
use circle_planner_shared::transform::from_bottom_left_px;
use circle_planner_shared::{Container, Point};

// Horizontal travel before a touch on the material strip counts as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Direction of a finished horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next material.
    Next,
    Previous,
}

/// Measured canvas element: its size plus its viewport offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub container: Container,
}

/// Convert client (viewport) coordinates to container-relative pixel coordinates.
pub fn client_to_container(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point::new(client_x - rect_left, client_y - rect_top)
}

/// Measure the element with `id` using web_sys. `None` until it has a size.
pub fn measure(id: &str) -> Option<CanvasRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    let container = Container::new(rect.width(), rect.height())?;
    Some(CanvasRect {
        left: rect.left(),
        top: rect.top(),
        container,
    })
}

/// Pointer offset from the circle center, recorded when a drag starts so the
/// circle does not jump under the cursor.
pub fn drag_offset(pointer: Point, circle: Point) -> Point {
    Point::new(pointer.x - circle.x, pointer.y - circle.y)
}

pub fn apply_drag_offset(pointer: Point, offset: Point) -> Point {
    Point::new(pointer.x - offset.x, pointer.y - offset.y)
}

/// Keep only ASCII digits from a numeric text field.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a numeric field; empty or invalid input gives `None`.
pub fn parse_px(raw: &str) -> Option<f64> {
    let v: f64 = raw.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

/// Clamp a typed value into `[padding, dimension - padding]`.
pub fn clamp_input(value: f64, dimension: f64, padding: f64) -> f64 {
    clamp(value, padding, dimension - padding)
}

/// Position typed into the add form. Missing fields default to the center.
pub fn typed_position(x: &str, y: &str, container: Container, padding: f64) -> Point {
    let center = container.center();
    let x = parse_px(x).unwrap_or(center.x);
    let y = parse_px(y).unwrap_or(center.y);
    Point::new(
        clamp_input(x, container.width(), padding),
        clamp_input(y, container.height(), padding),
    )
}

/// New position for a circle whose Y field, measured from the bottom edge,
/// was edited. X is kept.
pub fn typed_y_position(current: Point, typed: f64, container: Container, padding: f64) -> Point {
    let from_bottom = clamp_input(typed, container.height(), padding);
    from_bottom_left_px(Point::new(current.x, from_bottom), container)
}

/// Classify a touch that started at `start_x` and ended at `end_x`.
pub fn swipe_direction(start_x: f64, end_x: f64) -> Option<Swipe> {
    let dx = end_x - start_x;
    if dx <= -SWIPE_THRESHOLD_PX {
        Some(Swipe::Next)
    } else if dx >= SWIPE_THRESHOLD_PX {
        Some(Swipe::Previous)
    } else {
        None
    }
}
