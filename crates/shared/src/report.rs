use serde::Serialize;

use crate::layout::CircleLayout;
use crate::models::{Container, MarkerId, Material, Point};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedCircle {
    pub id: MarkerId,
    pub pixel_bottom_left: Point,
    pub percent_bottom_left: Point,
}

/// Everything the user chose, ready to be logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub material: Material,
    pub circles: Vec<SubmittedCircle>,
}

impl Submission {
    pub fn new(material: Material, layout: &CircleLayout, container: Container) -> Self {
        Self {
            material,
            circles: layout.submission_payload(container),
        }
    }

    /// Human-readable report, one line per circle.
    pub fn report(&self) -> String {
        let mut out = format!("Selected material: {}\nCircle Details:", self.material);
        for (i, c) in self.circles.iter().enumerate() {
            out.push('\n');
            out.push_str(&circle_line(i + 1, c));
        }
        out
    }
}

/// `Circle N: (x: .. px, y: .. px from bottom-left) | (..% from left, ..% from bottom)`
pub fn circle_line(number: usize, c: &SubmittedCircle) -> String {
    format!(
        "Circle {}: (x: {:.1} px, y: {:.1} px from bottom-left) | ({}% from left, {}% from bottom)",
        number,
        c.pixel_bottom_left.x,
        c.pixel_bottom_left.y,
        c.percent_bottom_left.x,
        c.percent_bottom_left.y,
    )
}
