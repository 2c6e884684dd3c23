use rand::Rng;
use serde::Serialize;

use crate::config::PlacementConfig;
use crate::geometry::{collides, LegalArea};
use crate::models::{Container, Marker, Point};

/// Why a new circle could not be placed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Refusal {
    #[error("maximum of {max} circles reached")]
    LimitReached { max: usize },
    #[error("position ({x:.1}, {y:.1}) overlaps an existing circle")]
    Collision { x: f64, y: f64 },
}

/// Which search phase produced a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlacementSource {
    /// Caller supplied the position.
    Requested,
    /// One of the fixed candidates around the center.
    Candidate,
    /// Uniform sample inside the legal area.
    Random,
    /// Every other phase collided; the circle sits on the center and may overlap.
    Fallback,
}

impl PlacementSource {
    pub fn is_degraded(&self) -> bool {
        matches!(self, PlacementSource::Fallback)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    pub point: Point,
    pub source: PlacementSource,
}

/// A circle accepted into a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub marker: Marker,
    pub source: PlacementSource,
}

/// Center, then below, above and right of it, each clamped into the legal area.
pub fn fixed_candidates(container: Container, config: &PlacementConfig) -> [Point; 4] {
    let area = LegalArea::new(container, config);
    let c = container.center();
    let shift = config.candidate_shift();
    [
        Point::new(c.x, c.y),
        Point::new(c.x, c.y + shift),
        Point::new(c.x, c.y - shift),
        Point::new(c.x + shift, c.y),
    ]
    .map(|p| area.clamp_point(p))
}

/// Lazily draws up to `count` uniform points in the legal area.
fn random_samples<'a, R: Rng + ?Sized>(
    area: LegalArea,
    count: usize,
    rng: &'a mut R,
) -> impl Iterator<Item = Point> + 'a {
    // lo + u * (hi - lo) rather than gen_range: a container smaller than the
    // inset gives an empty range, which gen_range panics on.
    std::iter::repeat_with(move || {
        let x = area.min_x + rng.gen::<f64>() * (area.max_x - area.min_x);
        let y = area.min_y + rng.gen::<f64>() * (area.max_y - area.min_y);
        Point::new(x, y)
    })
    .take(count)
}

/// Ordered automatic-placement candidates: fixed ones first, then random samples.
pub fn search_candidates<'a, R: Rng + ?Sized>(
    container: Container,
    config: &PlacementConfig,
    rng: &'a mut R,
) -> impl Iterator<Item = Spot> + 'a {
    let fixed = fixed_candidates(container, config).into_iter().map(|point| Spot {
        point,
        source: PlacementSource::Candidate,
    });
    let random = random_samples(LegalArea::new(container, config), config.random_attempts, rng)
        .map(|point| Spot {
            point,
            source: PlacementSource::Random,
        });
    fixed.chain(random)
}

/// Find where a new circle should go.
///
/// With `requested`, the point is clamped and refused if it overlaps. Without,
/// the candidate search runs and, when exhausted, falls back to the container
/// center even if that overlaps an existing circle.
pub fn find_position<R: Rng + ?Sized>(
    container: Container,
    markers: &[Marker],
    requested: Option<Point>,
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Spot, Refusal> {
    if markers.len() >= config.max_markers {
        tracing::debug!(count = markers.len(), "refusing circle: limit reached");
        return Err(Refusal::LimitReached {
            max: config.max_markers,
        });
    }

    if let Some(p) = requested {
        let point = LegalArea::new(container, config).clamp_point(p);
        if collides(point, markers, config.radius, None) {
            tracing::debug!(x = point.x, y = point.y, "refusing circle: overlaps");
            return Err(Refusal::Collision {
                x: point.x,
                y: point.y,
            });
        }
        return Ok(Spot {
            point,
            source: PlacementSource::Requested,
        });
    }

    let found = search_candidates(container, config, rng)
        .find(|spot| !collides(spot.point, markers, config.radius, None));

    Ok(found.unwrap_or_else(|| {
        tracing::debug!(count = markers.len(), "no free spot found, placing on center");
        Spot {
            point: container.center(),
            source: PlacementSource::Fallback,
        }
    }))
}
