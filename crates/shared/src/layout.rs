use rand::Rng;

use crate::config::PlacementConfig;
use crate::geometry::{collides, LegalArea};
use crate::ids::IdSource;
use crate::models::{Container, Marker, MarkerId, Point};
use crate::placement::{find_position, Placement, Refusal};
use crate::report::SubmittedCircle;
use crate::transform;

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The new position overlapped another circle; nothing changed.
    Rejected,
    UnknownMarker,
}

/// The ordered set of circles on the canvas.
///
/// Insertion order is display order: the first circle is "Circle 1".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleLayout {
    markers: Vec<Marker>,
    config: PlacementConfig,
}

impl CircleLayout {
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            markers: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.markers.len() >= self.config.max_markers
    }

    pub fn get(&self, id: &MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id() == id)
    }

    /// Add a circle, at `position` if given, otherwise wherever the search finds room.
    pub fn request_add<I, R>(
        &mut self,
        container: Container,
        position: Option<Point>,
        ids: &mut I,
        rng: &mut R,
    ) -> Result<Placement, Refusal>
    where
        I: IdSource + ?Sized,
        R: Rng + ?Sized,
    {
        let spot = find_position(container, &self.markers, position, &self.config, rng)?;
        let marker = Marker::new(ids.next_id(), spot.point);
        tracing::debug!(id = %marker.id(), x = marker.x, y = marker.y, source = ?spot.source, "circle added");
        self.markers.push(marker.clone());
        Ok(Placement {
            marker,
            source: spot.source,
        })
    }

    /// Move a circle. The position is clamped first; an overlapping result is dropped.
    pub fn request_move(&mut self, container: Container, id: &MarkerId, position: Point) -> MoveOutcome {
        let Some(index) = self.markers.iter().position(|m| m.id() == id) else {
            return MoveOutcome::UnknownMarker;
        };
        let point = LegalArea::new(container, &self.config).clamp_point(position);
        if collides(point, &self.markers, self.config.radius, Some(id)) {
            tracing::trace!(%id, x = point.x, y = point.y, "move rejected: overlaps");
            return MoveOutcome::Rejected;
        }
        let marker = &mut self.markers[index];
        marker.x = point.x;
        marker.y = point.y;
        MoveOutcome::Moved
    }

    /// Remove a circle. Returns false if no circle had that id.
    pub fn request_delete(&mut self, id: &MarkerId) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m.id() != id);
        before != self.markers.len()
    }

    /// Every circle in the bottom-left reporting frame, in display order.
    pub fn submission_payload(&self, container: Container) -> Vec<SubmittedCircle> {
        self.markers
            .iter()
            .map(|m| SubmittedCircle {
                id: m.id().clone(),
                pixel_bottom_left: transform::to_bottom_left_px(m.position(), container),
                percent_bottom_left: transform::to_bottom_left_pct(m.position(), container),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::placement::PlacementSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn container() -> Container {
        Container::new(400.0, 300.0).unwrap()
    }

    fn layout_with(points: &[(f64, f64)]) -> (CircleLayout, SequentialIds) {
        let mut layout = CircleLayout::default();
        let mut ids = SequentialIds::default();
        let mut rng = StdRng::seed_from_u64(1);
        for &(x, y) in points {
            layout
                .request_add(container(), Some(Point::new(x, y)), &mut ids, &mut rng)
                .unwrap();
        }
        (layout, ids)
    }

    #[test]
    fn test_add_assigns_ids_in_order() {
        let (layout, _) = layout_with(&[(100.0, 100.0), (200.0, 200.0)]);
        let ids: Vec<&str> = layout.markers().iter().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["circle-1", "circle-2"]);
    }

    #[test]
    fn test_add_refused_when_full() {
        let (mut layout, mut ids) =
            layout_with(&[(60.0, 60.0), (160.0, 60.0), (260.0, 60.0), (340.0, 60.0)]);
        assert!(layout.is_full());
        let mut rng = StdRng::seed_from_u64(2);
        let err = layout.request_add(container(), None, &mut ids, &mut rng).unwrap_err();
        assert_eq!(err, Refusal::LimitReached { max: 4 });
        assert_eq!(layout.len(), 4);
    }

    #[test]
    fn test_add_collision_leaves_layout_unchanged() {
        let (mut layout, mut ids) = layout_with(&[(100.0, 100.0)]);
        let mut rng = StdRng::seed_from_u64(2);
        let res = layout.request_add(container(), Some(Point::new(120.0, 100.0)), &mut ids, &mut rng);
        assert!(res.is_err());
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn test_add_reports_source() {
        let mut layout = CircleLayout::default();
        let mut ids = SequentialIds::default();
        let mut rng = StdRng::seed_from_u64(3);
        let placed = layout.request_add(container(), None, &mut ids, &mut rng).unwrap();
        assert_eq!(placed.source, PlacementSource::Candidate);
        assert_eq!(placed.marker.position(), Point::new(200.0, 150.0));
    }

    #[test]
    fn test_move_accepted() {
        let (mut layout, _) = layout_with(&[(200.0, 150.0)]);
        let id = MarkerId::new("circle-1");
        assert_eq!(layout.request_move(container(), &id, Point::new(50.0, 50.0)), MoveOutcome::Moved);
        assert_eq!(layout.get(&id).unwrap().position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_move_is_clamped() {
        let (mut layout, _) = layout_with(&[(200.0, 150.0)]);
        let id = MarkerId::new("circle-1");
        layout.request_move(container(), &id, Point::new(0.0, 999.0));
        assert_eq!(layout.get(&id).unwrap().position(), Point::new(40.0, 260.0));
    }

    #[test]
    fn test_move_into_other_circle_rejected() {
        let (mut layout, _) = layout_with(&[(100.0, 100.0), (200.0, 100.0)]);
        let id = MarkerId::new("circle-2");
        let outcome = layout.request_move(container(), &id, Point::new(130.0, 100.0));
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(layout.get(&id).unwrap().position(), Point::new(200.0, 100.0));
    }

    #[test]
    fn test_move_near_own_position_allowed() {
        let (mut layout, _) = layout_with(&[(100.0, 100.0)]);
        let id = MarkerId::new("circle-1");
        let outcome = layout.request_move(container(), &id, Point::new(105.0, 100.0));
        assert_eq!(outcome, MoveOutcome::Moved);
    }

    #[test]
    fn test_move_unknown_id() {
        let (mut layout, _) = layout_with(&[(100.0, 100.0)]);
        let outcome = layout.request_move(container(), &MarkerId::new("nope"), Point::new(300.0, 200.0));
        assert_eq!(outcome, MoveOutcome::UnknownMarker);
    }

    #[test]
    fn test_move_unknown_id_onto_occupied_spot() {
        let (mut layout, _) = layout_with(&[(200.0, 150.0)]);
        let before = layout.clone();
        let outcome = layout.request_move(container(), &MarkerId::new("ghost"), Point::new(200.0, 150.0));
        assert_eq!(outcome, MoveOutcome::UnknownMarker);
        assert_eq!(layout, before);
    }

    #[test]
    fn test_delete() {
        let (mut layout, _) = layout_with(&[(100.0, 100.0), (200.0, 100.0)]);
        assert!(layout.request_delete(&MarkerId::new("circle-1")));
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.markers()[0].id().as_str(), "circle-2");
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let (mut layout, _) = layout_with(&[(100.0, 100.0)]);
        assert!(!layout.request_delete(&MarkerId::new("nope")));
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn test_submission_payload_order_and_frame() {
        let (layout, _) = layout_with(&[(200.0, 150.0), (100.0, 60.0)]);
        let payload = layout.submission_payload(container());
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].id.as_str(), "circle-1");
        assert_eq!(payload[1].pixel_bottom_left, Point::new(100.0, 240.0));
        assert_eq!(payload[1].percent_bottom_left, Point::new(25.0, 80.0));
    }
}
