//! Circle placement constants.
//!
//! Circles are drawn with a fixed radius and must keep a padding strip
//! free along every container edge. At most four circles may exist.

// Circle geometry in pixels
pub const RADIUS_PX: f64 = 20.0;
pub const PADDING_PX: f64 = 20.0;

pub const MAX_CIRCLES: usize = 4;

// Extra gap between the center candidate and its shifted neighbours
pub const CANDIDATE_GAP_PX: f64 = 8.0;

// Random samples tried before falling back to the center
pub const RANDOM_ATTEMPTS: usize = 20;

/// Tunable placement parameters. `Default` takes the constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    pub radius: f64,
    pub padding: f64,
    pub max_markers: usize,
    pub candidate_gap: f64,
    pub random_attempts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            radius: RADIUS_PX,
            padding: PADDING_PX,
            max_markers: MAX_CIRCLES,
            candidate_gap: CANDIDATE_GAP_PX,
            random_attempts: RANDOM_ATTEMPTS,
        }
    }
}

impl PlacementConfig {
    /// Minimum distance between two circle centers.
    pub fn min_separation(&self) -> f64 {
        self.radius * 2.0
    }

    /// Offset applied to the center for the shifted candidates.
    pub fn candidate_shift(&self) -> f64 {
        self.min_separation() + self.candidate_gap
    }

    /// Distance from each container edge to the nearest legal center.
    pub fn inset(&self) -> f64 {
        self.padding + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let cfg = PlacementConfig::default();
        assert_eq!(cfg.max_markers, 4);
        assert_eq!(cfg.random_attempts, 20);
        assert!((cfg.radius - 20.0).abs() < 1e-9);
        assert!((cfg.padding - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_candidate_shift() {
        let cfg = PlacementConfig::default();
        assert!((cfg.candidate_shift() - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_override_keeps_other_defaults() {
        let cfg = PlacementConfig {
            max_markers: 2,
            ..PlacementConfig::default()
        };
        assert_eq!(cfg.max_markers, 2);
        assert!((cfg.padding - PADDING_PX).abs() < 1e-9);
        assert_eq!(cfg.random_attempts, RANDOM_ATTEMPTS);
    }

    #[test]
    fn test_inset() {
        let cfg = PlacementConfig::default();
        assert!((cfg.inset() - 40.0).abs() < 1e-9);
    }
}
