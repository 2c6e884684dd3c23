pub mod config;
pub mod geometry;
pub mod ids;
pub mod layout;
pub mod models;
pub mod placement;
pub mod report;
pub mod transform;

pub use config::PlacementConfig;
pub use ids::IdSource;
pub use layout::{CircleLayout, MoveOutcome};
pub use models::{Container, Marker, MarkerId, Material, Point};
pub use placement::{Placement, PlacementSource, Refusal};
