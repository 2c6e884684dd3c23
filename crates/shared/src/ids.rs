use crate::models::MarkerId;

/// Source of fresh marker identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> MarkerId;
}

/// Random v4 UUIDs.
#[cfg(feature = "uuid-support")]
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

#[cfg(feature = "uuid-support")]
impl IdSource for UuidIds {
    fn next_id(&mut self) -> MarkerId {
        MarkerId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic ids: `circle-1`, `circle-2`, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    issued: u64,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> MarkerId {
        self.issued += 1;
        MarkerId::new(format!("circle-{}", self.issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id().as_str(), "circle-1");
        assert_eq!(ids.next_id().as_str(), "circle-2");
    }

    #[cfg(feature = "uuid-support")]
    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }
}
