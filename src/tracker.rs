use uuid::Uuid;

// Source of tracker ids for requests that arrive without one
pub trait TrackerIdGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

// Random UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTrackerIds;

impl TrackerIdGenerator for UuidTrackerIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// Always hands out the same id, for deterministic output
#[derive(Debug, Clone, Default)]
pub struct FixedTrackerId(pub String);

impl FixedTrackerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl TrackerIdGenerator for FixedTrackerId {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
