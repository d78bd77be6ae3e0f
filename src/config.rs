// Mapper configuration

pub const DEFAULT_CHILD_AGE: u32 = 0;
pub const DEFAULT_MAX_GUESTS_PER_ROOM: u32 = 20;

// What to do when a room declares more children than it lists ages for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildAgePolicy {
    // Emit every declared child, using this age for the ones without an age
    FillWith(u32),
    // Only emit children whose age is known and lower the child count to match
    Truncate,
}

impl Default for ChildAgePolicy {
    fn default() -> Self {
        ChildAgePolicy::FillWith(DEFAULT_CHILD_AGE)
    }
}

#[derive(Debug, Clone)]
pub struct MapperConfig {
    pub child_age_policy: ChildAgePolicy,
    // Adults plus children emitted for a single room, larger rooms are clamped
    pub max_guests_per_room: u32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            child_age_policy: ChildAgePolicy::default(),
            max_guests_per_room: DEFAULT_MAX_GUESTS_PER_ROOM,
        }
    }
}

impl MapperConfig {
    pub fn with_max_guests_per_room(mut self, max_guests: u32) -> Self {
        self.max_guests_per_room = max_guests;
        self
    }

    pub fn with_child_age_policy(mut self, policy: ChildAgePolicy) -> Self {
        self.child_age_policy = policy;
        self
    }
}
