//! Destination entity: a place offering bookable activities.

use serde::{Deserialize, Serialize};

use super::{Activity, Entity, UNASSIGNED_ID};

pub type DestinationId = i64;

/// A travel destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Unique identifier, assigned on creation
    pub destination_id: DestinationId,

    /// Display name (e.g., "Kyoto")
    pub name: String,

    /// Activities offered at this destination
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Destination {
    /// Creates a destination that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            destination_id: UNASSIGNED_ID,
            name: name.into(),
            activities: Vec::new(),
        }
    }

    /// Renames the destination
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Entity for Destination {
    const RESOURCE: &'static str = "Destination";

    fn id(&self) -> i64 {
        self.destination_id
    }

    fn set_id(&mut self, id: i64) {
        self.destination_id = id;
    }
}
