//! Activity entity: something to do at a destination, priced and capacity limited.

use serde::{Deserialize, Serialize};

use super::{DestinationId, Entity, UNASSIGNED_ID};

pub type ActivityId = i64;

/// A bookable activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier, assigned on creation
    pub activity_id: ActivityId,

    /// Destination offering this activity
    pub destination_id: DestinationId,

    /// Display name
    pub name: String,

    /// Free text description
    pub description: String,

    /// Full price before any passenger discount
    pub cost: f64,

    /// Remaining places; decremented on booking, incremented on cancellation
    pub capacity: i32,
}

impl Activity {
    /// Creates an activity that has not been persisted yet
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
        capacity: i32,
        destination_id: DestinationId,
    ) -> Self {
        Self {
            activity_id: UNASSIGNED_ID,
            destination_id,
            name: name.into(),
            description: description.into(),
            cost,
            capacity,
        }
    }

    /// Whether at least one place is left
    pub fn has_space(&self) -> bool {
        self.capacity > 0
    }

    /// Takes one place. Returns false (and changes nothing) when full.
    pub fn reserve_place(&mut self) -> bool {
        if !self.has_space() {
            return false;
        }
        self.capacity -= 1;
        true
    }

    /// Gives one place back. Returns false (and changes nothing) when the
    /// capacity cannot grow any further.
    pub fn release_place(&mut self) -> bool {
        match self.capacity.checked_add(1) {
            Some(capacity) => {
                self.capacity = capacity;
                true
            }
            None => false,
        }
    }
}

impl Entity for Activity {
    const RESOURCE: &'static str = "Activity";

    fn id(&self) -> i64 {
        self.activity_id
    }

    fn set_id(&mut self, id: i64) {
        self.activity_id = id;
    }
}
