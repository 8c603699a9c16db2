//! Travel package entity: a named bundle of destinations.

use serde::{Deserialize, Serialize};

use super::{Destination, DestinationId, Entity, UNASSIGNED_ID};

pub type PackageId = i64;

/// A travel package offered to passengers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    /// Unique identifier, assigned on creation
    pub package_id: PackageId,

    /// Display name
    pub name: String,

    /// Free text description
    pub description: String,

    /// Maximum number of passengers
    pub capacity: i32,

    /// Destinations on the itinerary, in insertion order
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

impl TravelPackage {
    /// Creates a package that has not been persisted yet
    pub fn new(name: impl Into<String>, description: impl Into<String>, capacity: i32) -> Self {
        Self {
            package_id: UNASSIGNED_ID,
            name: name.into(),
            description: description.into(),
            capacity,
            destinations: Vec::new(),
        }
    }

    /// Whether the itinerary already includes the destination
    pub fn includes_destination(&self, destination_id: DestinationId) -> bool {
        self.destinations
            .iter()
            .any(|d| d.destination_id == destination_id)
    }

    /// Appends a destination unless it is already on the itinerary.
    /// Returns true if the itinerary changed.
    pub fn add_destination(&mut self, destination: Destination) -> bool {
        if self.includes_destination(destination.destination_id) {
            return false;
        }
        self.destinations.push(destination);
        true
    }
}

impl Entity for TravelPackage {
    const RESOURCE: &'static str = "Travel package";

    fn id(&self) -> i64 {
        self.package_id
    }

    fn set_id(&mut self, id: i64) {
        self.package_id = id;
    }
}
