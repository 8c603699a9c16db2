use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePackageRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Maximum number of passengers
    #[validate(range(min = 0))]
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDestinationRequest {
    pub destination_id: i64,
}
