use serde::{Deserialize, Serialize};
use validator::Validate;

use ta_core::services::NewActivity;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub cost: f64,
    #[validate(range(min = 0))]
    pub capacity: i32,
    pub destination_id: i64,
}

impl From<CreateActivityRequest> for NewActivity {
    fn from(request: CreateActivityRequest) -> Self {
        NewActivity {
            name: request.name,
            description: request.description,
            cost: request.cost,
            capacity: request.capacity,
            destination_id: request.destination_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCapacityRequest {
    #[validate(range(min = 0))]
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCostRequest {
    #[validate(range(min = 0.0))]
    pub cost: f64,
}
