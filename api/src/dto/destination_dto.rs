use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDestinationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Rename body shared by destinations and travel packages
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateNameRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
