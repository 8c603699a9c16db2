use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1))]
    pub passenger_id: i64,
    #[validate(range(min = 1))]
    pub activity_id: i64,
    #[validate(range(min = 1))]
    pub destination_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    /// "PENDING", "CONFIRMED" or "CANCELLED", any case
    #[validate(length(min = 1, max = 20))]
    pub status: String,
}
