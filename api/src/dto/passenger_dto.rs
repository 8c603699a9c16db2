use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePassengerRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 7, max = 20))]
    pub mobile: String,
    /// "STANDARD", "GOLD" or "PREMIUM", any case
    pub passenger_type: String,
    #[validate(range(min = 0.0))]
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBalanceRequest {
    #[validate(range(min = 0.0))]
    pub balance: f64,
}
