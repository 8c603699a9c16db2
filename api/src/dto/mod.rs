//! Request bodies accepted by the HTTP API
//!
//! Shape checks live here as `validator` rules; business rules stay in the
//! core services.

pub mod activity_dto;
pub mod booking_dto;
pub mod destination_dto;
pub mod package_dto;
pub mod passenger_dto;

pub use activity_dto::{CreateActivityRequest, UpdateCapacityRequest, UpdateCostRequest};
pub use booking_dto::{CreateBookingRequest, UpdateBookingStatusRequest};
pub use destination_dto::{CreateDestinationRequest, UpdateNameRequest};
pub use package_dto::{AddDestinationRequest, CreatePackageRequest};
pub use passenger_dto::{CreatePassengerRequest, UpdateBalanceRequest};
