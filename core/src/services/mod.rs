//! Business services containing domain logic and use cases.

pub mod activity_service;
pub mod booking;
pub mod destination_service;
pub mod passenger_service;
pub mod registry;
pub mod travel_package_service;

// Re-export commonly used types
pub use activity_service::{ActivityService, NewActivity};
pub use booking::{BookingService, BookingServiceConfig};
pub use destination_service::DestinationService;
pub use passenger_service::PassengerService;
pub use registry::ServiceRegistry;
pub use travel_package_service::TravelPackageService;
