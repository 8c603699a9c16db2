mod activity_tests;
mod passenger_tests;
