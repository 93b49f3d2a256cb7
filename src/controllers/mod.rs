pub mod booking_controller;
pub mod route_controller;
pub mod service_controller;
pub mod vehicle_controller;
