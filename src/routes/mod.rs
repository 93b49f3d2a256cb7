pub mod booking_routes;
pub mod route_routes;
pub mod service_routes;
pub mod vehicle_routes;
