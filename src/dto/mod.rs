pub mod booking_dto;
pub mod route_dto;
pub mod service_dto;
pub mod vehicle_dto;
