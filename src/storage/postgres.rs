//! Implementación PostgreSQL del Storage
//!
//! Queries SQLx contra el schema de car_services/vehicles/routes/bookings.
//! La búsqueda compone el WHERE dinámicamente con QueryBuilder según los
//! campos presentes del filtro, con INNER JOIN a routes y/o vehicles.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::service_dto::SearchServicesRequest;
use crate::models::{Booking, BookingStatus, CarService, Route, Vehicle, VehicleType};
use crate::storage::Storage;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn insert_service(
        &self,
        name: String,
        phone: String,
        description: Option<String>,
    ) -> AppResult<CarService> {
        let service = sqlx::query_as::<_, CarService>(
            r#"
            INSERT INTO car_services (name, phone, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    async fn find_service(&self, id: i32) -> AppResult<Option<CarService>> {
        let service = sqlx::query_as::<_, CarService>("SELECT * FROM car_services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(service)
    }

    async fn list_active_services(&self) -> AppResult<Vec<CarService>> {
        let services = sqlx::query_as::<_, CarService>(
            "SELECT * FROM car_services WHERE is_active = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    async fn search_services(&self, filter: &SearchServicesRequest) -> AppResult<Vec<CarService>> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT cs.id, cs.name, cs.phone, cs.description, cs.is_active, cs.created_at \
             FROM car_services cs",
        );

        // Joins solo cuando el filtro trae campos del grupo correspondiente
        if filter.needs_route_match() {
            query.push(" INNER JOIN routes r ON r.service_id = cs.id AND r.is_active = TRUE");
        }
        if filter.needs_vehicle_match() {
            query.push(" INNER JOIN vehicles v ON v.service_id = cs.id AND v.is_available = TRUE");
        }

        query.push(" WHERE cs.is_active = TRUE");

        if let Some(pickup_location) = &filter.pickup_location {
            query.push(" AND r.pickup_location = ");
            query.push_bind(pickup_location.clone());
        }
        if let Some(destination) = &filter.destination {
            query.push(" AND r.destination = ");
            query.push_bind(destination.clone());
        }
        if let Some(vehicle_type) = filter.vehicle_type {
            query.push(" AND v.\"type\" = ");
            query.push_bind(vehicle_type);
        }
        if let Some(passenger_count) = filter.passenger_count {
            query.push(" AND v.capacity >= ");
            query.push_bind(passenger_count);
        }
        // NB: filter.pickup_time no participa del WHERE (campo reservado)

        query.push(" ORDER BY cs.id");

        let services = query
            .build_query_as::<CarService>()
            .fetch_all(&self.pool)
            .await?;

        Ok(services)
    }

    async fn insert_vehicle(
        &self,
        service_id: i32,
        vehicle_type: VehicleType,
        capacity: i32,
        description: Option<String>,
    ) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (service_id, "type", capacity, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(service_id)
        .bind(vehicle_type)
        .bind(capacity)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn find_vehicle(&self, id: i32) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    async fn vehicles_by_service(&self, service_id: i32) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE service_id = $1 ORDER BY id",
        )
        .bind(service_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    async fn insert_route(
        &self,
        service_id: i32,
        pickup_location: String,
        destination: String,
        price: Decimal,
        duration_minutes: Option<i32>,
    ) -> AppResult<Route> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (service_id, pickup_location, destination, price, duration_minutes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(service_id)
        .bind(pickup_location)
        .bind(destination)
        .bind(price)
        .bind(duration_minutes)
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    async fn find_route(&self, id: i32) -> AppResult<Option<Route>> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    async fn routes_by_service(&self, service_id: i32) -> AppResult<Vec<Route>> {
        let routes =
            sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE service_id = $1 ORDER BY id")
                .bind(service_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(routes)
    }

    async fn insert_booking(
        &self,
        service_id: i32,
        route_id: i32,
        vehicle_id: Option<i32>,
        customer_name: String,
        customer_phone: String,
        pickup_time: DateTime<Utc>,
        passenger_count: i32,
        notes: Option<String>,
    ) -> AppResult<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (service_id, route_id, vehicle_id, customer_name, customer_phone,
                 pickup_time, passenger_count, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(service_id)
        .bind(route_id)
        .bind(vehicle_id)
        .bind(customer_name)
        .bind(customer_phone)
        .bind(pickup_time)
        .bind(passenger_count)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn find_booking(&self, id: i32) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn list_bookings(&self, service_id: Option<i32>) -> AppResult<Vec<Booking>> {
        let bookings = match service_id {
            Some(service_id) => {
                sqlx::query_as::<_, Booking>(
                    "SELECT * FROM bookings WHERE service_id = $1 ORDER BY id",
                )
                .bind(service_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(bookings)
    }
}
