use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    CreateBookingRequest, ListBookingsQuery, UpdateBookingStatusRequest,
};
use crate::dto::service_dto::ApiResponse;
use crate::models::Booking;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/:id/status", put(update_booking_status))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(state.storage.clone());
    let booking = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        booking,
        "Booking created".to_string(),
    )))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let controller = BookingController::new(state.storage.clone());
    let bookings = controller.list(query.service_id).await?;
    Ok(Json(bookings))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(state.storage.clone());
    let booking = controller.update_status(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        booking,
        "Booking status updated".to_string(),
    )))
}
