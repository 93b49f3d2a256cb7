use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::service_controller::ServiceController;
use crate::dto::service_dto::{
    ApiResponse, CreateCarServiceRequest, SearchServicesRequest, ServiceDetailsResponse,
};
use crate::models::CarService;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_service_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route("/", post(create_service))
        .route("/search", post(search_services))
        .route("/:id", get(get_service_details))
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarService>>, AppError> {
    let controller = ServiceController::new(state.storage.clone());
    let services = controller.list_active().await?;
    Ok(Json(services))
}

async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<CreateCarServiceRequest>,
) -> Result<Json<ApiResponse<CarService>>, AppError> {
    let controller = ServiceController::new(state.storage.clone());
    let service = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        service,
        "Car service created".to_string(),
    )))
}

async fn search_services(
    State(state): State<AppState>,
    Json(filter): Json<SearchServicesRequest>,
) -> Result<Json<Vec<CarService>>, AppError> {
    let controller = ServiceController::new(state.storage.clone());
    let services = controller.search(filter).await?;
    Ok(Json(services))
}

async fn get_service_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceDetailsResponse>, AppError> {
    let controller = ServiceController::new(state.storage.clone());
    let details = controller
        .details(id)
        .await?
        .ok_or_else(|| not_found_error("Car service", id))?;
    Ok(Json(details))
}
