use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::service_dto::ApiResponse;
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new().route("/", post(create_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.storage.clone());
    let vehicle = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        vehicle,
        "Vehicle created".to_string(),
    )))
}
