use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::CreateRouteRequest;
use crate::dto::service_dto::ApiResponse;
use crate::models::Route;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new().route("/", post(create_route))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<Json<ApiResponse<Route>>, AppError> {
    let controller = RouteController::new(state.storage.clone());
    let route = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        route,
        "Route created".to_string(),
    )))
}
