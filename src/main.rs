use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tokio::signal;
use tracing::{error, info};

use car_service_marketplace::config::environment::EnvironmentConfig;
use car_service_marketplace::database::DatabaseConnection;
use car_service_marketplace::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use car_service_marketplace::routes;
use car_service_marketplace::state::AppState;
use car_service_marketplace::storage::PgStorage;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚕 Car Service Marketplace API");
    info!("==============================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos y aplicar schema
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection.run_migrations().await?;

    let storage = Arc::new(PgStorage::new(db_connection.pool().clone()));

    let cors = if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(storage, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/services", routes::service_routes::create_service_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/routes", routes::route_routes::create_route_router())
        .nest("/api/bookings", routes::booking_routes::create_booking_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Services:");
    info!("   GET  /api/services - Listar servicios activos");
    info!("   POST /api/services - Registrar servicio");
    info!("   POST /api/services/search - Buscar servicios");
    info!("   GET  /api/services/:id - Detalle con vehículos y rutas");
    info!("🚗 Vehicles:");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("🗺️ Routes:");
    info!("   POST /api/routes - Crear ruta");
    info!("📅 Bookings:");
    info!("   POST /api/bookings - Crear reserva");
    info!("   GET  /api/bookings - Listar reservas (?service_id=)");
    info!("   PUT  /api/bookings/:id/status - Actualizar estado");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-service-marketplace",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
