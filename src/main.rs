mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{extract::State, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚦 Traffic Violation Detection & Penalty System API");
    info!("===================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let app_state = AppState::new(pool, config);

    // CORS abierto en desarrollo; restringido si hay orígenes configurados
    let cors = if app_state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(app_state.config.cors_origins.clone())
    };

    let app = Router::new()
        .route("/", get(root_endpoint))
        .route("/health", get(health_endpoint))
        .nest("/api/owners", routes::owner_routes::create_owner_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/licenses", routes::license_routes::create_license_router())
        .nest(
            "/api/violations",
            routes::violation_routes::create_violation_router(),
        )
        .nest(
            "/api/violation-types",
            routes::violation_type_routes::create_violation_type_router(),
        )
        .nest("/api/payments", routes::payment_routes::create_payment_router())
        .nest(
            "/api/suspensions",
            routes::suspension_routes::create_suspension_router(),
        )
        .nest(
            "/api/dashboard",
            routes::dashboard_routes::create_dashboard_router(),
        )
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Bienvenida");
    info!("   GET    /health - Health check");
    info!("👤 Owners:");
    info!("   POST   /api/owners - Crear propietario");
    info!("   GET    /api/owners - Listar propietarios");
    info!("   GET    /api/owners/:id - Obtener propietario");
    info!("   PUT    /api/owners/:id - Actualizar propietario");
    info!("   DELETE /api/owners/:id - Eliminar propietario");
    info!("🚗 Vehicles:");
    info!("   POST   /api/vehicles - Registrar vehículo");
    info!("   GET    /api/vehicles - Listar vehículos");
    info!("   PUT    /api/vehicles/:id - Actualizar (reasigna titular)");
    info!("🪪 Licenses:");
    info!("   POST   /api/licenses - Crear licencia");
    info!("   GET    /api/licenses - Listar licencias");
    info!("📋 Violations:");
    info!("   POST   /api/violations - Registrar infracción");
    info!("   GET    /api/violations - Listar infracciones");
    info!("   DELETE /api/violations/:id - Baja administrativa");
    info!("💰 Payments:");
    info!("   POST   /api/payments - Procesar pago");
    info!("   GET    /api/payments - Listar pagos");
    info!("🚫 Suspensions:");
    info!("   GET    /api/suspensions - Resumen por licencia");
    info!("   GET    /api/suspensions/:id - Detalle de intervalo");
    info!("📊 Dashboard:");
    info!("   GET    /api/dashboard/stats - Estadísticas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    // Cierre ordenado del pool
    db_connection.close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint raíz de bienvenida
async fn root_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to Traffic Violation Detection & Penalty System API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Health check con ping a la base de datos
async fn health_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();
    Json(json!({
        "status": if database { "ok" } else { "degraded" },
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339()
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
