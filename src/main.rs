use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use vehicle_rental::config::{DatabaseConfig, EnvironmentConfig, StoreBackend};
use vehicle_rental::database;
use vehicle_rental::repositories::{MemoryRentalStore, PgRentalStore, RentalStore};
use vehicle_rental::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Vehicle Rental Management");
    info!("============================");
    info!("⚙️ Entorno: {} (store: {:?})", config.environment, config.store_backend);
    if !config.is_development() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS permisivo fuera de desarrollo: define CORS_ORIGINS");
    }

    // Inicializar store
    let store: Arc<dyn RentalStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = match database::connect(&db_config).await {
                Ok(pool) => pool,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            database::run_migrations(&pool).await?;
            Arc::new(PgRentalStore::new(pool))
        }
        StoreBackend::Memory => {
            warn!("⚠️ Usando store en memoria: los datos se pierden al reiniciar");
            Arc::new(MemoryRentalStore::new())
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_router(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/dashboard - Estado de flota y próximas reservas");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   POST /api/vehicles - Registrar vehículo");
    info!("   GET  /api/vehicles/available - Vehículos disponibles");
    info!("   GET  /api/customers - Listar clientes");
    info!("   POST /api/customers - Registrar cliente");
    info!("   GET  /api/reservations - Listar reservas");
    info!("   POST /api/reservations - Crear reserva");
    info!("   GET  /api/maintenance - Listar mantenimientos");
    info!("   POST /api/maintenance - Registrar mantenimiento");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
