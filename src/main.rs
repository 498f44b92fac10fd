use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use cenit_salud::config::{DatabaseConfig, EnvironmentConfig};
use cenit_salud::database::DatabaseConnection;
use cenit_salud::dto::health_dto::{API_TITLE, API_VERSION};
use cenit_salud::repositories::MySqlMedicoRepository;
use cenit_salud::routes::create_app;
use cenit_salud::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let env_config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&env_config.log_level)),
        )
        .init();

    info!("🏥 {} v{}", API_TITLE, API_VERSION);
    info!("================================================");

    // Sin pool: solo se comprueba que MySQL responde, el servicio arranca igual
    let db = DatabaseConnection::new(&db_config);
    match db.ping().await {
        Ok(()) => info!("✅ Base de datos accesible en {}", db.target()),
        Err(e) => warn!("⚠️ Base de datos no accesible en {}: {}", db.target(), e),
    }

    let store = Arc::new(MySqlMedicoRepository::new(db));
    let app = create_app(AppState::new(store, env_config.clone()));

    let addr: SocketAddr = env_config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /ping - Salud del sistema");
    info!("   GET    /medicos - Listar médicos");
    info!("   GET    /medicos/:id - Obtener médico");
    info!("   POST   /medicos - Crear médico");
    info!("   PUT    /medicos/:id - Actualizar médico");
    info!("   DELETE /medicos/:id - Eliminar médico");

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
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
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
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
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
