use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use concesionaria_backend::config::environment::EnvironmentConfig;
use concesionaria_backend::create_app;
use concesionaria_backend::database::{connection, DatabaseConnection};
use concesionaria_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Concesionaria - Catálogo y Citas");
    info!("===================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment variables"))?;
    info!("🗄️ Conectando a {}", connection::mask_database_url(&database_url));

    let db_connection = match DatabaseConnection::new(&database_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Aplicar schema idempotente (users, autos, citas)
    connection::run_migrations(&pool).await?;

    let app_state = AppState::new(pool, config.clone());
    let app = create_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🚗 Catálogo:");
    info!("   GET    /api/autos - Listar autos (público)");
    info!("   POST   /api/autos - Alta de auto (admin)");
    info!("   DELETE /api/autos/:id - Eliminar auto (admin)");
    info!("   PUT    /api/autos/:id/vender - Vender auto y cancelar citas (admin)");
    info!("📅 Citas:");
    info!("   POST   /agendar-cita - Agendar cita (cliente)");
    info!("   GET    /api/citas-pendientes - Citas pendientes (admin)");
    info!("   PATCH  /api/citas/:id/estado - Cambiar estado (admin)");
    info!("📄 Reporte:");
    info!("   GET    /api/citas-json - Snapshot de citas (admin)");
    info!("🔐 Auth:");
    info!("   POST   /api/auth/register - Registro");
    info!("   POST   /api/auth/login - Login");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
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
