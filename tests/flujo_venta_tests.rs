//! Tests de flujo completo contra una base real
//!
//! Requieren un PostgreSQL accesible vía DATABASE_URL, por eso van
//! marcados con #[ignore]:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -- --ignored
//! ```

use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use concesionaria_backend::database::connection::run_migrations;
use concesionaria_backend::models::cita::EstadoCita;
use concesionaria_backend::repositories::auto_repository::AutoRepository;
use concesionaria_backend::repositories::cita_repository::CitaRepository;
use concesionaria_backend::repositories::user_repository::UserRepository;
use concesionaria_backend::services::reporte_service::ReporteService;
use concesionaria_backend::services::venta_service::VentaService;
use concesionaria_backend::utils::errors::AppError;

async fn setup_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL debe estar definida");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .expect("no se pudo conectar a la base de tests");
    run_migrations(&pool).await.expect("schema");
    pool
}

fn correo_unico(prefijo: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}+{}@tests.local", prefijo, nanos)
}

fn fecha(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
#[ignore = "necesita DATABASE_URL"]
async fn test_flujo_alta_cita_venta_y_rechazo() {
    let pool = setup_pool().await;
    let autos = AutoRepository::new(pool.clone());
    let citas = CitaRepository::new(pool.clone());
    let users = UserRepository::new(pool.clone());
    let ventas = VentaService::new(pool.clone());

    // Escenario A: alta de auto, aparece disponible en el listado
    let auto = autos
        .create(
            "Toyota".to_string(),
            "Corolla".to_string(),
            Decimal::from(15000),
            None,
            "/img/1.png".to_string(),
        )
        .await
        .unwrap();
    assert!(auto.disponible);

    let listado = autos.list_all().await.unwrap();
    assert!(listado.iter().any(|a| a.id == auto.id && a.disponible));

    // Escenario B: un cliente agenda una cita pendiente
    let cliente = users
        .create(
            "Ana".to_string(),
            correo_unico("ana"),
            "hash-de-prueba".to_string(),
        )
        .await
        .unwrap();

    let cita = citas
        .create_pendiente(cliente.id, auto.id, fecha("2025-01-10"), None)
        .await
        .unwrap();
    assert_eq!(cita.estado, "pendiente");

    // Escenario C: la venta baja el flag y cancela la cita en cascada
    let (auto_vendido, canceladas) = ventas.vender_auto(auto.id).await.unwrap();
    assert!(!auto_vendido.disponible);
    assert!(canceladas.iter().any(|c| c.id == cita.id));
    assert!(canceladas.iter().all(|c| c.estado == "cancelada"));

    // Escenario D: agendar sobre el auto vendido falla sin crear fila
    let rechazo = citas
        .create_pendiente(cliente.id, auto.id, fecha("2025-02-01"), None)
        .await;
    assert!(matches!(rechazo, Err(AppError::Conflict(_))));

    let pendientes = citas.list_pendientes().await.unwrap();
    assert!(!pendientes.iter().any(|p| p.id == cita.id));
}

#[tokio::test]
#[ignore = "necesita DATABASE_URL"]
async fn test_cancelada_es_terminal_e_idempotente() {
    let pool = setup_pool().await;
    let autos = AutoRepository::new(pool.clone());
    let citas = CitaRepository::new(pool.clone());
    let users = UserRepository::new(pool.clone());

    let auto = autos
        .create(
            "Nissan".to_string(),
            "Versa".to_string(),
            Decimal::from(12000),
            None,
            "/img/2.png".to_string(),
        )
        .await
        .unwrap();
    let cliente = users
        .create(
            "Luis".to_string(),
            correo_unico("luis"),
            "hash-de-prueba".to_string(),
        )
        .await
        .unwrap();
    let cita = citas
        .create_pendiente(cliente.id, auto.id, fecha("2025-03-05"), None)
        .await
        .unwrap();

    citas
        .set_estado(cita.id, EstadoCita::Cancelada)
        .await
        .unwrap();

    // Cancelar dos veces no falla ni cambia nada
    citas
        .set_estado(cita.id, EstadoCita::Cancelada)
        .await
        .unwrap();

    // Reabrir una cita cancelada está prohibido
    let reapertura = citas.set_estado(cita.id, EstadoCita::Confirmada).await;
    assert!(matches!(reapertura, Err(AppError::Conflict(_))));

    // Cita inexistente
    let inexistente = citas.set_estado(i64::MAX, EstadoCita::Confirmada).await;
    assert!(matches!(inexistente, Err(AppError::NotFound(_))));
}

#[tokio::test]
#[ignore = "necesita DATABASE_URL"]
async fn test_refresh_snapshot_idempotente() {
    let pool = setup_pool().await;
    let path = std::env::temp_dir().join("citas-snapshot-flujo.json");
    let reportes = ReporteService::new(pool.clone(), &path);

    let filas_1 = reportes.refresh_snapshot().await.unwrap();
    let filas_2 = reportes.refresh_snapshot().await.unwrap();
    assert_eq!(filas_1, filas_2);

    let snapshot = reportes.read_snapshot().await;
    assert_eq!(snapshot.len(), filas_2);

    let _ = tokio::fs::remove_file(&path).await;
}
