//! Conexión a PostgreSQL
//!
//! Manejador explícito del pool con ciclo de vida documentado: se abre
//! al arrancar el proceso, viaja dentro del AppState y se cierra en el
//! apagado. No hay singletons globales.

use sqlx::PgPool;
use tracing::info;

use crate::config::database::DatabaseConfig;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Abrir la conexión con la configuración por defecto (DATABASE_URL)
    pub async fn new_default() -> Result<Self, sqlx::Error> {
        Self::new(DatabaseConfig::default()).await
    }

    pub async fn new(config: DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = config.create_pool().await?;

        // Verificación temprana: mejor fallar al arrancar que en la
        // primera request
        sqlx::query("SELECT 1").execute(&pool).await?;
        info!("✅ PostgreSQL connection pool ready");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Cierre ordenado del pool en el apagado del proceso
    pub async fn close(&self) {
        self.pool.close().await;
        info!("👋 PostgreSQL connection pool closed");
    }
}
