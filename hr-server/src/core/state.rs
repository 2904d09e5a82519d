use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state shared by every handler
///
/// Holds the configuration and the embedded database handle. `Surreal<Db>`
/// is internally reference-counted, so cloning the state is cheap.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state
    ///
    /// Creates the working directory layout, then opens the embedded
    /// database under `work_dir/database/hr.db`.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("hr.db");
        let db_service = DbService::new(&db_path).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// Database handle for per-request repository construction
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
