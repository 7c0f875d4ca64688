use crate::{Config, UploadDir};
use anyhow::Context;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + Clone;

    fn db(&self) -> &Self::Db;
    fn uploads(&self) -> &UploadDir;
}

pub struct State {
    database: DbConn,
    uploads: UploadDir,
}

impl State {
    /// Connects to the database, applies pending migrations and prepares the
    /// upload directory.
    pub async fn new(config: &Config) -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database(&config.database_url)
            .await
            .context("failed to connect to database")?;

        migration::Migrator::up(&database, None)
            .await
            .context("failed to apply migrations")?;

        let uploads = UploadDir::create(&config.upload_dir, config.max_upload_bytes)
            .await
            .with_context(|| {
                format!(
                    "failed to create upload directory {}",
                    config.upload_dir.display()
                )
            })?;

        Ok(Self::with_database(database, uploads))
    }

    pub fn with_database(conn: DbConn, uploads: UploadDir) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            uploads,
        })
    }

    async fn connect_database(url: &str) -> Result<DbConn, DbErr> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts).await?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn uploads(&self) -> &UploadDir {
        &self.uploads
    }
}
