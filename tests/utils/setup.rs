use super::request::RequestBuilder;
use migration::MigratorTrait;
use reqwest::{multipart::Form, Client};
use sea_orm::{ConnectOptions, Database, DbConn};
use serde_json::Value;
use show_catalog::{State, UploadDir};
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    sync::Arc,
};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tracing::log::LevelFilter;

pub const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

async fn connect_database(dir: &Path) -> DbConn {
    let url = format!("sqlite://{}?mode=rwc", dir.join("shows.sqlite").display());

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opts)
        .await
        .expect("failed to connect to database")
}

async fn setup_database(dir: &Path) -> DbConn {
    let db = connect_database(dir).await;

    migration::Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(db: DbConn, uploads: UploadDir) -> SocketAddr {
    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("failed to bind tcp listener");
    let state = State::with_database(db, uploads);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        show_catalog::run(listener, state).await.unwrap();
    });

    addr
}

/// Starts a backend with its own database file and upload directory.
pub async fn setup() -> Env {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let db = setup_database(dir.path()).await;

    start(dir, db).await
}

/// Starts a backend whose database has no `shows` table, so every query fails.
pub async fn setup_broken_database() -> Env {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let db = connect_database(dir.path()).await;

    start(dir, db).await
}

async fn start(dir: TempDir, db: DbConn) -> Env {
    let uploads = UploadDir::create(dir.path().join("uploads"), MAX_UPLOAD_BYTES)
        .await
        .expect("failed to create upload directory");
    let upload_dir = uploads.root().to_owned();

    let addr = setup_backend(db, uploads).await;

    Env {
        addr,
        client: Client::new(),
        upload_dir,
        _dir: Arc::new(dir),
    }
}

#[derive(Clone)]
pub struct Env {
    pub addr: SocketAddr,
    pub client: Client,
    pub upload_dir: PathBuf,
    _dir: Arc<TempDir>,
}

impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }
}

impl Env {
    pub async fn create_show(&self, form: Form) -> Value {
        let res = self.post("/api/shows").multipart(form).send().await;

        assert_eq!(res.status(), http::StatusCode::CREATED);

        res.json().await
    }

    pub async fn list_shows(&self) -> Vec<Value> {
        let res = self.get("/api/shows").send().await;

        assert_eq!(res.status(), http::StatusCode::OK);

        res.json().await
    }

    pub fn stored_uploads(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.upload_dir)
            .expect("failed to read upload directory")
            .map(|entry| entry.expect("failed to read entry").path())
            .collect()
    }
}
