mod show;

use crate::{state::StateTrait, uploads::PUBLIC_PREFIX};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;
use tower_http::services::ServeDir;

pub fn routes<S: StateTrait>(state: &S) -> Router<S> {
    Router::new()
        .nest("/api/shows", show::routes::<S>(state))
        .nest_service(PUBLIC_PREFIX, ServeDir::new(state.uploads().root()))
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(error) = state.db().execute_unprepared("SELECT 1").await {
        error!("liveness check failed: {:?}", error);
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
