mod create;
mod delete;
mod list;

use crate::StateTrait;
use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    routing::{delete, get},
    Router,
};
use entity::shows::Category;
use sea_orm::FromQueryResult;
use serde::Serialize;

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Response {
    id: i32,
    title: String,
    description: String,
    category: Category,
    image: Option<String>,
}

/// Routes for show management
///
/// GET    /api/shows
/// POST   /api/shows
/// DELETE /api/shows/:id
pub fn routes<S: StateTrait>(state: &S) -> Router<S> {
    let body_limit = DefaultBodyLimit::max(state.uploads().max_bytes());

    Router::new()
        .route(
            "/",
            get(list::list_shows::<S>).post(create::create_show::<S>.layer(body_limit)),
        )
        .route("/:id", delete(delete::delete_show::<S>))
}
